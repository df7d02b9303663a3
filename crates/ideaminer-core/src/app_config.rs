use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub reddit_base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub analyzer_api_key: Option<String>,
    pub analyzer_base_url: String,
    pub analyzer_model: String,
    pub analyzer_temperature: f32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("reddit_base_url", &self.reddit_base_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "analyzer_api_key",
                &self.analyzer_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("analyzer_base_url", &self.analyzer_base_url)
            .field("analyzer_model", &self.analyzer_model)
            .field("analyzer_temperature", &self.analyzer_temperature)
            .finish()
    }
}
