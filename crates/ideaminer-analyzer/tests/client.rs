//! Integration tests for `AnalyzerClient` using wiremock HTTP mocks.

use ideaminer_analyzer::{AnalysisInput, AnalyzerClient, AnalyzerConfig, AnalyzerError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn test_client(base_url: &str) -> AnalyzerClient {
    AnalyzerClient::with_base_url(
        AnalyzerConfig {
            api_key: "sk-test".to_string(),
            model: "deepseek-chat".to_string(),
            temperature: 1.3,
            timeout_secs: 30,
        },
        base_url,
    )
    .expect("client construction should not fail")
}

fn sample_input<'a>() -> AnalysisInput<'a> {
    AnalysisInput {
        title: "I hate manual invoicing",
        text: "I spend every Friday afternoon copying numbers around",
        subreddit: "freelance",
        comments: "same here\n---\nswitched to spreadsheets, still bad",
    }
}

fn completion_with_content(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn analyze_parses_structured_result() {
    let server = MockServer::start().await;

    let analysis_json = serde_json::json!({
        "product_name": "InvoicePilot",
        "tagline": "Fridays are for clients, not copy-paste",
        "viability_score": 81,
        "core_pain_point": "manual invoice assembly eats billable hours",
        "solution": "an assistant that drafts invoices from tracked time",
        "monetization": "per-seat subscription"
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "deepseek-chat",
            "response_format": { "type": "json_object" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_with_content(&analysis_json.to_string())),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let analysis = client
        .analyze(&sample_input())
        .await
        .expect("analysis should parse");

    assert_eq!(analysis.product_name(), Some("InvoicePilot"));
    assert_eq!(analysis.viability_score(), Some(81));
    assert_eq!(analysis.as_value(), &analysis_json);
}

#[tokio::test]
async fn analyze_sends_prompt_embedding_the_inputs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with_content("{}")))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.analyze(&sample_input()).await.expect("should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = parse_body(&requests[0]);
    let prompt = body["messages"][0]["content"]
        .as_str()
        .expect("prompt present");
    assert!(prompt.contains("I hate manual invoicing"));
    assert!(prompt.contains("r/freelance"));
    assert!(prompt.contains("switched to spreadsheets"));
    assert!((body["temperature"].as_f64().unwrap() - 1.3).abs() < 1e-6);
}

#[tokio::test]
async fn analyze_accepts_schema_mismatched_json_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with_content(
            r#"{"totally": "different", "shape": [1, 2, 3]}"#,
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let analysis = client
        .analyze(&sample_input())
        .await
        .expect("valid JSON of any shape is accepted");

    assert_eq!(analysis.product_name(), None);
    assert_eq!(analysis.as_value()["shape"][2], 3);
}

#[tokio::test]
async fn analyze_missing_content_is_empty_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .analyze(&sample_input())
        .await
        .expect_err("no choices should be an error");

    assert!(matches!(err, AnalyzerError::EmptyResponse));
}

#[tokio::test]
async fn analyze_non_json_content_is_invalid_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_with_content(
            "Sure! Here is your analysis: the idea is great.",
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .analyze(&sample_input())
        .await
        .expect_err("prose content should fail to parse");

    assert!(matches!(err, AnalyzerError::InvalidJson(_)));
}

#[tokio::test]
async fn analyze_non_success_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.analyze(&sample_input()).await.expect_err("401");

    match err {
        AnalyzerError::Api { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

fn parse_body(request: &Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).expect("request body is JSON")
}
