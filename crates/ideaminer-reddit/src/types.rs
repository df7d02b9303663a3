use serde::{Deserialize, Serialize};

/// A single post or comment, flattened from the Reddit listing envelope.
///
/// `body` carries the post selftext for posts and the comment body for
/// comments; either may be the `[removed]` / `[deleted]` sentinels Reddit
/// substitutes for moderated content. `title` is empty for comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPost {
    pub id: String,
    pub title: String,
    pub author: String,
    pub ups: i64,
    pub num_comments: i64,
    pub permalink: String,
    pub subreddit: String,
    #[serde(rename = "selftext")]
    pub body: String,
    pub created_utc: i64,
}

/// Reddit listing wrapper: `{"data": {"children": [{"data": {...}}]}}`.
///
/// Every level defaults so that an absent container deserializes to an
/// empty listing rather than an error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Listing {
    #[serde(default)]
    pub(crate) data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub(crate) children: Vec<Child>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Child {
    #[serde(default)]
    pub(crate) data: RawItem,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    ups: i64,
    #[serde(default)]
    num_comments: i64,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    subreddit: String,
    #[serde(default)]
    selftext: Option<String>,
    #[serde(default)]
    body: Option<String>,
    // Reddit sends fractional epoch seconds.
    #[serde(default)]
    created_utc: f64,
}

impl RawItem {
    /// Flatten a raw listing child into a [`RedditPost`].
    ///
    /// Posts carry `selftext`, comments carry `body`; whichever is present
    /// becomes the normalized body text.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn into_post(self) -> RedditPost {
        RedditPost {
            id: self.id,
            title: self.title,
            author: self.author,
            ups: self.ups,
            num_comments: self.num_comments,
            permalink: self.permalink,
            subreddit: self.subreddit,
            body: self.selftext.or(self.body).unwrap_or_default(),
            created_utc: self.created_utc as i64,
        }
    }
}

/// Deserialize a listing value into flat posts.
///
/// A value that is not a listing at all (wrong type, missing container)
/// yields an empty vector — upstream response shape is not guaranteed.
pub(crate) fn parse_listing(value: serde_json::Value) -> Vec<RedditPost> {
    match serde_json::from_value::<Listing>(value) {
        Ok(listing) => listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into_post())
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "unexpected Reddit listing shape, treating as empty");
            Vec::new()
        }
    }
}
