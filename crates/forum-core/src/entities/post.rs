//! Post entity - a submission published into a group

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Forum post
///
/// Posts are addressed publicly by `(identifier, slug)` rather than by their
/// internal id. The identifier is a short random handle assigned at creation;
/// the slug is derived from the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub identifier: String,
    pub slug: String,
    pub title: String,
    pub body: Option<String>,
    pub group_name: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post, assigning a fresh identifier and slugging the title
    pub fn new(
        id: Snowflake,
        title: String,
        body: Option<String>,
        group_name: String,
        username: String,
    ) -> Self {
        let identifier = generate_post_identifier();
        let slug = slugify(&title, &identifier);
        let now = Utc::now();
        Self {
            id,
            identifier,
            slug,
            title,
            body,
            group_name,
            username,
            created_at: now,
            updated_at: now,
        }
    }

    /// Canonical URL path for this post
    pub fn url(&self) -> String {
        format!("/sg/{}/{}/{}", self.group_name, self.identifier, self.slug)
    }

    /// Check if a user authored this post
    #[inline]
    pub fn is_author(&self, username: &str) -> bool {
        self.username == username
    }
}

const IDENTIFIER_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Post identifier length
const POST_IDENTIFIER_LEN: usize = 7;

/// Generate a random alphanumeric post identifier
pub fn generate_post_identifier() -> String {
    random_identifier(POST_IDENTIFIER_LEN)
}

pub(crate) fn random_identifier(len: usize) -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| IDENTIFIER_CHARSET[rng.gen_range(0..IDENTIFIER_CHARSET.len())] as char)
        .collect()
}

/// Derive a URL slug from a title
///
/// Lowercases the title and joins alphanumeric runs with `-`. Titles with no
/// sluggable characters fall back to the identifier so the `(identifier, slug)`
/// pair always resolves.
pub fn slugify(title: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    if slug.is_empty() {
        fallback.to_ascii_lowercase()
    } else {
        slug
    }
}
