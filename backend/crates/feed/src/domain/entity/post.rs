//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, PostId};

/// Legacy client value meaning "keep the current image"
pub const IMAGE_UNCHANGED_SENTINEL: &str = "undefined";

/// Post entity
///
/// `creator_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: PostId,
    pub title: String,
    pub content: String,
    /// Reference into the image store, relative to its base path
    pub image_url: Option<String>,
    pub creator_id: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        image_url: Option<String>,
        creator_id: AccountId,
    ) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            title: title.into(),
            content: content.into(),
            image_url: ImageChange::from_input(image_url).into_value(),
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace title and content, and the image if one was supplied
    ///
    /// Returns the previous image reference when it was replaced by a
    /// different one, so the caller can schedule its removal.
    pub fn revise(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        image: ImageChange,
    ) -> Option<String> {
        self.title = title.into();
        self.content = content.into();
        self.updated_at = Utc::now();

        match image {
            ImageChange::Keep => None,
            ImageChange::Replace(new_image) => {
                let previous = self.image_url.replace(new_image);
                previous.filter(|old| Some(old) != self.image_url.as_ref())
            }
        }
    }
}

/// What an update asks for regarding the post image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageChange {
    Keep,
    Replace(String),
}

impl ImageChange {
    /// Absent, empty, or the `"undefined"` sentinel mean no change
    pub fn from_input(image_url: Option<String>) -> Self {
        match image_url {
            Some(url) if !url.trim().is_empty() && url != IMAGE_UNCHANGED_SENTINEL => {
                Self::Replace(url)
            }
            _ => Self::Keep,
        }
    }

    fn into_value(self) -> Option<String> {
        match self {
            Self::Keep => None,
            Self::Replace(url) => Some(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(image: Option<&str>) -> Post {
        Post::new(
            "Hello world",
            "Some content",
            image.map(str::to_string),
            AccountId::new(),
        )
    }

    #[test]
    fn test_image_change_sentinel() {
        assert_eq!(ImageChange::from_input(None), ImageChange::Keep);
        assert_eq!(
            ImageChange::from_input(Some("undefined".to_string())),
            ImageChange::Keep
        );
        assert_eq!(ImageChange::from_input(Some("".to_string())), ImageChange::Keep);
        assert_eq!(
            ImageChange::from_input(Some("images/a.png".to_string())),
            ImageChange::Replace("images/a.png".to_string())
        );
    }

    #[test]
    fn test_new_post_normalizes_image() {
        assert_eq!(post(Some("undefined")).image_url, None);
        assert_eq!(post(Some("images/a.png")).image_url.as_deref(), Some("images/a.png"));
    }

    #[test]
    fn test_revise_keeps_image() {
        let mut post = post(Some("images/a.png"));
        let old = post.revise("New title", "New content", ImageChange::Keep);
        assert_eq!(old, None);
        assert_eq!(post.image_url.as_deref(), Some("images/a.png"));
        assert_eq!(post.title, "New title");
        assert!(post.updated_at >= post.created_at);
    }

    #[test]
    fn test_revise_replaces_image() {
        let mut post = post(Some("images/a.png"));
        let old = post.revise(
            "New title",
            "New content",
            ImageChange::Replace("images/b.png".to_string()),
        );
        assert_eq!(old.as_deref(), Some("images/a.png"));
        assert_eq!(post.image_url.as_deref(), Some("images/b.png"));
    }

    #[test]
    fn test_revise_same_image_is_not_removed() {
        let mut post = post(Some("images/a.png"));
        let old = post.revise(
            "New title",
            "New content",
            ImageChange::Replace("images/a.png".to_string()),
        );
        assert_eq!(old, None);
    }
}
