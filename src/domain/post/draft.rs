// src/domain/post/draft.rs
use super::{ImageAttachment, PostStatus, Subcategory};

/// In-memory contents of the post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: String,
    pub subcategory: Subcategory,
    pub author_name: String,
    pub status: PostStatus,
    pub image: Option<ImageAttachment>,
}

impl PostDraft {
    /// Whether there is anything worth signalling an autosave for.
    pub fn has_content(&self) -> bool {
        !self.title.is_empty() || !self.content.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_or_content_counts_as_content() {
        let mut draft = PostDraft::default();
        assert!(!draft.has_content());
        assert!(draft.is_blank());

        draft.category = "Design".into();
        assert!(!draft.has_content());

        draft.content = "body".into();
        assert!(draft.has_content());
    }
}
