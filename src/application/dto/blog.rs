// src/application/dto/blog.rs
use crate::domain::{
    access::PrincipalId,
    post::{ImageAttachment, PostStatus, Subcategory},
};
use serde::{Deserialize, Serialize};

/// Stored post as returned by `GET /api/blogs/:id`. Missing fields default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub author: Option<String>,
    /// Owning account, when the backend reports one.
    #[serde(rename = "authorId", alias = "author_id")]
    pub author_id: Option<PrincipalId>,
    pub status: Option<String>,
    pub image: Option<String>,
}

/// Fields sent as multipart form data on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSubmission {
    pub title: String,
    pub content: String,
    pub category: String,
    pub subcategory: Subcategory,
    pub author: String,
    pub status: PostStatus,
    pub slug: Option<String>,
    pub image: Option<ImageAttachment>,
}

impl BlogSubmission {
    /// Text parts in submission order; `slug` only when present.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("content", self.content.clone()),
            ("category", self.category.clone()),
            ("subcategory", self.subcategory.label().to_string()),
            ("author", self.author.clone()),
            ("status", self.status.label().to_string()),
        ];
        if let Some(slug) = &self.slug {
            fields.push(("slug", slug.clone()));
        }
        fields
    }
}

/// Error body shape used by the blog backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}
