// src/domain/post/image.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;

/// Upper bound for an attached image, inclusive.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Image picked for upload alongside a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    file_name: String,
    content_type: String,
    data: Bytes,
}

impl ImageAttachment {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Bytes,
    ) -> DomainResult<Self> {
        let content_type = content_type.into();
        if !is_image_type(&content_type) {
            return Err(DomainError::UnsupportedFileType(content_type));
        }
        if data.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::FileTooLarge {
                size: data.len(),
                limit: MAX_IMAGE_BYTES,
            });
        }
        Ok(Self {
            file_name: file_name.into(),
            content_type,
            data,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inline `data:` URL for showing the image before it is uploaded.
    pub fn preview_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.data)
        )
    }
}

pub fn is_image_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}
