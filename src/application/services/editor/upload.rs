// src/application/services/editor/upload.rs
use super::PostEditor;
use crate::domain::{
    errors::DomainError,
    post::{ImageAttachment, image::is_image_type},
};
use bytes::Bytes;

const ONLY_IMAGES: &str = "Only image files are allowed.";
const TOO_LARGE: &str = "Image size should be less than 5MB";

impl PostEditor {
    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Handle a drop on the upload area. Only the first file counts.
    pub fn drop_file(
        &mut self,
        file_name: impl Into<String>,
        content_type: &str,
        data: Bytes,
    ) -> bool {
        self.dragging = false;
        if !is_image_type(content_type) {
            self.error = Some(ONLY_IMAGES.into());
            return false;
        }
        self.attach_image(file_name, content_type, data)
    }

    /// Validate and attach an image picked through the file input.
    pub fn attach_image(
        &mut self,
        file_name: impl Into<String>,
        content_type: &str,
        data: Bytes,
    ) -> bool {
        match ImageAttachment::new(file_name, content_type, data) {
            Ok(image) => {
                self.preview = Some(image.preview_data_url());
                self.existing_image_url = None;
                self.draft.image = Some(image);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "image rejected");
                self.error = Some(
                    match err {
                        DomainError::FileTooLarge { .. } => TOO_LARGE,
                        _ => ONLY_IMAGES,
                    }
                    .into(),
                );
                false
            }
        }
    }

    pub fn remove_image(&mut self) {
        self.preview = None;
        self.existing_image_url = None;
        self.draft.image = None;
    }
}
