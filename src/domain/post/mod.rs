// src/domain/post/mod.rs
pub mod draft;
pub mod image;
pub mod value_objects;

pub use draft::PostDraft;
pub use image::{ImageAttachment, MAX_IMAGE_BYTES};
pub use value_objects::{CATEGORIES, PostId, PostStatus, Subcategory};
