// src/infrastructure/util.rs
use crate::application::ports::slug::SlugGenerator;
use slug::slugify;

/// Slugs via the `slug` crate: ASCII transliteration, lowercase, `-` joined.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, title: &str) -> String {
        if title.trim().is_empty() {
            return String::new();
        }
        slugify(title)
    }
}
