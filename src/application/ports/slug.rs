// src/application/ports/slug.rs

/// Turns a post title into the URL slug the editor proposes.
///
/// Implementations lowercase, transliterate to ASCII and join words with a
/// single `-`. An empty title yields an empty slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, title: &str) -> String;
}
