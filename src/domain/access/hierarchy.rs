// src/domain/access/hierarchy.rs

/// Lesser permissions implied by holding `held`.
///
/// Only one level is consulted: an implied token's own implications are not
/// followed.
pub fn implied_by(held: &str) -> &'static [&'static str] {
    match held {
        "posts:delete" | "posts:publish" => &["posts:edit", "posts:read"],
        "posts:delete:own" | "posts:publish:own" => &["posts:edit:own", "posts:read"],
        "posts:edit" | "posts:edit:own" => &["posts:read"],
        "categories:delete" => &["categories:edit", "categories:read"],
        "categories:edit" => &["categories:read"],
        _ => &[],
    }
}

/// Whether `granted` contains `requested` directly or one hierarchy step away.
pub fn holds(granted: &[&str], requested: &str) -> bool {
    granted.contains(&requested)
        || granted
            .iter()
            .any(|held| implied_by(held).contains(&requested))
}
