// src/domain/post/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Categories offered by the editor. Drafts accept any string.
pub const CATEGORIES: &[&str] = &[
    "Technology",
    "Business",
    "Marketing",
    "Development",
    "Design",
    "Analytics",
    "AI/ML",
    "Cloud Computing",
    "Lifestyle",
];

/// Backend identifier of a stored post.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("post id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subcategory {
    #[default]
    Article,
    Tutorial,
    #[serde(rename = "Interview Questions")]
    InterviewQuestions,
}

impl Subcategory {
    pub const ALL: [Self; 3] = [Self::Article, Self::Tutorial, Self::InterviewQuestions];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Tutorial => "Tutorial",
            Self::InterviewQuestions => "Interview Questions",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subcategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown subcategory '{s}'")))
    }
}

/// Editorial highlight tag shown alongside a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    #[default]
    None,
    Trending,
    Featured,
    #[serde(rename = "Editor's Pick")]
    EditorsPick,
    Recommended,
}

impl PostStatus {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Trending,
        Self::Featured,
        Self::EditorsPick,
        Self::Recommended,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Trending => "Trending",
            Self::Featured => "Featured",
            Self::EditorsPick => "Editor's Pick",
            Self::Recommended => "Recommended",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.label() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown status '{s}'")))
    }
}
