//! Like toggle outcome

use serde::{Deserialize, Serialize};

/// Action performed by a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeAction {
    Liked,
    Unliked,
}

impl LikeAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liked => "liked",
            Self::Unliked => "unliked",
        }
    }

    /// Human-readable confirmation returned to the caller
    pub fn message(&self) -> &'static str {
        match self {
            Self::Liked => "Post liked",
            Self::Unliked => "Post unliked",
        }
    }

    /// The action a second toggle would perform
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Liked => Self::Unliked,
            Self::Unliked => Self::Liked,
        }
    }
}

impl std::fmt::Display for LikeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a committed toggle: what happened and the recomputed count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
    pub action: LikeAction,
    pub likes: i64,
}

impl LikeToggle {
    pub fn new(action: LikeAction, likes: i64) -> Self {
        Self { action, likes }
    }
}
