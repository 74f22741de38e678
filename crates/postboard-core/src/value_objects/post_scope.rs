//! Listing scope

/// Which subset of posts a listing returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PostScope {
    /// Every post
    #[default]
    All,
    /// Posts authored by the viewer
    Mine,
    /// Posts the viewer currently likes
    Liked,
}

impl PostScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Mine => "mine",
            Self::Liked => "liked",
        }
    }
}

impl std::fmt::Display for PostScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
