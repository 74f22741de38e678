//! Background content seeder
//!
//! Keeps the feed alive by posting snippets fetched from public JSON APIs
//! under a fixed set of seed accounts.

pub mod job;
pub mod provider;
pub mod snippet;

pub use job::{ContentSeeder, SeedContent, SeederSettings, TickOutcome, FALLBACK_CONTENT, SEED_USERNAMES};
pub use provider::{extract_snippet, ContentProvider, HttpContentProvider, ProviderError};
pub use snippet::{clean_snippet, MAX_SNIPPET_CHARS};
