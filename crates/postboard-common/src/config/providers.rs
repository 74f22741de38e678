//! Content provider endpoints for the background seeder
//!
//! The built-in list can be replaced by a TOML/YAML/JSON file named by
//! `SEEDER_PROVIDERS_FILE`, shaped as `providers = [{ name, url, format }]`.

use serde::Deserialize;

use super::app_config::ConfigError;

/// How a provider's JSON payload is turned into a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnippetFormat {
    /// `{content, author}` rendered as `"content" - author`
    Quote,
    /// `{text}`
    Text,
    /// `{activity}` rendered as `Try this activity: activity`
    Activity,
    /// `{joke}` rendered in double quotes
    Joke,
    /// `{articles: [{title, url}]}`, first article
    ArticleList,
    /// `[{title: {rendered}, link}]`, first post
    WordPressPost,
}

/// One external JSON endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderEndpoint {
    pub name: String,
    pub url: String,
    pub format: SnippetFormat,
}

impl ProviderEndpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>, format: SnippetFormat) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            format,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProvidersFile {
    providers: Vec<ProviderEndpoint>,
}

/// Built-in public endpoints
pub fn default_providers() -> Vec<ProviderEndpoint> {
    vec![
        ProviderEndpoint::new(
            "quotable",
            "https://api.quotable.io/random",
            SnippetFormat::Quote,
        ),
        ProviderEndpoint::new(
            "useless-facts",
            "https://uselessfacts.jsph.pl/random.json?language=en",
            SnippetFormat::Text,
        ),
        ProviderEndpoint::new(
            "numbers-trivia",
            "http://numbersapi.com/random/trivia?json=true&type=cs",
            SnippetFormat::Text,
        ),
        ProviderEndpoint::new(
            "bored",
            "https://www.boredapi.com/api/activity",
            SnippetFormat::Activity,
        ),
        ProviderEndpoint::new(
            "jokeapi",
            "https://v2.jokeapi.dev/joke/Any?type=single",
            SnippetFormat::Joke,
        ),
        ProviderEndpoint::new(
            "futurism",
            "https://futurism.com/api/v1/articles",
            SnippetFormat::ArticleList,
        ),
        ProviderEndpoint::new(
            "techcrunch",
            "https://techcrunch.com/wp-json/wp/v2/posts?per_page=1",
            SnippetFormat::WordPressPost,
        ),
    ]
}

/// Load provider endpoints from a config file
///
/// # Errors
/// Returns `InvalidValue` if the file is missing, malformed, or lists no providers
pub fn load_providers(path: &str) -> Result<Vec<ProviderEndpoint>, ConfigError> {
    let invalid = |e: ::config::ConfigError| ConfigError::InvalidValue("SEEDER_PROVIDERS_FILE", e.to_string());

    let file: ProvidersFile = ::config::Config::builder()
        .add_source(::config::File::with_name(path))
        .build()
        .map_err(invalid)?
        .try_deserialize()
        .map_err(invalid)?;

    if file.providers.is_empty() {
        return Err(ConfigError::InvalidValue(
            "SEEDER_PROVIDERS_FILE",
            format!("{path} lists no providers"),
        ));
    }

    Ok(file.providers)
}
