//! The seeder job: seed accounts, an initial burst, then a steady tick

use std::sync::Arc;
use std::time::Duration;

use postboard_common::{generate_password, hash_password, SeederConfig};
use postboard_core::entities::User;
use rand::seq::SliceRandom;
use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};

use crate::services::{PostService, ServiceContext, ServiceResult};

use super::provider::{ContentProvider, HttpContentProvider, ProviderError};
use super::snippet::clean_snippet;

/// Accounts the seeder posts as
pub const SEED_USERNAMES: [&str; 10] = [
    "josh01",
    "almondbabe",
    "danaflow",
    "old_zealand",
    "legumeister",
    "no-pro",
    "zmey",
    "freund",
    "samara",
    "despasito",
];

/// Posted when no provider yields a usable snippet
pub const FALLBACK_CONTENT: &str = "Just thinking about how amazing technology is! 💭";

const SEED_PASSWORD_LENGTH: usize = 6;
const MAX_POSTERS_PER_ROUND: usize = 3;

/// Timing knobs for the seeder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeederSettings {
    pub tick_interval: Duration,
    pub burst_rounds: u32,
    pub burst_delay: Duration,
}

impl From<&SeederConfig> for SeederSettings {
    fn from(config: &SeederConfig) -> Self {
        Self {
            // tokio intervals reject a zero period
            tick_interval: config.tick_interval().max(Duration::from_secs(1)),
            burst_rounds: config.burst_rounds,
            burst_delay: config.burst_delay(),
        }
    }
}

/// Where a post's text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedContent {
    Fetched { text: String, provider: String },
    Fallback,
}

impl SeedContent {
    pub fn text(&self) -> &str {
        match self {
            Self::Fetched { text, .. } => text,
            Self::Fallback => FALLBACK_CONTENT,
        }
    }
}

/// What one tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Fetched { post_id: i64, provider: String },
    FallbackUsed { post_id: i64 },
    Skipped { reason: String },
}

/// Posts fetched content as seed accounts on a timer
pub struct ContentSeeder {
    ctx: ServiceContext,
    providers: Vec<Arc<dyn ContentProvider>>,
    settings: SeederSettings,
}

impl ContentSeeder {
    pub fn new(
        ctx: ServiceContext,
        providers: Vec<Arc<dyn ContentProvider>>,
        settings: SeederSettings,
    ) -> Self {
        Self {
            ctx,
            providers,
            settings,
        }
    }

    /// Build a seeder with HTTP providers for every configured endpoint
    pub fn from_config(ctx: ServiceContext, config: &SeederConfig) -> Result<Self, ProviderError> {
        let providers = HttpContentProvider::from_endpoints(&config.providers, config.provider_timeout())?;
        Ok(Self::new(ctx, providers, SeederSettings::from(config)))
    }

    /// Create any missing seed accounts, returning the new `(username, password)` pairs
    #[instrument(skip(self))]
    pub async fn ensure_seed_users(&self) -> ServiceResult<Vec<(String, String)>> {
        let mut created = Vec::new();

        for username in SEED_USERNAMES {
            if self.ctx.user_repo().username_exists(username).await? {
                continue;
            }

            let password = generate_password(SEED_PASSWORD_LENGTH);
            let hash = hash_password(&password)?;
            self.ctx.user_repo().create(username, &hash).await?;

            info!(username, password = %password, "Seed account created");
            created.push((username.to_string(), password));
        }

        info!(count = created.len(), "Seed accounts ensured");
        Ok(created)
    }

    /// Try providers in random order; the first usable snippet wins
    pub async fn next_content(&self) -> SeedContent {
        let mut order = self.providers.clone();
        order.shuffle(&mut rand::thread_rng());

        for provider in order {
            match provider.fetch_snippet().await {
                Ok(raw) => match clean_snippet(&raw) {
                    Some(text) => {
                        return SeedContent::Fetched {
                            text,
                            provider: provider.name().to_string(),
                        }
                    }
                    None => debug!(provider = provider.name(), "Provider returned blank snippet"),
                },
                Err(e) => debug!(provider = provider.name(), error = %e, "Provider failed"),
            }
        }

        SeedContent::Fallback
    }

    /// Post once as a random seed account. Failures become `Skipped`.
    #[instrument(skip(self))]
    pub async fn tick(&self) -> TickOutcome {
        let Some(username) = SEED_USERNAMES.choose(&mut rand::thread_rng()).copied() else {
            return TickOutcome::Skipped {
                reason: "no seed usernames".to_string(),
            };
        };

        let user = match self.ctx.user_repo().find_by_username(username).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                return TickOutcome::Skipped {
                    reason: format!("seed account {username} does not exist"),
                }
            }
            Err(e) => {
                return TickOutcome::Skipped {
                    reason: e.to_string(),
                }
            }
        };

        match self.post_as(&user).await {
            Ok(outcome) => outcome,
            Err(e) => TickOutcome::Skipped {
                reason: e.to_string(),
            },
        }
    }

    /// Several rounds of posts from 1 to 3 distinct seed accounts each
    ///
    /// Returns the number of posts created.
    #[instrument(skip(self))]
    pub async fn initial_burst(&self) -> usize {
        let accounts = match self.seed_accounts().await {
            Ok(accounts) if !accounts.is_empty() => accounts,
            Ok(_) => {
                warn!("No seed accounts, skipping initial burst");
                return 0;
            }
            Err(e) => {
                warn!(error = %e, "Could not load seed accounts");
                return 0;
            }
        };

        let mut posted = 0;
        for round in 0..self.settings.burst_rounds {
            if round > 0 {
                tokio::time::sleep(self.settings.burst_delay).await;
            }

            let posters: Vec<User> = {
                let mut rng = rand::thread_rng();
                let count = rng.gen_range(1..=accounts.len().min(MAX_POSTERS_PER_ROUND));
                accounts.choose_multiple(&mut rng, count).cloned().collect()
            };

            for user in &posters {
                match self.post_as(user).await {
                    Ok(_) => posted += 1,
                    Err(e) => warn!(round, username = %user.username, error = %e, "Burst post failed"),
                }
            }
        }

        info!(posted, "Initial burst finished");
        posted
    }

    /// Run the seeder in the background until the runtime shuts down
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.ensure_seed_users().await {
                warn!(error = %e, "Seed accounts could not be created");
            }

            self.initial_burst().await;

            let mut interval = tokio::time::interval(self.settings.tick_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                match self.tick().await {
                    TickOutcome::Fetched { post_id, provider } => {
                        info!(post_id, provider = %provider, "Seeder posted fetched content");
                    }
                    TickOutcome::FallbackUsed { post_id } => {
                        info!(post_id, "Seeder posted fallback content");
                    }
                    TickOutcome::Skipped { reason } => {
                        warn!(reason = %reason, "Seeder tick skipped");
                    }
                }
            }
        })
    }

    async fn seed_accounts(&self) -> ServiceResult<Vec<User>> {
        let mut accounts = Vec::with_capacity(SEED_USERNAMES.len());
        for username in SEED_USERNAMES {
            if let Some(user) = self.ctx.user_repo().find_by_username(username).await? {
                accounts.push(user);
            }
        }
        Ok(accounts)
    }

    async fn post_as(&self, user: &User) -> ServiceResult<TickOutcome> {
        let content = self.next_content().await;
        let view = PostService::new(&self.ctx)
            .publish_as(user.id, content.text())
            .await?;

        debug!(post_id = view.id, username = %user.username, "Seed post created");

        Ok(match content {
            SeedContent::Fetched { provider, .. } => TickOutcome::Fetched {
                post_id: view.id,
                provider,
            },
            SeedContent::Fallback => TickOutcome::FallbackUsed { post_id: view.id },
        })
    }
}
