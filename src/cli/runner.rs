//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::render::{segment_rows, summary_rows, write_rows};
use crate::client::{ActivityClient, V3Client};
use crate::config::ClientConfig;
use crate::error::{Error, Result, ResultExt};
use crate::types::ActivityId;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against the configured API, writing to stdout
    pub async fn run(&self) -> Result<()> {
        let delimiter = self.delimiter()?;
        let config = self.client_config()?;
        if config.access_token.is_none() {
            return Err(Error::config(
                "Access token not specified (use --access-token or ACTIVITY_CLIENT_TOKEN)",
            ));
        }
        let client = V3Client::from_config(&config).context("Failed to build client")?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.execute(&client, delimiter, &mut out).await
    }

    /// Run the CLI command with `client`, writing rows to `out`
    pub async fn execute<C, W>(&self, client: &C, delimiter: char, out: &mut W) -> Result<()>
    where
        C: ActivityClient + ?Sized,
        W: Write,
    {
        let start = Instant::now();
        let rows = match &self.cli.command {
            Commands::Summaries { after } => {
                let summaries = client
                    .get_activity_summaries(ActivityId(*after))
                    .await
                    .context("Failed to list activities")?;
                summary_rows(&summaries)
            }
            Commands::Segments { after } => {
                let summaries = client
                    .get_activity_summaries(ActivityId(*after))
                    .await
                    .context("Failed to list activities")?;
                let ids: Vec<ActivityId> = summaries.iter().map(|s| s.id).collect();
                let activities = client.get_activities(&ids).await;
                if activities.len() < ids.len() {
                    info!(
                        "Fetched {} of {} activities, skipping the rest",
                        activities.len(),
                        ids.len()
                    );
                }
                segment_rows(&activities)
            }
            Commands::Activity { id } => {
                let activity = client
                    .get_activity(ActivityId(*id))
                    .await
                    .with_context(|| format!("Failed to fetch activity {id}"))?;
                segment_rows(std::slice::from_ref(&activity))
            }
            Commands::Related { id } => {
                let summaries = client
                    .get_related_activity_summaries(ActivityId(*id))
                    .await
                    .with_context(|| format!("Failed to list activities related to {id}"))?;
                summary_rows(&summaries)
            }
        };

        write_rows(out, delimiter, &rows)?;
        info!("Wrote {} rows in {:?}", rows.len(), start.elapsed());
        Ok(())
    }

    /// The output delimiter, which must be exactly one character
    pub fn delimiter(&self) -> Result<char> {
        let mut chars = self.cli.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !matches!(c, '"' | '\n' | '\r') => Ok(c),
            _ => Err(Error::invalid_value(
                "delimiter",
                format!(
                    "must be exactly one character other than a quote or line break, got {:?}",
                    self.cli.delimiter
                ),
            )),
        }
    }

    /// Client configuration from the config file (if any) and flag overrides
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(token) = &self.cli.access_token {
            config = config.with_access_token(token);
        }
        if let Some(url) = &self.cli.base_url {
            config = config.with_base_url(url);
        }
        if let Some(page_size) = self.cli.page_size {
            config = config.with_page_size(page_size);
        }
        if let Some(pool_size) = self.cli.pool_size {
            config = config.with_pool_size(pool_size);
        }

        config.validate()?;
        Ok(config)
    }
}
