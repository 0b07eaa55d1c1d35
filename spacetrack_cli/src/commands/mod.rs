//! CLI subcommand implementations.

pub mod fields;
pub mod filter;
pub mod query;

use anyhow::{Context as _, Result};
use spacetrack_api::{Client, ClientConfig, Credentials};

/// Settings shared by every subcommand.
pub struct Context {
    pub config: ClientConfig,
    /// Print the rendered query URL instead of sending it.
    pub dry_run: bool,
}

impl Context {
    /// Builds a client from `SPACETRACK_IDENTITY` and `SPACETRACK_PASSWORD`.
    pub fn client(&self) -> Result<Client> {
        let identity = std::env::var("SPACETRACK_IDENTITY")
            .context("SPACETRACK_IDENTITY must be set (in the environment or .env)")?;
        let password = std::env::var("SPACETRACK_PASSWORD")
            .context("SPACETRACK_PASSWORD must be set (in the environment or .env)")?;
        let credentials = Credentials::new(&identity, &password)?;
        Ok(Client::with_config(self.config.clone(), credentials))
    }
}
