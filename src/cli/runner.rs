//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::cli::output::print_items;
use crate::config::load_run_config;
use crate::credentials::{Credentials, CredentialsDef};
use crate::error::Result;
use crate::fetcher::{EvaluationFetcher, EvaluationOptions, FetcherConfig};
use crate::node::{ExecuteContext, NodeItem, NodeParameters, StaticContext, WeValuNode};
use std::path::Path;
use std::time::{Duration, Instant};
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

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::GetAll {
                return_all,
                limit,
                department_id,
                iteration,
                offset,
                max_pages,
            } => {
                let options = EvaluationOptions {
                    department_id: department_id.clone(),
                    iteration: Some(*iteration),
                    offset: *offset,
                };
                let params = NodeParameters::get_all(*return_all, *limit, options);
                let config = self.fetcher_config().with_max_pages(*max_pages);
                self.execute(&StaticContext::new(params), &config, CredentialsDef::default())
                    .await
            }
            Commands::Summary => {
                let ctx = StaticContext::new(NodeParameters::get_summary());
                self.execute(&ctx, &self.fetcher_config(), CredentialsDef::default())
                    .await
            }
            Commands::Run { file } => self.run_file(file).await,
            Commands::Serve { port, max_pages } => {
                let config = crate::cli::ServerConfig {
                    fetcher: self.fetcher_config().with_max_pages(*max_pages),
                };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Credentials from the command line, falling back to `file`
    fn credentials(&self, file: CredentialsDef) -> Result<Credentials> {
        CredentialsDef {
            api_key: self.cli.api_key.clone(),
            base_url: self.cli.base_url.clone(),
        }
        .or(file)
        .into_credentials()
    }

    fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::new().with_timeout(Duration::from_secs(self.cli.timeout))
    }

    /// Execute a run file
    async fn run_file(&self, path: &Path) -> Result<()> {
        let run = load_run_config(path)?;
        info!("Loaded run file: {}", path.display());
        self.execute(&run.context(), &run.fetcher_config(), run.credentials.clone())
            .await
    }

    async fn execute(
        &self,
        ctx: &dyn ExecuteContext,
        config: &FetcherConfig,
        file_credentials: CredentialsDef,
    ) -> Result<()> {
        let items = self.execute_node(ctx, config, file_credentials).await?;
        print_items(&items, self.cli.format)
    }

    async fn execute_node(
        &self,
        ctx: &dyn ExecuteContext,
        config: &FetcherConfig,
        file_credentials: CredentialsDef,
    ) -> Result<Vec<NodeItem>> {
        let start = Instant::now();
        let credentials = self.credentials(file_credentials)?;
        info!("Using WeValu API at {}", credentials.base_url());

        let node = WeValuNode::new(EvaluationFetcher::with_config(credentials, config)?);
        let items = node.execute(ctx).await?;

        info!(
            "Emitted {} records in {:.2}s",
            items.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(items)
    }
}
