// ABOUTME: Main application orchestration for the wfcheck CLI
// ABOUTME: Coordinates between CLI arguments, configuration, logging, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration. Logs go to stderr.
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            &self.config.logging.level
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(!no_color)
            .with_target(false)
            .with_writer(std::io::stderr);

        let installed = match self.config.logging.format.as_str() {
            "compact" => builder.compact().try_init(),
            _ => builder.try_init(),
        };
        installed.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments. Returns whether every check passed.
    pub async fn run(&mut self, args: Args) -> Result<bool> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting wfcheck v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        match args.command() {
            Commands::Check { workflow } => commands::check_workflow(workflow, &self.config).await,
            Commands::Validate { workflows } => {
                commands::validate_workflows(workflows, &self.config).await
            }
        }
    }

    /// Create application from parsed command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}
