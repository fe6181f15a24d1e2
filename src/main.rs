use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use route_registry::config::{load_config, RegistryConfig};
use route_registry::manifest::build_router;
use route_registry::observability::logging::init_logging;
use route_registry::{BoxError, Method};

#[derive(Parser)]
#[command(name = "route-registry")]
#[command(about = "Inspect and resolve routes declared in a route manifest", long_about = None)]
struct Cli {
    /// Route manifest (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Overrides the manifest's log level.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest
    Check,
    /// List registered routes in registration order
    Routes,
    /// Resolve a request and run its action
    Resolve {
        /// HTTP method token
        method: Method,
        /// Request path
        path: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, BoxError> {
    let config: RegistryConfig = load_config(&cli.config)?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    init_logging(level)?;

    tracing::info!(
        config = %cli.config.display(),
        routes = config.routes.len(),
        "Manifest loaded"
    );

    let router = build_router(&config)?;

    match cli.command {
        Commands::Check => {
            println!("{}: {} routes OK", cli.config.display(), router.len());
        }
        Commands::Routes => {
            for (route, entry) in router.routes().zip(&config.routes) {
                println!("{:<7} {} -> {}", route.method(), route.path(), entry.handler);
            }
        }
        Commands::Resolve { method, path } => {
            let found = match router.find(method, &path) {
                Ok(found) => found,
                Err(err) => {
                    eprintln!("{} {}: {}", method, path, err);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let output = found.route.action().call(found.params.clone()).await?;
            let report = json!({
                "method": method,
                "route": found.route.path(),
                "params": found.params,
                "result": output,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
