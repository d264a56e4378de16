use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use image_bot::app::{self, RunOptions};
use image_bot::config::{DEFAULT_GITHUB_API_URL, GITHUB_TOKEN_ENV};
use image_bot::logging::{self, LogFormat};
use image_bot::version::command::SystemCommandRunner;
use image_bot::version::orchestrator::ProviderDeps;
use image_bot::version::registries::{GitHubRegistry, build_http_client};

/// Resolve current package versions and write them into an image manifest.
///
/// If the GITHUB_TOKEN environment variable is set, it is used for all GitHub API calls.
#[derive(Parser, Debug)]
#[command(name = "image-bot")]
#[command(version, about)]
struct Cli {
    /// Configuration document listing the sources to resolve
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Manifest document to update in place
    #[arg(short = 'm', long = "manifest", value_name = "PATH")]
    manifest: PathBuf,

    /// GitHub API URL
    #[arg(long = "api-url", value_name = "URL", default_value = DEFAULT_GITHUB_API_URL)]
    api_url: String,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let http = build_http_client().context("error building HTTP client")?;
    let token = std::env::var(GITHUB_TOKEN_ENV).ok();

    let deps = ProviderDeps {
        registry: Arc::new(GitHubRegistry::new(http.clone(), &cli.api_url, token)),
        runner: Arc::new(SystemCommandRunner),
        http,
    };
    let options = RunOptions {
        config_path: cli.config,
        manifest_path: cli.manifest,
    };

    until_interrupted(app::run(&options, &deps), tokio::signal::ctrl_c()).await
}

/// Drops `run` once `interrupt` fires. A failed interrupt disables that arm.
async fn until_interrupted<R, I>(run: R, interrupt: I) -> anyhow::Result<()>
where
    R: Future<Output = anyhow::Result<()>>,
    I: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        result = run => result,
        Ok(()) = interrupt => Err(anyhow::anyhow!("interrupted")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("error building runtime")
        .and_then(|runtime| runtime.block_on(run(cli)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
