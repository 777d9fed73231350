use clap::Parser;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use wsrelay_domain::CliOverrides;
use wsrelay_infrastructure::relay::RelayWorkerPool;

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "wsrelay")]
#[command(version)]
#[command(about = "Weather station relay - forwards station telemetry and proxies weather APIs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Directory with the static frontend
    #[arg(long, value_name = "DIR")]
    static_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable the background prefetch jobs
    #[arg(long)]
    no_prefetch: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        static_dir: cli.static_dir.clone(),
        log_level: cli.log_level.clone(),
        no_prefetch: cli.no_prefetch,
    };

    let env_file = bootstrap::load_env_file();
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting wsrelay v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    if !config.station.has_relay_credentials() {
        warn!("Relay credentials are incomplete; upstream will reject relayed records");
    }

    let services = di::Services::new(&config)?;
    let use_cases = di::UseCases::new(&config, &services);

    RelayWorkerPool::new(
        services.relay_receiver,
        services.relay_client.clone(),
        config.relay.workers,
    )
    .start();

    let shutdown = CancellationToken::new();
    if config.prefetch.enabled {
        di::build_job_runner(&config, &use_cases)
            .with_shutdown_token(shutdown.clone())
            .start()
            .await;
    } else {
        info!("Prefetch jobs disabled");
    }

    let app_state = use_cases.app_state(&config, services.cache.clone());

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()?;

    server::start_web_server(web_addr, app_state, &config.server.static_dir, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
