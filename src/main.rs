// src/main.rs
use clap::Parser;
use linkstash::api::{router, AppContext};
use linkstash::config::{load_settings, Settings};
use linkstash::infrastructure::di::ServiceContainer;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[derive(Parser, Debug)]
#[command(name = "linkstash", about = "Bookmark saving service", version)]
struct Cli {
    /// Path to a config file (overrides ~/.config/linkstash/config.toml)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Address to listen on (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// Increase log verbosity (-d, -d -d, -d -d -d)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let mut settings = load_settings(cli.config.as_deref()).unwrap_or_else(|e| {
        debug!("Failed to load settings: {}. Using defaults.", e);
        Settings::default()
    });

    if let Some(listen) = cli.listen {
        settings.listen_addr = listen;
    }

    let container = match ServiceContainer::new(&settings) {
        Ok(container) => container,
        Err(e) => {
            eprintln!("Failed to create service container: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create async runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(serve(settings, container)) {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(settings: Settings, container: ServiceContainer) -> std::io::Result<()> {
    let app = router(AppContext::from(container));

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    info!("Listening on {}", settings.listen_addr);

    axum::serve(listener, app).await
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let noisy_modules = ["html5ever", "reqwest", "mio", "want", "hyper_util", "hyper"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter).with_filter(module_filter))
        .init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
