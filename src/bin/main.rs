use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "movie-relay")]
#[command(about = "Relays the TMDB popular movie list as compact JSON", long_about = None)]
struct Args {
    /// Optional YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// Listen port, overrides PORT and the config file
    #[arg(short, long)]
    port: Option<String>,

    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "movie_relay=debug,tower_http=debug"
    } else {
        "movie_relay=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match movie_relay::config::Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = args.port {
        config.listen.port = port;
    }
    config.debug_logs = args.debug;

    if let Err(e) = movie_relay::run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
