mod commands;
mod config;
mod state;
mod toast;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use state::AppState;

#[derive(Parser)]
#[command(name = "weekgoals")]
#[command(about = "Track your weekly goals from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show this week's goal summary
    Summary,

    /// List goals still pending this week
    Pending,

    /// Create a new weekly goal
    Create {
        #[arg(short, long, help = "Activity you want to practice")]
        title: String,

        #[arg(short, long, help = "Optional description")]
        description: Option<String>,

        #[arg(short, long, help = "Desired times per week (1-7)")]
        frequency: Option<String>,
    },
}

fn init_tracing() {
    let log_format = std::env::var("WG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!("using API at {}", config.api_base_url);
    let state = AppState::new(&config);

    match cli.command {
        Commands::Summary => commands::summary::show(&state).await,
        Commands::Pending => commands::pending::list(&state).await,
        Commands::Create {
            title,
            description,
            frequency,
        } => {
            commands::create::run(&state, &title, description.as_deref(), frequency.as_deref())
                .await
        }
    }
}
