use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wpfleet::errors::FleetError;
use wpfleet::workflow::executor::WorkflowTiming;
use wpfleet::{api, demo};

#[derive(Parser)]
#[command(
    name = "wpfleet",
    version,
    about = "Fleet maintenance service for managed WordPress sites"
)]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Skip the demo fleet fixtures (the admin account is still created)
    #[arg(long)]
    no_demo: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        let exit_code = match &e {
            FleetError::Validation(_) => 2,
            FleetError::Authentication(_) => 4,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: Cli) -> Result<(), FleetError> {
    let state = api::AppState::new(WorkflowTiming::default());

    if cli.no_demo {
        demo::seed_admin(&state.store)?;
    } else {
        demo::seed_demo_data(&state.store)?;
        info!("Seeded demo fleet fixtures");
    }

    let app = api::build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| FleetError::Internal(format!("Server error: {e}")))?;

    Ok(())
}
