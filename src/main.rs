use clap::{Parser, Subcommand};

use firesim::api::{self, EtfArgs, FireArgs};

#[derive(Parser, Debug)]
#[command(
    name = "firesim",
    about = "FIRE target-age estimator and ETF compound-growth simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web UI and JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Estimate the age at which the FIRE target is reached
    Fire(FireArgs),
    /// Project ETF compounding over a fixed horizon
    Etf(EtfArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Serve { port } => api::run_http_server(port).await.map_err(|e| e.to_string()),
        Command::Fire(args) => api::run_fire_cli(args),
        Command::Etf(args) => api::run_etf_cli(args),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
