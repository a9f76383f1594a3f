use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// gymdesk - Gym management front door
#[derive(Parser)]
#[command(name = "gymdesk")]
#[command(about = "Session-guarded web front door of the gym back office", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the Argon2 hash of a password for `root.password_hash`
    HashPassword { password: String },
    /// Sign a session token, e.g. for calling the API from scripts
    IssueToken {
        sub: String,

        #[arg(long, default_value = "staff")]
        role: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = gymdesk::Config::load(cli.config)?;

    gymdesk::observability::init_observability(
        "gymdesk",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::HashPassword { password } => cli::password::hash(&password),
        Commands::Serve { host, port } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            cli::server::serve(config, host, port).await
        }
        Commands::IssueToken { sub, role } => {
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            cli::session::issue(&config, sub, role)
        }
    }
}
