//! Team Corner CLI (`tc`)
//!
//! 리스트 선언과 접근 정책을 확인하는 운영 도구입니다.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use tc_core::config::AppConfig;
use tc_core::TeamCorner;

#[derive(Parser)]
#[command(name = "tc")]
#[command(author, version, about = "Team Corner CLI - list and access policy tool", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show lists and their access policy
    Lists,

    /// Evaluate access for a list operation
    Check {
        /// List name (e.g. Game)
        #[arg(long)]
        list: String,

        /// Operation: read, create, update, delete
        #[arg(long)]
        op: String,

        /// Authenticated user as JSON: {"id":"42","isAdmin":false,"isMember":true}
        #[arg(long)]
        user: Option<String>,

        /// Field name (evaluates the field-level override)
        #[arg(long)]
        field: Option<String>,

        /// Item ID to test against the owner filter
        #[arg(long)]
        record_id: Option<String>,
    },

    /// Show effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tc=info,tc_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let app = TeamCorner::init(config)?;

    match cli.command {
        Commands::Lists => commands::lists::run(&app, cli.format),
        Commands::Check {
            list,
            op,
            user,
            field,
            record_id,
        } => {
            let args = commands::check::CheckArgs {
                list: &list,
                op: &op,
                user: user.as_deref(),
                field: field.as_deref(),
                record_id: record_id.as_deref(),
            };
            commands::check::run(&app, &args, cli.format)
        }
        Commands::Config => commands::config::run(&app, cli.format),
    }
}
