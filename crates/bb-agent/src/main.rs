use anyhow::Context;
use bb_agent::{init_tracing, AlwaysActive, BotSession, ClockGate, ReplayForum};
use bb_core::BotConfig;
use bb_router::route;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// BITSAT cutoff bot
#[derive(Parser)]
#[command(name = "bitsat-bot")]
#[command(about = "BITSAT forum auto-reply bot", long_about = None)]
struct Cli {
    /// JSON config file (defaults plus environment overrides when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the reply the bot would give to one comment
    Ask {
        text: String,
        /// Comment author
        #[arg(long, default_value = "aspirant")]
        author: String,
    },
    /// Run a session over a JSON-lines file of comments
    Replay {
        file: PathBuf,
        /// Reply regardless of the active-hours window
        #[arg(long)]
        ignore_hours: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<BotConfig> {
    let config = match path {
        Some(p) => BotConfig::from_file(p).with_context(|| format!("loading {}", p.display()))?,
        None => BotConfig::from_env()?,
    };
    Ok(config)
}

async fn replay(config: BotConfig, file: PathBuf, ignore_hours: bool) -> anyhow::Result<()> {
    let forum = Arc::new(
        ReplayForum::from_file(config.username.clone(), &file)
            .with_context(|| format!("reading {}", file.display()))?,
    );
    let config = Arc::new(config);

    let report = if ignore_hours {
        BotSession::new(forum.clone(), Arc::new(AlwaysActive), config).run().await?
    } else {
        let gate = Arc::new(ClockGate::new(config.active_hours));
        BotSession::new(forum.clone(), gate, config).run().await?
    };

    for posted in forum.replies() {
        println!("--- reply to {} ---\n{}\n", posted.item_id, posted.body);
    }
    println!(
        "replied: {}, skipped: {}, failed: {} ({:?})",
        report.replied, report.skipped, report.failed, report.end
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Ask { text, author } => {
            let query = route(Some(&author), &text);
            match query.intent {
                Some(_) => println!("{}", bb_reply::reply_to(&query)),
                None => println!("(no reply: not a command and no intent matched)"),
            }
        }
        Commands::Replay { file, ignore_hours } => replay(config, file, ignore_hours).await?,
    }
    Ok(())
}
