use clap::{Args, Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "mathquiz", about = "Practice math in the terminal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Play a quiz
    Play(Play),
    /// List available topics
    Topics(Topics),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct Server {
    #[arg(long, env = "MATHQUIZ_SERVER", default_value = "http://127.0.0.1:3000")]
    pub(crate) server: Url,
    #[arg(short, long)]
    pub(crate) debug: bool,
}

#[derive(Debug, Parser)]
pub(crate) struct Play {
    #[command(flatten)]
    pub(crate) server: Server,
    #[arg(short, long)]
    pub(crate) topic: Option<String>,
    #[arg(short = 'n', long, default_value_t = 5)]
    pub(crate) count: u32,
    #[arg(long)]
    pub(crate) difficulty: Option<String>,
    #[arg(long, value_parser = ["database", "db", "generator", "gemini", "auto"])]
    pub(crate) mode: Option<String>,
    /// Pause after each answer before the next question
    #[arg(long, default_value_t = 2000)]
    pub(crate) delay_ms: u64,
}

#[derive(Debug, Parser)]
pub(crate) struct Topics {
    #[command(flatten)]
    pub(crate) server: Server,
}
