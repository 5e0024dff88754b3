use clap::{Args, Parser, Subcommand};
use mathquiz_core::quiz::selector::DEFAULT_MAX_QUESTIONS;
use mathquiz_utils::args::gemini::GeminiArgs;
use mathquiz_utils::args::ocr::OcrArgs;
use std::net::IpAddr;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "mathquiz-server", about = "Serve math quizzes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long, env = "HOST")]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long, env = "PORT")]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://math_learning.db?mode=rwc")]
    pub(crate) database_url: Url,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) gemini: GeminiArgs,

    #[command(flatten)]
    pub(crate) ocr: OcrArgs,

    #[arg(long, env = "FRONTEND_URL", default_value = "http://localhost:3001", help = "Origin allowed by CORS")]
    pub(crate) frontend_url: String,

    #[arg(long, env = "APP_ENV", default_value = "dev")]
    pub(crate) env: String,

    #[arg(long, env = "MAX_QUESTIONS", default_value_t = DEFAULT_MAX_QUESTIONS)]
    pub(crate) max_questions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mathquiz-server", "run", "--gemini-api-key", "key"]).unwrap();
        let Commands::Run(run) = cli.command;
        assert_eq!(run.frontend_url, "http://localhost:3001");
        assert_eq!(run.max_questions, 20);
        assert_eq!(run.gemini.gemini_model, "gemini-1.5-flash");
        assert_eq!(run.gemini.gemini_timeout_secs, 60);
        assert_eq!(run.ocr.ocr_language, "eng");
        assert!(run.host.is_none());
    }
}
