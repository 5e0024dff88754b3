#[macro_use]
extern crate diesel_migrations;

use crate::db::migration;
use crate::opt::{Cli, Commands, Db, Run};
use anyhow::{Result, bail};
use axum::serve;
use clap::Parser;
use mathquiz_core::gemini::{GeminiClient, GeminiConfig};
use mathquiz_core::generator::{GeminiGenerator, QuestionGenerator};
use mathquiz_core::ocr::{TesseractCli, TextRecognizer};
use mathquiz_utils::net::create_listener;
use sea_orm::{ConnectOptions, Database};
use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

mod app;
mod db;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;
const PRODUCTION_ENV: &str = "production";

pub(crate) struct InnerAppConfig {
    generator: Arc<dyn QuestionGenerator>,
    recognizer: Arc<dyn TextRecognizer>,
    max_questions: u32,
}

impl Debug for InnerAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InnerAppConfig")
            .field("max_questions", &self.max_questions)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    fn new(generator: Arc<dyn QuestionGenerator>, recognizer: Arc<dyn TextRecognizer>, max_questions: u32) -> Self {
        Self(Arc::new(InnerAppConfig {
            generator,
            recognizer,
            max_questions,
        }))
    }

    pub fn generator(&self) -> &dyn QuestionGenerator {
        self.0.generator.as_ref()
    }

    pub fn recognizer(&self) -> &dyn TextRecognizer {
        self.0.recognizer.as_ref()
    }

    pub fn max_questions(&self) -> u32 {
        self.0.max_questions
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the environment may be set otherwise
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(opt) => run(opt).await,
    }
}

async fn run(opt: Run) -> Result<()> {
    mathquiz_utils::tracing::setup(
        mathquiz_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .env(opt.env.clone())
            .build(),
    )?;

    if opt.gemini.gemini_api_key.trim().is_empty() {
        bail!("GEMINI_API_KEY must not be empty");
    }

    migration(&opt.database_url)
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to run migrations"))?;
    let seaorm_pool = Database::connect(build_connect_options(&opt.db, &opt.database_url)).await?;

    let gemini = GeminiClient::new(
        GeminiConfig::builder()
            .api_key(opt.gemini.gemini_api_key)
            .model(opt.gemini.gemini_model)
            .base_url(opt.gemini.gemini_base_url)
            .timeout(Duration::from_secs(opt.gemini.gemini_timeout_secs))
            .build(),
    )?;
    let recognizer = TesseractCli::new(opt.ocr.tesseract_binary, opt.ocr.ocr_language);

    let app_config = AppConfig::new(
        Arc::new(GeminiGenerator::new(gemini)),
        Arc::new(recognizer),
        opt.max_questions,
    );

    let expose_error_details = opt.env != PRODUCTION_ENV;
    let app = app::create_app(app_config, &opt.frontend_url, expose_error_details, seaorm_pool)?;

    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    tracing::info!(local_addr = %listener.local_addr()?, env = opt.env, "starting app");
    serve::serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: &Url) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_url.as_str());
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging(false);
    seaorm_pool_options
}
