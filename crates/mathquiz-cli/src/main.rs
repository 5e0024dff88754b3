use clap::Parser;
use cli::opt;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = opt::Cli::parse();
    cli::exec(cli.command).await
}
