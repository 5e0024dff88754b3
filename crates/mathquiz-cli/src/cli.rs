mod client;
pub(crate) mod opt;
mod play;
mod topics;

use crate::opt::Commands;
use anyhow::Error;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Play(o) => play::play(o).await,
        Commands::Topics(o) => topics::topics(o).await,
    }
}
