use crate::cli::client::ApiClient;
use crate::opt::Topics;
use anyhow::Result;

pub(crate) async fn topics(opt: Topics) -> Result<()> {
    if opt.server.debug {
        mathquiz_utils::tracing::setup(
            mathquiz_utils::tracing::TracingConfig::builder()
                .package(env!("CARGO_PKG_NAME"))
                .version(env!("CARGO_PKG_VERSION"))
                .build(),
        )?;
    }

    let client = ApiClient::new(opt.server.server)?;
    let topics = client.topics().await?;
    if topics.is_empty() {
        println!("No topics yet. Upload a question or generate a quiz first.");
    }
    for topic in topics {
        println!("{topic}");
    }
    Ok(())
}
