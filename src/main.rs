use winecopy::app::build;
use winecopy::config::get_configuration;
use winecopy::telemetry::setup_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing("winecopy", "info", std::io::stdout);

    let settings = get_configuration()?;
    let server = build(&settings)?;
    tracing::info!(address = %server.local_addr(), "Listening");

    server.await?;
    Ok(())
}
