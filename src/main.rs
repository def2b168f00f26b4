use anyhow::Context;
use mailcrafter::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::build(config).await?;

    tracing::info!(host = %app.host(), port = app.port(), "starting server");
    app.serve().await.context("The server stopped unexpectedly")?;

    Ok(())
}
