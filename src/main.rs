use clap::Parser;
use tracing_subscriber::EnvFilter;

use sixdegrees::cli::App;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    let config = app.load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(app.log_filter(&config)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    app.run(config).await
}
