use clap::Parser;

use fsbrowse_lib::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    fsbrowse_lib::logging::init(&config.log)?;
    fsbrowse_lib::run(config).await
}
