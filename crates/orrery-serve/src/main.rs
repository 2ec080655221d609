pub(crate) mod config;
pub(crate) mod routes;

#[macro_use]
extern crate rocket;

use std::path::Path;

use config::ServeConfig;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServeConfig::from_env(Path::new(config::CONFIG_FILE))?;
    config.validate()?;
    log::info!(
        "serving {} on http://{}:{}/",
        config.static_root.display(),
        config.address,
        config.port
    );

    let _rocket = routes::build(config).launch().await?;

    log::info!("clean exit done.");
    Ok(())
}
