use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use dev_proxy::{routes, ProxyConfig, ProxyState};
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ProxyConfig::load().context("Failed to load dev proxy configuration")?;
    config.log_configuration();

    let addr = config.listen_addr();
    let state = web::Data::new(ProxyState::new(config)?);

    info!("Starting dev proxy on {}:{}", addr.0, addr.1);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(routes)
    })
    .bind(addr)
    .context("Failed to bind dev proxy address")?
    .run()
    .await?;

    Ok(())
}
