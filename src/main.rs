use enroute::config::Config;
use enroute::engine::Engine;
use enroute::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("enroute=info")),
        )
        .init();

    let config = Config::from_env().expect("load configuration");

    let engine = Engine::from_config(&config);

    serve(engine, config.bind_addr).await;
}
