use taskhub::{app, config::ApiConfig, standalone};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    let config = ApiConfig::from_env();
    let db = standalone::TodoDb::default();
    let router = app::with_middleware(standalone::router().with_state(db));

    app::serve(router, &config.host, config.port).await
}
