use taskhub::{app, config::UsersConfig, users};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    let config = UsersConfig::from_env();
    let store = users::UserStore::default();
    let router = app::with_middleware(users::router().with_state(store));

    app::serve(router, &config.host, config.port).await
}
