use taskhub::{
    app,
    config::TodosConfig,
    todos::{self, TodosState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    app::init_tracing();

    let config = TodosConfig::from_env();
    let state = TodosState {
        store: todos::TodoStore::default(),
        users: todos::UserDirectory::new(
            config.users_service_url.clone(),
            config.user_lookup_timeout,
        )?,
    };
    let router = app::with_middleware(todos::router().with_state(state));

    app::serve(router, &config.host, config.port).await
}
