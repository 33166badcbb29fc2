use std::sync::Arc;
use lambda_http::{service_fn, Error, Request};
use accounts_lambda::router::handle_lambda;
use accounts_lambda::state::AppState;
use accounts_shared::utilities::{config, logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    logging::install_panic_hook();
    config::init();

    let state = Arc::new(AppState::from_env().await?);
    log::info!("Account handlers ready, default group: {}", state.default_group);

    lambda_http::run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { handle_lambda(&state, event).await }
    })).await?;
    Ok(())
}
