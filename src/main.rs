use http_calculator::{build_form_app, build_query_app, config::Config, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let form_socket = config.form_socket()?;
    let query_socket = config.query_socket()?;

    let form_listener = tokio::net::TcpListener::bind(form_socket).await?;
    let query_listener = tokio::net::TcpListener::bind(query_socket).await?;

    info!(
        bind_addr = %config.bind_addr,
        form_port = config.form_port,
        query_port = config.query_port,
        "server starting"
    );

    tokio::try_join!(
        async { axum::serve(form_listener, build_form_app().into_make_service()).await },
        async { axum::serve(query_listener, build_query_app().into_make_service()).await },
    )?;

    Ok(())
}
