mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::reddit::{RedditClient, SubredditLookup};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let server = config::ServerConfig::from_env().expect("invalid server configuration");

    // Non-fatal: chat still answers without subreddit context.
    let reddit = connect_reddit().await;
    let state = state::AppState::new(reddit);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving the JSON API only");
            routes::api_routes(state)
        }
    };

    let port = server.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "chat-server listening");
    axum::serve(listener, app).await.expect("server failed");
}

async fn connect_reddit() -> Option<Arc<dyn SubredditLookup>> {
    let config = match config::RedditConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Reddit lookups disabled");
            return None;
        }
    };

    let client = match RedditClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Reddit client init failed; lookups disabled");
            return None;
        }
    };

    match client.authenticate().await {
        Ok(()) => {
            tracing::info!("Reddit client authenticated");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::error!(error = %e, "Reddit authentication failed; lookups disabled");
            None
        }
    }
}
