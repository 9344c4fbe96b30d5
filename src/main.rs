#![warn(clippy::pedantic)]

mod config;
mod error;
mod excerpt;
mod extract;
mod ratelimit;
mod render;
mod route;
mod session;
mod supabase;


use std::net::SocketAddr;

use axum::{extract::Request, Router, ServiceExt};
use tower::Layer;
use tower_governor::GovernorLayer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};

pub type AppState = State;

/// The shared application state.
///
/// Everything handlers need lives here; today that is only the backend
/// client, which carries its own connection pool.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub supabase: supabase::Client,
}

/// Builds the application router.
///
/// The credential limiter is injected rather than built in because its
/// peer-address key extractor needs a real socket; tests pass `None`.
pub fn router(state: State, credential_limit: Option<ratelimit::Limit>) -> Router {
	let mut credentials = route::auth::credential_routes();

	if let Some(config) = credential_limit {
		credentials = credentials.route_layer(GovernorLayer { config });
	}

	Router::new()
		.merge(route::auth::routes())
		.merge(credentials)
		.merge(route::post::routes())
		.merge(route::account::routes())
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt::init();
	dotenvy::dotenv().ok();

	let config = config::Config::from_env().expect("configuration must be valid");
	let state = State {
		supabase: supabase::Client::new(&config),
	};

	let page_limit = ratelimit::default();
	let credential_limit = ratelimit::secure();

	ratelimit::cleanup_old_limits(&[&page_limit, &credential_limit]);

	let app = router(state, Some(credential_limit)).layer(GovernorLayer { config: page_limit });
	let app = NormalizePathLayer::trim_trailing_slash().layer(app);

	let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on port {}", config.port);

	axum::serve(
		listener,
		ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
	)
	.await
	.unwrap();
}
