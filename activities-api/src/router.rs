use axum::{response::Redirect, routing::get, Router};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, config: &ApplicationSettings) -> Router<()> {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .nest("/activities", routes::activities::router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
