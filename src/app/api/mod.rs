use axum::Router;

use crate::app::AppState;

pub mod template;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api", template::router())
}
