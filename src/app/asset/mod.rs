use super::{ui::not_found::not_found_page, AppState};
use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::services::ServeDir;

const ASSETS_DIR: &str = "assets";

/// Stylesheets and images, with the HTML 404 page for anything missing.
pub fn router() -> Router<AppState> {
    Router::new().nest_service(
        "/assets",
        ServeDir::new(ASSETS_DIR).not_found_service(not_found_page.into_service()),
    )
}
