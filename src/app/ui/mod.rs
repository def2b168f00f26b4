use axum::Router;

use super::AppState;

mod home;
pub mod not_found;

pub fn router() -> Router<AppState> {
    home::router()
}
