use askama::Template;
use axum::response::IntoResponse;

use super::sections::{Feature, Stat, FEATURES, STATS};
use crate::app::extractor::session_user::SessionUser;

/// Header, hero, stats, features, call to action and footer, in that order.
#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    signed_in: bool,
    stats: &'static [Stat],
    features: &'static [Feature],
}

impl HomeTemplate {
    fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
            stats: STATS,
            features: FEATURES,
        }
    }
}

#[tracing::instrument(name = "Home page", skip(user), fields(signed_in = user.is_some()))]
pub async fn home_page(user: Option<SessionUser>) -> impl IntoResponse {
    HomeTemplate::new(user.is_some())
}
