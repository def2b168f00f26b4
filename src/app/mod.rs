use std::{
    io,
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{http::Request, Router};
use bb8_redis::RedisConnectionManager;
use reqwest::Url;
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer, SessionStore};

use crate::{
    actions::{ActionsClient, TemplateStore},
    config::Settings,
};

mod api;
mod asset;
mod error;
mod extractor;
mod health;
mod session_store;
mod ui;

use self::session_store::RedisStore;

#[derive(Clone)]
pub struct AppState {
    templates: Arc<dyn TemplateStore>,
}

impl AppState {
    pub fn new(templates: Arc<dyn TemplateStore>) -> Self {
        Self { templates }
    }
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(api::router())
        .merge(ui::router())
        .merge(asset::router())
}

/// The complete application, with sessions read from `session_store`.
pub fn router<S>(state: AppState, session_store: S, secure_cookie: bool) -> Router
where
    S: SessionStore + Clone,
{
    app_router()
        .fallback(ui::not_found::not_found_page)
        .with_state(state)
        .layer(SessionManagerLayer::new(session_store).with_secure(secure_cookie))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let id = uuid::Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    method = ?request.method(),
                    uri = ?request.uri(),
                    %id,
                )
            }),
        )
}

pub struct App {
    listener: TcpListener,
    address: SocketAddr,
    state: AppState,
    sessions: Option<bb8::Pool<RedisConnectionManager>>,
    secure_cookie: bool,
}

impl App {
    pub async fn build(config: Settings) -> anyhow::Result<Self> {
        let actions_url = Url::parse(&config.actions.base_url)
            .with_context(|| format!("Invalid actions base URL: {}", config.actions.base_url))?;
        let actions = ActionsClient::new(
            actions_url,
            config.actions.authorization_token.clone(),
            config.actions.timeout(),
        )?;

        let sessions = match &config.session.redis_uri {
            Some(uri) => {
                let manager = RedisConnectionManager::new(uri.expose_secret().as_str())
                    .context("Invalid Redis URI")?;
                let pool = bb8::Pool::builder()
                    .build(manager)
                    .await
                    .context("Could not connect to Redis")?;
                Some(pool)
            }
            None => {
                tracing::warn!("no Redis configured, sessions are kept in memory");
                None
            }
        };

        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .context("The listener should be able to bind the address.")?;
        let address = listener.local_addr()?;

        Ok(Self {
            listener,
            address,
            state: AppState::new(Arc::new(actions)),
            sessions,
            secure_cookie: config.session.secure_cookie,
        })
    }

    pub fn host(&self) -> IpAddr {
        self.address.ip()
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = match self.sessions {
            Some(pool) => router(self.state, RedisStore::new(pool), self.secure_cookie),
            None => router(self.state, MemoryStore::default(), self.secure_cookie),
        };

        axum::serve(self.listener, app.into_make_service()).await
    }
}
