use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use tower_sessions::{session, Session};

pub const USER_ID: &str = "user_id";

/// The signed-in user, as recorded in the session by the identity provider.
///
/// Pages take it as `Option<SessionUser>`, which turns every rejection into
/// an anonymous visit.
#[derive(Debug)]
pub struct SessionUser {
    pub id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionUserRejection {
    #[error("no user is signed in")]
    Anonymous,
    #[error("the session layer is not installed")]
    MissingLayer,
    #[error("the session could not be read: {0}")]
    Unreadable(#[from] session::Error),
}

impl IntoResponse for SessionUserRejection {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Anonymous => StatusCode::UNAUTHORIZED,
            Self::MissingLayer | Self::Unreadable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = SessionUserRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| SessionUserRejection::MissingLayer)?;

        match session.get::<String>(USER_ID).await {
            Ok(Some(id)) => Ok(SessionUser { id }),
            Ok(None) => Err(SessionUserRejection::Anonymous),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read the session, serving it as anonymous");
                Err(e.into())
            }
        }
    }
}
