use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header::CACHE_CONTROL,
    response::IntoResponse,
    Json,
};

use super::schema;
use crate::{
    actions::TemplateStore,
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::template::{id::TemplateId, TEMPLATE_NOT_FOUND},
};

const FETCH_FAILED: &str = "Failed to fetch template";

#[tracing::instrument(name = "Get template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> impl IntoResponse {
    let result = match id {
        Ok(Path(id)) => fetch_template(state.templates.as_ref(), id).await,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected template path");
            Err(AppError::NotFound(TEMPLATE_NOT_FOUND.to_owned()))
        }
    };

    ([(CACHE_CONTROL, "no-store")], result)
}

async fn fetch_template(
    store: &dyn TemplateStore,
    id: String,
) -> AppResult<Json<schema::GetTemplateResponseBody>> {
    let id = TemplateId::try_from(id).map_err(|e| {
        tracing::debug!(detail = %e, "rejected template id");
        AppError::NotFound(TEMPLATE_NOT_FOUND.to_owned())
    })?;

    let template = store
        .get_template_by_id(&id)
        .await
        .map_err(|e| AppError::unexpected(FETCH_FAILED, e))?
        .into_template()
        .map_err(AppError::NotFound)?;

    Ok(Json(schema::GetTemplateResponseBody {
        success: true,
        template,
    }))
}
