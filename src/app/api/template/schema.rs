use serde::Serialize;

use crate::domain::template::Template;

#[derive(Serialize)]
pub struct GetTemplateResponseBody {
    pub success: bool,
    pub template: Template,
}
