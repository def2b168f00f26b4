pub mod id;

use serde::{Deserialize, Serialize};

pub const TEMPLATE_NOT_FOUND: &str = "Template not found";

/// An email-campaign template as stored by the actions service.
///
/// The shape belongs to the actions service; it is forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(serde_json::Value);

impl From<serde_json::Value> for Template {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Outcome of a template lookup, as reported by the actions service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateLookup {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub template: Option<Template>,
}

impl TemplateLookup {
    /// Resolve the lookup into the template, or the message to report.
    ///
    /// A non-empty `error` wins over `success`, and a missing template is a
    /// failure even when the lookup claims success.
    pub fn into_template(self) -> Result<Template, String> {
        let error = self.error.filter(|e| !e.is_empty());
        match (self.success, error, self.template) {
            (true, None, Some(template)) => Ok(template),
            (_, error, _) => Err(error.unwrap_or_else(|| TEMPLATE_NOT_FOUND.to_owned())),
        }
    }
}
