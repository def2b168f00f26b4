use derive_more::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct TemplateId(String);

impl TryFrom<String> for TemplateId {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("template id is empty".into());
        }

        // Dot segments would be resolved away in the actions service URL.
        if value == "." || value == ".." {
            return Err("template id is a dot segment".into());
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
