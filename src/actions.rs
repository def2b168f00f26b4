//! Client for the actions service, the external data-access layer that owns
//! MailCrafter templates.

use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::template::{id::TemplateId, TemplateLookup};

/// Read access to templates.
///
/// `Err` is reserved for unexpected failures; a template that does not exist
/// is reported through the returned [`TemplateLookup`].
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn get_template_by_id(&self, id: &TemplateId) -> anyhow::Result<TemplateLookup>;
}

#[derive(Clone)]
pub struct ActionsClient {
    http_client: Client,
    base_url: Url,
    authorization_token: Secret<String>,
}

impl ActionsClient {
    pub fn new(
        base_url: Url,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the actions HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }

    fn template_url(&self, id: &TemplateId) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("The actions base URL cannot hold a path: {}", self.base_url))?
            .pop_if_empty()
            .push("templates")
            .push(id.as_ref());
        Ok(url)
    }
}

#[async_trait]
impl TemplateStore for ActionsClient {
    #[tracing::instrument(name = "Get template by id", skip(self), fields(template_id = %id))]
    async fn get_template_by_id(&self, id: &TemplateId) -> anyhow::Result<TemplateLookup> {
        let url = self.template_url(id)?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(self.authorization_token.expose_secret())
            .send()
            .await
            .context("Failed to reach the actions service")?;

        let status = response.status();
        tracing::debug!(%status, "actions service responded");

        if status.is_server_error() {
            bail!("The actions service failed with status {}", status);
        }

        response
            .json::<TemplateLookup>()
            .await
            .context("Failed to decode the template lookup")
    }
}
