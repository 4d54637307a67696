use std::time::Duration;

use crate::{JobSource, Result};

/// Job data served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, None)
    }

    /// Build a source with an explicit request timeout.
    ///
    /// Without one the client's own defaults apply.
    pub fn with_timeout(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url: url.into(),
            client: builder.build()?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl JobSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch_body(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let response = response.error_for_status()?;
        let body = response.text().await?;
        tracing::debug!("Body length: {} bytes", body.len());
        Ok(body)
    }
}
