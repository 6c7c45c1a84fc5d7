use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::config::EndpointConfig;
use crate::submission::error::TransportError;
use crate::submission::payload::RsvpPayload;

/// One-way delivery of an RSVP. `Ok` means the request left without a
/// transport fault; the response is never interpreted.
pub trait RsvpTransport: Send + Sync + 'static {
    fn send(
        &self,
        payload: &RsvpPayload,
    ) -> impl Future<Output = Result<(), TransportError>> + Send;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &EndpointConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(u64::from(secs)));
        }
        let client = builder.build().map_err(TransportError::Client)?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RsvpTransport for HttpTransport {
    async fn send(&self, payload: &RsvpPayload) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::Connection {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        // Any status counts: the endpoint is write-only.
        tracing::debug!(
            target: "submission",
            status = response.status().as_u16(),
            "endpoint answered"
        );
        Ok(())
    }
}
