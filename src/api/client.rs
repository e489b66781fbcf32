use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::traits::BlockedServices;
use super::types::ServiceDescriptor;
use crate::app::Credentials;
use crate::constants::{BLOCKABLE_SERVICES_ROUTE, BLOCKED_LIST_ROUTE, SET_BLOCKED_ROUTE};
use crate::utils::AghError;

/// Request shape for one round trip against the management API
#[derive(Clone, Copy)]
enum Payload<'a> {
    Get,
    Post(&'a [String]),
}

impl Payload<'_> {
    fn method(&self) -> &'static str {
        match self {
            Payload::Get => "GET",
            Payload::Post(_) => "POST",
        }
    }
}

/// HTTP client for the AdGuard Home management API
///
/// One connection per call, no retries, no timeout beyond the transport
/// default. Credentials are fixed at construction.
pub struct AghClient {
    client: Client,
    server: String,
    user: String,
    pass: String,
}

impl AghClient {
    /// Create a client bound to one appliance
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: Client::new(),
            server: credentials.server.clone(),
            user: credentials.user.clone(),
            pass: credentials.pass.clone(),
        }
    }

    /// Issue one authenticated request and enforce the status contract
    async fn request(&self, route: &str, payload: Payload<'_>) -> Result<Response, AghError> {
        let url = format!("{}{}", self.server, route);
        debug!("{} {}", payload.method(), url);

        let builder = match payload {
            Payload::Get => self.client.get(&url),
            Payload::Post(ids) => self.client.post(&url).json(ids),
        };

        let response = builder
            .basic_auth(&self.user, Some(&self.pass))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AghError::Network(format!("request to {url} failed: {err}")))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(AghError::Remote {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("unknown status").to_string(),
            });
        }

        Ok(response)
    }

    /// Read the JSON body of a GET response
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AghError> {
        let body = response
            .bytes()
            .await
            .map_err(|err| AghError::Network(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| AghError::Decode(err.to_string()))
    }
}

#[async_trait]
impl BlockedServices for AghClient {
    async fn blockable_services(&self) -> Result<Vec<ServiceDescriptor>, AghError> {
        let response = self.request(BLOCKABLE_SERVICES_ROUTE, Payload::Get).await?;
        let all: BlockedServicesAll = Self::decode(response).await?;
        Ok(all.blocked_services)
    }

    async fn blocked_list(&self) -> Result<Vec<String>, AghError> {
        let response = self.request(BLOCKED_LIST_ROUTE, Payload::Get).await?;
        // Older firmwares report an empty blocked set as `null`
        let ids: Option<Vec<String>> = Self::decode(response).await?;
        Ok(ids.unwrap_or_default())
    }

    async fn set_blocked(&self, ids: &[String]) -> Result<(), AghError> {
        // Success is signaled by status alone; the body is not parsed
        self.request(SET_BLOCKED_ROUTE, Payload::Post(ids)).await?;
        Ok(())
    }
}

// Response envelope for /blocked_services/all
#[derive(Debug, Deserialize)]
struct BlockedServicesAll {
    blocked_services: Vec<ServiceDescriptor>,
}
