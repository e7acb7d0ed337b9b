use async_trait::async_trait;
use quick_xml::{events::Event, Reader};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use crate::{
    config::{ApiToken, AppConfig},
    error::AppError,
    models::trip::{CancelAck, Trip, TripDetail},
};

/// Remote operations of the trip-management API.
#[async_trait]
pub trait TripApi: Send + Sync {
    async fn list_trips(&self) -> Result<Vec<Trip>, AppError>;

    async fn get_trip_detail(&self, trip_id: &str) -> Result<TripDetail, AppError>;

    async fn cancel_trip(&self, trip_id: &str) -> Result<CancelAck, AppError>;
}

#[derive(Clone)]
pub struct TripApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: ApiToken,
}

impl TripApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.trip_api_timeout)
            .build()?;
        Ok(Self::with_client(
            http,
            config.trip_api_base_url.clone(),
            config.trip_api_token.clone(),
        ))
    }

    pub fn with_client(http: reqwest::Client, base_url: Url, token: ApiToken) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Appends `segment` to the base path as one percent-encoded path segment.
    fn endpoint(&self, segment: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Config(format!("trip api base url {} has no path", self.base_url))
            })?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }
}

#[async_trait]
impl TripApi for TripApiClient {
    async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        debug!(url = %self.base_url, "listing trips");
        let trips = self
            .http
            .get(self.base_url.clone())
            .header(ACCEPT, "application/json")
            .bearer_auth(self.token.expose())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Trip>>()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))?;
        debug!(count = trips.len(), "trips listed");
        Ok(trips)
    }

    async fn get_trip_detail(&self, trip_id: &str) -> Result<TripDetail, AppError> {
        let url = self.endpoint(trip_id)?;
        debug!(trip_id, %url, "fetching trip detail");
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(self.token.expose())
            .send()
            .await?
            .error_for_status()?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("json"));
        let body = response.text().await?;

        if is_json {
            Ok(serde_json::from_str(&body)?)
        } else {
            Ok(quick_xml::de::from_str(&body)?)
        }
    }

    async fn cancel_trip(&self, trip_id: &str) -> Result<CancelAck, AppError> {
        let mut url = self.endpoint("cancel")?;
        url.query_pairs_mut().append_pair("tripid", trip_id);
        debug!(trip_id, %url, "cancelling trip");
        let body = self
            .http
            .post(url)
            .header(ACCEPT, "application/xml")
            .bearer_auth(self.token.expose())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_cancel_ack(&body)
    }
}

/// Reads the cancel endpoint's reply. An `<Error>` document is a rejection and
/// its `<Message>` text becomes the error.
pub fn parse_cancel_ack(xml: &str) -> Result<CancelAck, AppError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root: Option<String> = None;
    let mut in_message = false;
    let mut message = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                if root.is_none() {
                    root = Some(name);
                } else if name == "Message" {
                    in_message = true;
                }
            }
            Event::Empty(start) if root.is_none() => {
                root = Some(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
            }
            Event::Text(text) if in_message => {
                message.push_str(&text.unescape()?);
            }
            Event::End(end) if end.local_name().as_ref() == b"Message" => {
                in_message = false;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match root {
        Some(root) if root == "Error" => Err(AppError::RemoteRejected(if message.is_empty() {
            "unspecified error".to_string()
        } else {
            message
        })),
        Some(document) => Ok(CancelAck { document }),
        None => Err(AppError::Decode("empty cancel response".into())),
    }
}
