use std::{env, fmt, net::SocketAddr, time::Duration};

use url::Url;

use crate::error::AppError;

pub const DEFAULT_TRIP_API_BASE_URL: &str = "https://www.concursolutions.com/api/travel/trip/v1.1/";

/// Bearer credential for the trip API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let token = raw
            .trim()
            .strip_prefix("Bearer ")
            .unwrap_or(raw.trim())
            .trim()
            .to_string();
        Self(token)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub trip_api_base_url: Url,
    pub trip_api_token: ApiToken,
    pub trip_api_timeout: Duration,
    pub application_id: Option<String>,
    pub cancellation_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let trip_api_base_url = parse_base_url(
            &env::var("TRIP_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TRIP_API_BASE_URL.to_string()),
        )?;

        let trip_api_token = env::var("TRIP_API_TOKEN")
            .ok()
            .map(ApiToken::new)
            .filter(|token| !token.expose().is_empty())
            .ok_or_else(|| AppError::Config("TRIP_API_TOKEN must be set".into()))?;

        let trip_api_timeout = parse_timeout_secs(
            &env::var("TRIP_API_TIMEOUT_SECS").unwrap_or_else(|_| "8".to_string()),
        )?;

        let application_id = env::var("SKILL_APPLICATION_ID")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let cancellation_enabled = match env::var("TRIP_CANCELLATION_ENABLED") {
            Ok(value) => parse_flag(&value).ok_or_else(|| {
                AppError::Config(format!("invalid TRIP_CANCELLATION_ENABLED: {value:?}"))
            })?,
            Err(_) => false,
        };

        Ok(Self {
            listen_addr,
            trip_api_base_url,
            trip_api_token,
            trip_api_timeout,
            application_id,
            cancellation_enabled,
        })
    }
}

/// Parses the API base URL. It must be able to take path segments and ends in `/`.
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw)
        .map_err(|err| AppError::Config(format!("invalid TRIP_API_BASE_URL: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Config(format!(
            "invalid TRIP_API_BASE_URL: {url} has no path"
        )));
    }
    Ok(url)
}

/// Timeout in whole seconds. Zero is refused.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, AppError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::Config(
            "invalid TRIP_API_TIMEOUT_SECS: must be at least 1".into(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(err) => Err(AppError::Config(format!(
            "invalid TRIP_API_TIMEOUT_SECS: {err}"
        ))),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
