use std::time::Duration;

use catalog_logging::catalog_debug;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::{decode_search_page, FailureKind, FetchError, FetchMetadata, FetchOutput, SearchPage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 8 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
            user_agent: concat!("catalog/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
}

/// `Fetcher` over a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            format!("{actual} bytes"),
        )
    }

    /// Rejects media types outside the allowlist. A missing header is let
    /// through and left to the JSON decoder.
    fn check_content_type(&self, content_type: Option<&str>) -> Result<(), FetchError> {
        let Some(raw) = content_type else {
            return Ok(());
        };
        let media_type = raw.split(';').next().unwrap_or(raw).trim();
        let allowed = self
            .settings
            .allowed_content_types
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(media_type));
        if allowed {
            Ok(())
        } else {
            Err(FetchError::new(
                FailureKind::UnsupportedContentType {
                    content_type: raw.to_string(),
                },
                format!("expected one of {:?}", self.settings.allowed_content_types),
            ))
        }
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        if let Some(declared) = response.content_length() {
            if declared > self.settings.max_bytes {
                return Err(self.too_large(declared));
            }
        }

        let mut body = Vec::new();
        let mut chunks = response.bytes_stream();
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let received = (body.len() + chunk.len()) as u64;
            if received > self.settings.max_bytes {
                return Err(self.too_large(received));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    Err(FetchError::new(
        FailureKind::HttpStatus {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_string(), str::to_string),
        },
        status.to_string(),
    ))
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let target = Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(target)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response.status())?;

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.check_content_type(content_type.as_deref())?;

        let bytes = self.read_body(response).await?;
        Ok(FetchOutput {
            metadata: FetchMetadata {
                url: final_url,
                content_type,
                byte_len: bytes.len() as u64,
            },
            bytes,
        })
    }
}

/// Fetches one page of search results and decodes the JSON body.
pub async fn search(fetcher: &dyn Fetcher, url: &str) -> Result<SearchPage, FetchError> {
    let output = fetcher.fetch(url).await?;
    catalog_debug!(
        "fetched {} bytes from {} ({:?})",
        output.metadata.byte_len,
        output.metadata.url,
        output.metadata.content_type
    );
    decode_search_page(&output.bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    let kind = if err.is_timeout() {
        FailureKind::Timeout
    } else {
        FailureKind::Network
    };
    FetchError::new(kind, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_text_uses_reason_or_falls_back_to_code() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));

        let known = check_status(StatusCode::SERVICE_UNAVAILABLE).unwrap_err();
        assert_eq!(
            known.kind,
            FailureKind::HttpStatus {
                status: 503,
                status_text: "Service Unavailable".to_string(),
            }
        );

        let custom = check_status(StatusCode::from_u16(599).unwrap()).unwrap_err();
        assert_eq!(
            custom.kind,
            FailureKind::HttpStatus {
                status: 599,
                status_text: "599".to_string(),
            }
        );
    }
}
