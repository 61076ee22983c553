//! Remote Image Probing
//!
//! Retrieves content type and length of a remote resource without
//! downloading its body (HTTP `HEAD`).

use std::time::Duration;

use reqwest::{Client, Url, header};

/// Metadata reported by the remote host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageMetadata {
    /// `Content-Type` header value, verbatim
    pub content_type: Option<String>,
    /// `Content-Length` in bytes, when reported
    pub content_length: Option<u64>,
}

/// Error when probing a remote image
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// Not an absolute http(s) URL
    #[error("Invalid image URL: {0}")]
    InvalidUrl(String),
    /// Host could not be reached (DNS, connect, timeout)
    #[error("Image host unreachable: {0}")]
    Unreachable(String),
}

/// 画像メタデータ取得の抽象
///
/// テストでは固定値を返すフェイクに差し替えます。
#[trait_variant::make(ImageProber: Send)]
pub trait LocalImageProber {
    /// URL のメタデータを取得
    async fn probe(&self, url: &str) -> Result<ImageMetadata, ProbeError>;
}

/// 厳密な URL パース（絶対 URL かつ http/https のみ）
///
/// ## Examples
/// ```rust
/// use platform::image_probe::parse_image_url;
///
/// assert!(parse_image_url("https://cdn.example.com/cat.png").is_ok());
/// assert!(parse_image_url("/relative/cat.png").is_err());
/// assert!(parse_image_url("ftp://example.com/cat.png").is_err());
/// ```
pub fn parse_image_url(raw: &str) -> Result<Url, ProbeError> {
    let url = Url::parse(raw).map_err(|e| ProbeError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        scheme => Err(ProbeError::InvalidUrl(format!(
            "unsupported scheme or missing host: {scheme}"
        ))),
    }
}

/// `reqwest` based prober issuing a single `HEAD` request
#[derive(Debug, Clone)]
pub struct HttpImageProber {
    client: Client,
}

impl HttpImageProber {
    /// Build a prober whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl ImageProber for HttpImageProber {
    async fn probe(&self, url: &str) -> Result<ImageMetadata, ProbeError> {
        let url = parse_image_url(url)?;

        let response = self.client.head(url).send().await.map_err(|e| {
            tracing::debug!(error = %e, "Image probe request failed");
            ProbeError::Unreachable(e.to_string())
        })?;

        // Status is not inspected; the caller judges the reported metadata.
        let headers = response.headers();
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let content_length = headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        Ok(ImageMetadata {
            content_type,
            content_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_http_and_https() {
        assert!(parse_image_url("http://example.com/a.jpg").is_ok());
        assert!(parse_image_url("https://example.com/a.jpg?size=large").is_ok());
    }

    #[test]
    fn test_parse_rejects_relative_and_garbage() {
        assert!(matches!(
            parse_image_url("a.jpg"),
            Err(ProbeError::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_image_url("not a url at all"),
            Err(ProbeError::InvalidUrl(_))
        ));
        assert!(matches!(parse_image_url(""), Err(ProbeError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(matches!(
            parse_image_url("file:///etc/passwd"),
            Err(ProbeError::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_image_url("data:image/png;base64,AAAA"),
            Err(ProbeError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_probe_invalid_url_does_not_hit_network() {
        let prober = HttpImageProber::new(Duration::from_secs(1)).unwrap();
        let result = ImageProber::probe(&prober, "javascript:alert(1)").await;
        assert!(matches!(result, Err(ProbeError::InvalidUrl(_))));
    }
}
