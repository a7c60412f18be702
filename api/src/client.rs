use reqwest::{Method, Url};
use tracing::{debug, warn};

use crate::{ApiError, ApiResult, WordStat};

pub const ANALYSIS_PATH: &str = "/api/analysis";
pub const REBUILD_PATH: &str = "/api/rebuild";

/// Thin client for the two analysis endpoints.
///
/// No caching, no retries and no timeout beyond the platform default: a single
/// failure surfaces immediately so the user can decide to try again.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base: Url,
}

impl AnalysisClient {
    /// Build a client rooted at `base` (e.g. `http://127.0.0.1:5000` or the page origin).
    pub fn new(base: &str) -> ApiResult<Self> {
        let base = normalize_base(base)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Current analysis result.
    pub async fn fetch_analysis(&self) -> ApiResult<Vec<WordStat>> {
        self.request(Method::GET, ANALYSIS_PATH).await
    }

    /// Ask the backend to recompute from scratch and return the new result.
    pub async fn rebuild_analysis(&self) -> ApiResult<Vec<WordStat>> {
        self.request(Method::POST, REBUILD_PATH).await
    }

    async fn request(&self, method: Method, path: &str) -> ApiResult<Vec<WordStat>> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "analysis request");

        let resp = self
            .http
            .request(method.clone(), url.clone())
            .send()
            .await
            .map_err(|err| {
                warn!(%method, %url, error = %err, "analysis request failed");
                ApiError::network(err.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "analysis request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        let words: Vec<WordStat> =
            serde_json::from_slice(&body).map_err(|err| ApiError::decode(err.to_string()))?;

        debug!(%method, %url, words = words.len(), "analysis response");
        Ok(words)
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::InvalidBaseUrl(err.to_string()))
    }
}

/// Parse `raw` and make sure it ends in `/` so endpoint paths are joined below any prefix.
fn normalize_base(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|err| ApiError::InvalidBaseUrl(format!("{raw}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_under_origin() {
        let client = AnalysisClient::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(
            client.endpoint(ANALYSIS_PATH).unwrap().as_str(),
            "http://127.0.0.1:5000/api/analysis"
        );
        assert_eq!(
            client.endpoint(REBUILD_PATH).unwrap().as_str(),
            "http://127.0.0.1:5000/api/rebuild"
        );
    }

    #[test]
    fn endpoints_keep_path_prefix() {
        let client = AnalysisClient::new("https://example.org/wordglass").unwrap();
        assert_eq!(
            client.endpoint(ANALYSIS_PATH).unwrap().as_str(),
            "https://example.org/wordglass/api/analysis"
        );
    }

    #[test]
    fn rejects_relative_base() {
        let err = AnalysisClient::new("/api").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }
}
