//! HTTP client for the EmojiHub API

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::emoji::EmojiRecord;
use crate::error::{E2eError, E2eResult};

/// Client bound to one base URL, built once per suite run
#[derive(Debug, Clone)]
pub struct EmojiClient {
    http: reqwest::Client,
    base_url: String,
}

/// A fully received response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl EmojiClient {
    pub fn new(config: &HarnessConfig) -> E2eResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a request path onto the base URL. Leading slashes are optional.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send `GET {base}/{path}` and read the whole body
    pub async fn get(&self, path: &str) -> E2eResult<ApiResponse> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| classify(&url, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| classify(&url, e))?;
        debug!("{} -> {} ({} bytes)", url, status, body.len());

        Ok(ApiResponse { url, status, body })
    }

    /// `GET /random`
    pub async fn random(&self) -> E2eResult<EmojiRecord> {
        self.get(RANDOM).await?.expect_status(200)?.json()
    }

    /// `GET /random/category/{category}`
    pub async fn random_by_category(&self, category: &str) -> E2eResult<EmojiRecord> {
        self.get(&random_category_path(category))
            .await?
            .expect_status(200)?
            .json()
    }

    /// `GET /random/group/{group}`
    pub async fn random_by_group(&self, group: &str) -> E2eResult<EmojiRecord> {
        self.get(&random_group_path(group))
            .await?
            .expect_status(200)?
            .json()
    }

    /// `GET /all`
    pub async fn all(&self) -> E2eResult<Vec<EmojiRecord>> {
        self.get(ALL).await?.expect_status(200)?.json()
    }

    /// `GET /all/category/{category}`
    pub async fn all_by_category(&self, category: &str) -> E2eResult<Vec<EmojiRecord>> {
        self.get(&category_path(category))
            .await?
            .expect_status(200)?
            .json()
    }

    /// `GET /all/group/{group}`
    pub async fn all_by_group(&self, group: &str) -> E2eResult<Vec<EmojiRecord>> {
        self.get(&group_path(group)).await?.expect_status(200)?.json()
    }
}

impl ApiResponse {
    /// Fail unless the status code equals `expected`
    pub fn expect_status(self, expected: u16) -> E2eResult<Self> {
        if self.status.as_u16() == expected {
            Ok(self)
        } else {
            Err(E2eError::UnexpectedStatus {
                url: self.url,
                expected,
                actual: self.status.as_u16(),
                body: self.body,
            })
        }
    }

    /// Decode the body, keeping the raw body on failure
    pub fn json<T: DeserializeOwned>(&self) -> E2eResult<T> {
        serde_json::from_str(&self.body).map_err(|source| E2eError::Decode {
            url: self.url.clone(),
            body: self.body.clone(),
            source,
        })
    }
}

pub const RANDOM: &str = "/random";
pub const ALL: &str = "/all";

pub fn category_path(category: &str) -> String {
    format!("/all/category/{}", category)
}

pub fn group_path(group: &str) -> String {
    format!("/all/group/{}", group)
}

pub fn random_category_path(category: &str) -> String {
    format!("/random/category/{}", category)
}

pub fn random_group_path(group: &str) -> String {
    format!("/random/group/{}", group)
}

/// Connection and timeout problems are connectivity errors, everything else stays HTTP.
fn classify(url: &str, e: reqwest::Error) -> E2eError {
    if e.is_connect() || e.is_timeout() {
        E2eError::Connectivity {
            url: url.to_string(),
            reason: e.to_string(),
        }
    } else {
        E2eError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            url: "http://localhost:4000/api/random".to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_url_joining() {
        let config = HarnessConfig {
            base_url: "http://localhost:4000/api/".to_string(),
            ..Default::default()
        };
        let client = EmojiClient::new(&config).unwrap();
        assert_eq!(client.url("/random"), "http://localhost:4000/api/random");
        assert_eq!(
            client.url("all/category/flags"),
            "http://localhost:4000/api/all/category/flags"
        );
    }

    #[test]
    fn test_expect_status_mismatch() {
        let err = response(500, "boom").expect_status(200).unwrap_err();
        match err {
            E2eError::UnexpectedStatus { expected, actual, body, .. } => {
                assert_eq!(expected, 200);
                assert_eq!(actual, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_failure_keeps_body() {
        let err = response(200, "<html>not json</html>")
            .json::<EmojiRecord>()
            .unwrap_err();
        match err {
            E2eError::Decode { body, .. } => assert_eq!(body, "<html>not json</html>"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_failure_keeps_full_body() {
        let body = format!("[{}", "{\"name\":\"ant\"},".repeat(100));
        let err = response(200, &body).json::<Vec<EmojiRecord>>().unwrap_err();
        match err {
            E2eError::Decode { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(category_path("flags"), "/all/category/flags");
        assert_eq!(group_path("animal-bug"), "/all/group/animal-bug");
        assert_eq!(random_group_path("activities"), "/random/group/activities");
    }
}
