use reqwest::header::{AUTHORIZATION, CONTENT_RANGE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::store::query::TableQuery;

const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "prefer";
const BODY_SNIPPET_CHARS: usize = 512;

pub struct StoreClient {
    base_url: String,
    http_client: reqwest::Client,
    auth_headers: HeaderMap,
}

impl StoreClient {
    pub fn new(config: &StoreConfig) -> Result<Self, AppError> {
        let http_client = build_http_client(config)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|err| AppError::configuration(format!("invalid store key: {err}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|err| AppError::configuration(format!("invalid store key: {err}")))?;

        let mut auth_headers = HeaderMap::new();
        auth_headers.insert(API_KEY_HEADER, api_key);
        auth_headers.insert(AUTHORIZATION, bearer);

        Ok(Self {
            base_url: config.url.clone(),
            http_client,
            auth_headers,
        })
    }

    pub async fn fetch_rows<T>(&self, query: &TableQuery) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let url = query.to_url(&self.base_url)?;
        tracing::debug!(table = query.table(), %url, "store select");

        let response = self
            .http_client
            .get(url.clone())
            .headers(self.auth_headers.clone())
            .send()
            .await
            .map_err(|err| AppError::upstream(format!("network error contacting {url}: {err}")))?;

        let response = ensure_success(response, &url).await?;
        response.json::<Vec<T>>().await.map_err(|err| {
            AppError::internal(format!(
                "failed to decode {} rows: {err}",
                query.table()
            ))
        })
    }

    pub async fn count_rows(&self, query: &TableQuery) -> Result<Option<u64>, AppError> {
        let url = query.to_url(&self.base_url)?;
        tracing::debug!(table = query.table(), %url, "store count");

        let mut request = self
            .http_client
            .head(url.clone())
            .headers(self.auth_headers.clone());
        if query.wants_exact_count() {
            request = request.header(PREFER_HEADER, "count=exact");
        }

        let response = request
            .send()
            .await
            .map_err(|err| AppError::upstream(format!("network error contacting {url}: {err}")))?;
        let response = ensure_success(response, &url).await?;

        Ok(response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total))
    }
}

async fn ensure_success(
    response: reqwest::Response,
    url: &reqwest::Url,
) -> Result<reqwest::Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_string());
    let body_snippet = text.chars().take(BODY_SNIPPET_CHARS).collect::<String>();

    Err(AppError::upstream(format!(
        "request to {url} failed with {status}: {body_snippet}"
    )))
}

fn parse_content_range_total(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.parse::<u64>().ok()
}
