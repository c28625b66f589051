use crate::client::error::AdminApiError;
use crate::client::types::{ListStocksResponse, UpdatePriceRequest};
use crate::client::StockAdminClient;
use crate::config::Settings;
use crate::domain::draft::DraftEntry;
use crate::domain::stock::StockEntry;
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{RequestBuilder, Url};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const STOCKS_PATH: &str = "/admin/api/stocks";

#[derive(Debug, Clone)]
pub struct HttpStockAdminClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: Option<HeaderValue>,
}

impl HttpStockAdminClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.require_base_url()?;
        let timeout_secs = settings.http_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let mut client = Self::with_timeout(base_url, Duration::from_secs(timeout_secs))?;
        client.session_cookie = settings
            .session_cookie
            .as_deref()
            .map(HeaderValue::from_str)
            .transpose()
            .context("STOCKDESK_SESSION_COOKIE is not a valid header value")?;
        Ok(client)
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).with_context(|| format!("invalid admin API base URL: {base_url}"))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build admin API http client")?;

        Ok(Self {
            http,
            base_url,
            session_cookie: None,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), STOCKS_PATH)
    }

    /// Ids are opaque, so they are escaped as single path segments.
    fn entry_url(&self, id: &str, suffix: Option<&str>) -> Result<Url> {
        let collection = self.collection_url();
        let mut url = Url::parse(&collection)
            .with_context(|| format!("invalid admin API URL: {collection}"))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("admin API URL cannot carry a path: {collection}"))?;
            segments.push(id);
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }
        Ok(url)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &self.session_cookie {
            headers.insert(COOKIE, cookie.clone());
        }
        headers
    }

    async fn send_expect_success(&self, operation: &'static str, req: RequestBuilder) -> Result<()> {
        let res = req
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| AdminApiError::transport(operation, &e))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AdminApiError::status(operation, status, body).into());
        }

        tracing::debug!(operation, %status, "admin API call succeeded");
        Ok(())
    }
}

#[async_trait::async_trait]
impl StockAdminClient for HttpStockAdminClient {
    async fn create_stock(&self, draft: &DraftEntry) -> Result<()> {
        let req = self.http.post(self.collection_url()).json(draft);
        self.send_expect_success("create_stock", req).await
    }

    async fn delete_stock(&self, id: &str) -> Result<()> {
        let req = self.http.delete(self.entry_url(id, None)?);
        self.send_expect_success("delete_stock", req).await
    }

    async fn update_price(&self, id: &str, price: &str) -> Result<()> {
        let req = self
            .http
            .put(self.entry_url(id, Some("price"))?)
            .json(&UpdatePriceRequest { price });
        self.send_expect_success("update_price", req).await
    }

    async fn list_stocks(&self) -> Result<Vec<StockEntry>> {
        let res = self
            .http
            .get(self.collection_url())
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| AdminApiError::transport("list_stocks", &e))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read stock list response")?;
        if !status.is_success() {
            return Err(AdminApiError::status("list_stocks", status, text).into());
        }

        let parsed = serde_json::from_str::<ListStocksResponse>(&text)
            .with_context(|| format!("stock list response has unexpected shape: {text}"))?;
        anyhow::ensure!(parsed.success, "stock list response reported success=false");
        Ok(parsed.stocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_collection_url_without_double_slash() {
        let client = HttpStockAdminClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.collection_url(),
            "http://localhost:5000/admin/api/stocks"
        );
    }

    #[test]
    fn escapes_ids_as_single_path_segments() {
        let client = HttpStockAdminClient::new("http://localhost:5000").unwrap();
        let url = client.entry_url("a/b c", Some("price")).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/admin/api/stocks/a%2Fb%20c/price"
        );

        let url = client.entry_url("7", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/admin/api/stocks/7");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(HttpStockAdminClient::new("not a url").is_err());
    }

    #[test]
    fn forwards_configured_session_cookie() {
        let settings = Settings {
            base_url: Some("http://localhost:5000".to_string()),
            session_cookie: Some("session=abc".to_string()),
            ..Default::default()
        };
        let client = HttpStockAdminClient::from_settings(&settings).unwrap();
        let headers = client.headers();
        assert_eq!(headers.get(COOKIE).unwrap(), "session=abc");
    }

    #[test]
    fn rejects_unusable_session_cookie_up_front() {
        let settings = Settings {
            base_url: Some("http://localhost:5000".to_string()),
            session_cookie: Some("session=abc\nx".to_string()),
            ..Default::default()
        };
        let err = HttpStockAdminClient::from_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("STOCKDESK_SESSION_COOKIE"));
        assert!(err.downcast_ref::<AdminApiError>().is_none());
    }
}
