//! Client service tying transport and decoding together.
//!
//! [`CbrClient`] holds the HTTP client and the two locale endpoints as
//! explicit configuration, set once at construction. Base URLs are
//! overridable through the builder so tests can point the client at a
//! stub server.

use chrono::NaiveDate;
use reqwest::blocking::Client;

use crate::config::{daily_url, EN_DAILY_URL, RU_DAILY_URL};
use crate::decode::decode_report;
use crate::encoding::{decode_utf8, decode_windows_1251};
use crate::error::Result;
use crate::http::{create_client, download_bytes};
use crate::types::CurrencyReport;

/// Client for the CBR daily exchange rate feed.
#[derive(Debug, Clone)]
pub struct CbrClient {
    http: Client,
    ru_url: String,
    en_url: String,
}

impl CbrClient {
    /// Create a client with the default HTTP configuration and endpoints.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a client with custom configuration.
    #[must_use]
    pub fn builder() -> CbrClientBuilder {
        CbrClientBuilder {
            http: None,
            ru_url: RU_DAILY_URL.to_string(),
            en_url: EN_DAILY_URL.to_string(),
        }
    }

    /// Fetch today's report, Russian locale.
    pub fn ru_daily(&self) -> Result<CurrencyReport> {
        self.fetch_ru(None)
    }

    /// Fetch the report for a specific date, Russian locale.
    pub fn ru_daily_for_date(&self, date: NaiveDate) -> Result<CurrencyReport> {
        self.fetch_ru(Some(date))
    }

    /// Fetch today's report, English locale.
    pub fn en_daily(&self) -> Result<CurrencyReport> {
        self.fetch_en(None)
    }

    /// Fetch the report for a specific date, English locale.
    pub fn en_daily_for_date(&self, date: NaiveDate) -> Result<CurrencyReport> {
        self.fetch_en(Some(date))
    }

    /// Russian-locale pipeline: fetch, transcode windows-1251, decode.
    fn fetch_ru(&self, date: Option<NaiveDate>) -> Result<CurrencyReport> {
        let bytes = download_bytes(&self.http, &daily_url(&self.ru_url, date))?;
        let text = decode_windows_1251(&bytes)?;
        decode_report(&text)
    }

    /// English-locale pipeline: fetch, validate UTF-8, decode.
    fn fetch_en(&self, date: Option<NaiveDate>) -> Result<CurrencyReport> {
        let bytes = download_bytes(&self.http, &daily_url(&self.en_url, date))?;
        let text = decode_utf8(&bytes)?;
        decode_report(&text)
    }
}

/// Builder for [`CbrClient`].
#[derive(Debug)]
pub struct CbrClientBuilder {
    http: Option<Client>,
    ru_url: String,
    en_url: String,
}

impl CbrClientBuilder {
    /// Use a caller-supplied HTTP client (custom timeout, TLS, proxy).
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Override the Russian-locale endpoint.
    #[must_use]
    pub fn ru_url(mut self, url: impl Into<String>) -> Self {
        self.ru_url = url.into();
        self
    }

    /// Override the English-locale endpoint.
    #[must_use]
    pub fn en_url(mut self, url: impl Into<String>) -> Self {
        self.en_url = url.into();
        self
    }

    /// Build the client, constructing the default HTTP client if none was
    /// supplied.
    pub fn build(self) -> Result<CbrClient> {
        let http = match self.http {
            Some(client) => client,
            None => create_client()?,
        };

        Ok(CbrClient {
            http,
            ru_url: self.ru_url,
            en_url: self.en_url,
        })
    }
}

/// Fetch today's report from the default endpoint, Russian locale.
pub fn ru_daily() -> Result<CurrencyReport> {
    CbrClient::new()?.ru_daily()
}

/// Fetch today's report from the default endpoint, English locale.
pub fn en_daily() -> Result<CurrencyReport> {
    CbrClient::new()?.en_daily()
}

/// Fetch the report for a specific date from the default endpoint,
/// Russian locale.
pub fn ru_daily_for_date(date: NaiveDate) -> Result<CurrencyReport> {
    CbrClient::new()?.ru_daily_for_date(date)
}

/// Fetch the report for a specific date from the default endpoint,
/// English locale.
pub fn en_daily_for_date(date: NaiveDate) -> Result<CurrencyReport> {
    CbrClient::new()?.en_daily_for_date(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = CbrClient::new().unwrap();
        assert_eq!(client.ru_url, RU_DAILY_URL);
        assert_eq!(client.en_url, EN_DAILY_URL);
    }

    #[test]
    fn test_builder_url_overrides() {
        let client = CbrClient::builder()
            .ru_url("http://127.0.0.1:8080/ru")
            .en_url("http://127.0.0.1:8080/en")
            .build()
            .unwrap();

        assert_eq!(client.ru_url, "http://127.0.0.1:8080/ru");
        assert_eq!(client.en_url, "http://127.0.0.1:8080/en");
    }

    #[test]
    fn test_builder_custom_http_client() {
        let http = Client::builder().build().unwrap();
        let client = CbrClient::builder().http_client(http).build();
        assert!(client.is_ok());
    }
}
