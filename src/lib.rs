//! CBR Rates - Fetch daily exchange rate reports from the Central Bank of
//! Russia.
//!
//! This crate downloads the daily currency rate XML feed published at
//! `www.cbr.ru/scripts/` in either the Russian or the English locale,
//! optionally for a historical date, and decodes it into a typed
//! [`CurrencyReport`].
//!
//! The Russian feed is served in windows-1251 and both locales carry
//! legacy encoding declarations and comma decimal separators, so decoding
//! runs through a normalization pipeline before the document is parsed.
//!
//! # Example
//!
//! ```
//! use cbr_rates::config::{daily_url, RU_DAILY_URL};
//! use chrono::NaiveDate;
//!
//! // Historical reports are requested via a date_req query parameter
//! let date = NaiveDate::from_ymd_opt(2014, 2, 1).unwrap();
//! assert_eq!(
//!     daily_url(RU_DAILY_URL, Some(date)),
//!     "https://www.cbr.ru/scripts/XML_daily.asp?date_req=01/02/2014"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Endpoint constants and URL construction
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for downloading reports
//! - [`encoding`]: windows-1251/UTF-8 byte normalization
//! - [`decode`]: Prologue correction, comma normalization, XML decoding
//! - [`types`]: Core data types (Currency, CurrencyReport)
//! - [`client`]: Client service composing transport and decoder

pub mod client;
pub mod config;
pub mod decode;
pub mod encoding;
pub mod error;
pub mod http;
pub mod types;

// Re-export the entry points
pub use client::{en_daily, en_daily_for_date, ru_daily, ru_daily_for_date, CbrClient};

// Re-export commonly used items
pub use decode::decode_report;
pub use error::{CbrError, Result};
pub use types::{Currency, CurrencyReport};
