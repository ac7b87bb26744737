//! Core data types for decoded daily reports.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CbrError, Result};

/// One exchange-rate line item, a `<Valute>` element of the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    /// Source `ID` attribute (e.g. "R01010"). Opaque; not guaranteed unique
    /// across reports of different dates.
    pub id: String,

    /// Bank-assigned numeric currency code (`<NumCode>`).
    pub num_code: u32,

    /// Three-letter alphabetic currency code (`<CharCode>`, e.g. "AUD").
    /// Stable identity key, preserved byte-for-byte.
    pub char_code: String,

    /// Units the quoted value applies to (`<Nominal>`). Always positive.
    pub nominal: u32,

    /// Locale-dependent human-readable currency name (`<Name>`).
    pub name: String,

    /// Exchange rate in rubles per `nominal` units (`<Value>`).
    /// Always positive.
    pub value: Decimal,
}

impl Currency {
    /// Rate for a single unit of the currency, `value / nominal`.
    #[must_use]
    pub fn rate_per_unit(&self) -> Decimal {
        self.value / Decimal::from(self.nominal)
    }
}

/// One day's full rate table, the `<ValCurs>` root element of the feed.
///
/// Currencies keep the source publication order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyReport {
    /// Raw `Date` attribute as received. The separator varies across
    /// request paths; use [`CurrencyReport::date_naive`] to parse it.
    pub date: String,

    /// Rate entries in document order.
    pub currencies: Vec<Currency>,
}

impl CurrencyReport {
    /// Parse the raw report date into a calendar date.
    ///
    /// Current-day and historical responses have been observed to use
    /// different separators, so `DD.MM.YYYY` is attempted first and
    /// `DD/MM/YYYY` as fallback.
    ///
    /// # Returns
    /// The report date, or `CbrError::DateParse` if both formats fail.
    pub fn date_naive(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%d.%m.%Y")
            .or_else(|_| NaiveDate::parse_from_str(&self.date, "%d/%m/%Y"))
            .map_err(|_| CbrError::DateParse(self.date.clone()))
    }

    /// Find the first entry with the given alphabetic code.
    #[must_use]
    pub fn by_char_code(&self, char_code: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.char_code == char_code)
    }
}
