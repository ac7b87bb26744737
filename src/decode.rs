//! Report decoding: prologue correction, decimal-separator normalization,
//! and structural XML parsing.
//!
//! The feed has two quirks that must be fixed textually before the document
//! can be parsed:
//!
//! - The XML prologue declares a legacy encoding (`windows-1251` on the
//!   Russian feed, `windows-1252` on some English responses) even after the
//!   body has been normalized to UTF-8. The declaration is stripped so the
//!   prologue never disagrees with the bytes actually being parsed.
//! - Rate values use a comma as the decimal separator.

use roxmltree::{Document, Node};

use crate::error::{CbrError, Result};
use crate::types::{Currency, CurrencyReport};

/// Legacy encoding declarations observed in feed prologues.
const LEGACY_ENCODING_DECLARATIONS: [&str; 2] =
    [r#" encoding="windows-1251""#, r#" encoding="windows-1252""#];

/// Strip legacy encoding declarations from the XML prologue.
///
/// Transcoding rewrites the body but not the declaration, so the prologue
/// may still claim an 8-bit encoding for what is now UTF-8 text.
#[must_use]
pub fn strip_legacy_encoding_declarations(xml: &str) -> String {
    let mut xml = xml.to_string();
    for declaration in LEGACY_ENCODING_DECLARATIONS {
        xml = xml.replace(declaration, "");
    }
    xml
}

/// Replace every comma in the payload with a period.
///
/// The feed writes rate values with a comma decimal separator, which no
/// decimal parser accepts. The substitution is deliberately blind to
/// context, matching the upstream convention: a comma inside a currency
/// name is rewritten too, so commas in the document must not be relied
/// upon to delimit anything.
#[must_use]
pub fn normalize_decimal_commas(xml: &str) -> String {
    xml.replace(',', ".")
}

/// Decode normalized report text into a [`CurrencyReport`].
///
/// Applies prologue correction and decimal-separator normalization, then
/// parses the document structurally: the root element carries the `Date`
/// attribute and each `<Valute>` child becomes one [`Currency`], in
/// document order. Any failure aborts the decode; no partial report is
/// returned.
///
/// # Arguments
/// * `xml` - Report text, already normalized to UTF-8
pub fn decode_report(xml: &str) -> Result<CurrencyReport> {
    let xml = normalize_decimal_commas(&strip_legacy_encoding_declarations(xml));

    let doc = Document::parse(&xml)?;
    let root = doc.root_element();

    let date = root
        .attribute("Date")
        .ok_or_else(|| CbrError::MissingAttribute {
            attribute: "Date",
            element: root.tag_name().name().to_string(),
        })?
        .to_string();

    let currencies = root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Valute")
        .map(parse_currency)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(date = %date, count = currencies.len(), "Decoded report");

    Ok(CurrencyReport { date, currencies })
}

/// Parse one `<Valute>` element.
fn parse_currency(node: Node<'_, '_>) -> Result<Currency> {
    let id = node
        .attribute("ID")
        .ok_or_else(|| CbrError::MissingAttribute {
            attribute: "ID",
            element: "Valute".to_string(),
        })?
        .to_string();

    let num_code = parse_value("NumCode", required_child_text(node, "NumCode", &id)?)?;
    let char_code = required_child_text(node, "CharCode", &id)?.to_string();
    let nominal_text = required_child_text(node, "Nominal", &id)?;
    let nominal: u32 = parse_value("Nominal", nominal_text)?;
    let name = required_child_text(node, "Name", &id)?.to_string();
    let value_text = required_child_text(node, "Value", &id)?;
    let value: rust_decimal::Decimal = parse_value("Value", value_text)?;

    if nominal == 0 {
        return Err(CbrError::InvalidValue {
            field: "Nominal",
            value: nominal_text.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    if value.is_sign_negative() || value.is_zero() {
        return Err(CbrError::InvalidValue {
            field: "Value",
            value: value_text.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Currency {
        id,
        num_code,
        char_code,
        nominal,
        name,
        value,
    })
}

/// Get the text of a required child element of a `<Valute>`.
fn required_child_text<'a>(
    node: Node<'a, '_>,
    tag: &'static str,
    valute_id: &str,
) -> Result<&'a str> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
        .and_then(|child| child.text())
        .ok_or_else(|| CbrError::MissingElement {
            element: tag,
            context: format!("<Valute ID=\"{valute_id}\">"),
        })
}

/// Parse a field value, reporting the field name on failure.
fn parse_value<T>(field: &'static str, text: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    text.parse().map_err(|e: T::Err| CbrError::InvalidValue {
        field,
        value: text.to_string(),
        reason: e.to_string(),
    })
}
