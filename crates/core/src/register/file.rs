//! Transaction file processing.
//!
//! File format:
//!
//! ```text
//! CURRENCY:USD
//! 2.13,3.00
//! 3.33,5.00
//! ```
//!
//! The header is optional (defaults to USD) and its keyword is
//! case-insensitive. Every other non-blank line is `<owed>,<paid>`.

use changemaker_shared::CurrencyCode;
use tracing::info;

use crate::currency::{ConfigOverrides, CurrencyConfigLoader};

use super::error::RegisterError;
use super::transaction::CashRegister;
use super::types::FileResult;

const CURRENCY_KEYWORD: &str = "CURRENCY";

/// Returns the currency code named by a `CURRENCY:<code>` header line.
pub fn parse_currency_header(line: &str) -> Option<&str> {
    let (keyword, code) = line.split_once(':')?;
    keyword
        .trim()
        .eq_ignore_ascii_case(CURRENCY_KEYWORD)
        .then(|| code.trim())
}

/// Processes a whole transaction file.
///
/// The currency configuration is resolved once, with `overrides` applied,
/// and every transaction line is processed against it. Lines fail
/// individually; only a configuration failure aborts the file.
pub fn process_file(
    content: &str,
    loader: &CurrencyConfigLoader,
    overrides: &ConfigOverrides,
) -> Result<FileResult, RegisterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let header = content.lines().next().and_then(parse_currency_header);
    let code = header.unwrap_or(CurrencyCode::DEFAULT);

    let register = CashRegister::new(loader.resolve(code, overrides)?);
    let lines = content
        .lines()
        .enumerate()
        .skip(usize::from(header.is_some()))
        .map(|(index, line)| (index + 1, line));
    let result = register.process_lines(lines);

    info!(
        currency = %result.currency,
        transactions = result.entries.len(),
        rejected = result.rejected().count(),
        has_random = result.has_random,
        "Processed transaction file"
    );
    Ok(result)
}
