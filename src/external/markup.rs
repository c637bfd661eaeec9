//! Label-adjacent value extraction from finance quote markup.
//!
//! The upstream quote page renders each statistic as a label element followed
//! by a value element. Everything that knows about that layout lives here, so
//! a markup change upstream means swapping this module, not the fetch path.
//! Extraction is best-effort per field; a missing label is `None`, never an
//! error.

use regex::Regex;

use crate::external::quote_provider::Fundamentals;

/// Pull P/E and EPS out of a quote page. Fields that cannot be found or
/// parsed come back as 0 individually; partial success is normal.
pub fn parse_fundamentals(html: &str) -> Fundamentals {
    Fundamentals {
        pe_ratio: extract_labeled_value(html, "P/E").unwrap_or(0.0),
        latest_earnings: extract_labeled_value(html, "EPS").unwrap_or(0.0),
    }
}

/// Find the first element whose text contains `label` and return the numeric
/// value of the immediately following element.
pub fn extract_labeled_value(html: &str, label: &str) -> Option<f64> {
    let pattern = format!(
        r"<div[^>]*>[^<]*{}[^<]*</div>\s*<div[^>]*>([^<]+)</div>",
        regex::escape(label)
    );
    let re = Regex::new(&pattern).ok()?;
    let raw = re.captures(html)?.get(1)?.as_str();
    parse_leading_number(raw)
}

/// Numeric prefix parse: thousands separators and currency/percent marks are
/// stripped, trailing junk is ignored ("18.69x" parses as 18.69).
fn parse_leading_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | '₹' | '$'))
        .collect();

    let number_re = Regex::new(r"^-?\d+(\.\d+)?").ok()?;
    let m = number_re.find(cleaned.trim())?;
    m.as_str().parse::<f64>().ok()
}
