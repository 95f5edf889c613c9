//! Confidence extraction from rendered result text.
//!
//! The page only exposes results as display strings such as
//! `"PNEUMONIA (0.87)"`. The numeric confidence is the first parenthesized
//! number in that string. Anything else yields `0.0` so one bad entry never
//! stops the chart from drawing the rest.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "confidence_test.rs"]
mod confidence_test;

/// Optional sign, integer or decimal, optional padding inside the parentheses.
const CONFIDENCE_PATTERN: &str = r"\(\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))\s*\)";

static CONFIDENCE_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(CONFIDENCE_PATTERN));

/// Extract the confidence sample from a history entry.
///
/// Returns `0.0` when the text carries no parenthesized number.
pub fn extract_confidence(text: &str) -> f64 {
    let Ok(re) = CONFIDENCE_RE.as_ref() else {
        return 0.0;
    };
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(0.0, |m| parse_sample(m.as_str()))
}

fn parse_sample(raw: &str) -> f64 {
    let value = raw.parse::<f64>().unwrap_or(0.0);
    if value.is_finite() { value } else { 0.0 }
}
