//! SQL-like condition to screener.in URL translator
//!
//! Translates text like:
//! - `Market Capitalization > 30000`
//! - `Return on capital employed > 22% AND Return on equity > 20`
//!
//! into the `screen/raw` URL format. Conditions keep their input order, and
//! the separator between encoded conditions reproduces the site's own output
//! byte for byte, including its inconsistent spacing around `AND`.

use crate::error::BridgeError;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

const BASE_URL: &str = "https://www.screener.in/screen/raw/";

/// Field that screener.in joins with `+AND%0D%0A` instead of `+AND+%0D%0A`.
/// The site's own URL generator emits the shorter separator after this field;
/// replicated literally, not derived from any rule.
const ROCE_MARKER: &str = "return on capital employed";

static AND_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+AND\s+").expect("valid AND separator pattern"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Convert a SQL-like filter string to a screener.in URL.
///
/// Pure and infallible from the caller's side: if the structured encoding
/// fails internally, the whole raw string is form-urlencoded as the `query`
/// value instead, so some valid URL always comes back.
pub fn translate(raw: &str) -> String {
    match encode_query(raw) {
        Ok(query) => format!("{}?sort=&order=&source_id=&query={}", BASE_URL, query),
        Err(e) => {
            log::warn!("Falling back to simple encoding for {:?}: {}", raw, e);
            fallback_url(raw)
        }
    }
}

/// Encode the AND-joined conditions into the `query` parameter value.
fn encode_query(raw: &str) -> Result<String, BridgeError> {
    // Validate the base up front so a bad constant can't produce a URL that
    // only the fallback path would have caught.
    Url::parse(BASE_URL)?;

    let conditions: Vec<&str> = AND_SPLIT.split(raw).map(str::trim).collect();

    let mut query = String::new();
    for (i, condition) in conditions.iter().enumerate() {
        query.push_str(&encode_condition(condition));

        // Join token between conditions, none after the last one.
        if i < conditions.len() - 1 {
            if condition.to_lowercase().contains(ROCE_MARKER) {
                query.push_str("+AND%0D%0A");
            } else {
                query.push_str("+AND+%0D%0A");
            }
        }
    }

    Ok(query)
}

/// Encode one condition. `%` must go first so the literal `%` in values is
/// not confused with the `%` introduced by the `>`/`<` substitutions.
fn encode_condition(condition: &str) -> String {
    let encoded = condition
        .replace('%', "%25")
        .replace('>', "%3E")
        .replace('<', "%3C");
    WHITESPACE.replace_all(&encoded, "+").into_owned()
}

/// Simple encoding used when the structured path fails: the entire raw
/// string becomes a single form-urlencoded `query` value.
fn fallback_url(raw: &str) -> String {
    match Url::parse(BASE_URL) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("query", raw);
            url.to_string()
        }
        Err(_) => format!("{}?query=", BASE_URL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_condition() {
        let url = translate("Market Capitalization > 30000");
        assert_eq!(
            url,
            "https://www.screener.in/screen/raw/?sort=&order=&source_id=&query=Market+Capitalization+%3E+30000"
        );
    }

    #[test]
    fn test_two_conditions() {
        let url = translate("Market Capitalization > 30000 AND Price to earning > 15");
        assert_eq!(
            url,
            "https://www.screener.in/screen/raw/?sort=&order=&source_id=&query=Market+Capitalization+%3E+30000+AND+%0D%0APrice+to+earning+%3E+15"
        );
    }

    #[test]
    fn test_roce_join_token_drops_space() {
        let url = translate("Return on capital employed > 22% AND Return on equity > 20");
        assert_eq!(
            url,
            "https://www.screener.in/screen/raw/?sort=&order=&source_id=&query=Return+on+capital+employed+%3E+22%25+AND%0D%0AReturn+on+equity+%3E+20"
        );
    }

    #[test]
    fn test_roce_marker_case_insensitive() {
        let url = translate("RETURN ON CAPITAL EMPLOYED > 10 AND Debt to equity < 1");
        assert!(url.contains("EMPLOYED+%3E+10+AND%0D%0ADebt"));
    }

    #[test]
    fn test_percent_encoded_before_operators() {
        // The literal % in "1%" must become %25, not collide with the %3C
        // that the < substitution introduces.
        let url = translate("Debt to equity < 1%");
        assert!(url.ends_with("query=Debt+to+equity+%3C+1%25"));
        assert!(!url.contains("%253C"));
    }

    #[test]
    fn test_multiline_input_splits_on_and() {
        let raw = "Market Capitalization > 30000 AND \nPrice to earning > 15 AND \nReturn on capital employed > 22% AND\nReturn on equity > 20 AND \nDebt to equity < 1";
        let url = translate(raw);
        assert_eq!(
            url,
            "https://www.screener.in/screen/raw/?sort=&order=&source_id=&query=Market+Capitalization+%3E+30000+AND+%0D%0APrice+to+earning+%3E+15+AND+%0D%0AReturn+on+capital+employed+%3E+22%25+AND%0D%0AReturn+on+equity+%3E+20+AND+%0D%0ADebt+to+equity+%3C+1"
        );
    }

    #[test]
    fn test_lowercase_and_separator() {
        let url = translate("a > 1 and b < 2");
        assert!(url.ends_with("query=a+%3E+1+AND+%0D%0Ab+%3C+2"));
    }

    #[test]
    fn test_order_preserved() {
        let url = translate("Zeta > 1 AND Alpha > 2 AND Mid > 3");
        let query = url.split("query=").nth(1).unwrap();
        let zeta = query.find("Zeta").unwrap();
        let alpha = query.find("Alpha").unwrap();
        let mid = query.find("Mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_whitespace_runs_collapse_to_single_plus() {
        let url = translate("Price  to\tearning > 15");
        assert!(url.ends_with("query=Price+to+earning+%3E+15"));
    }

    #[test]
    fn test_idempotent() {
        let raw = "Return on equity > 20 AND Debt to equity < 1";
        assert_eq!(translate(raw), translate(raw));
    }

    #[test]
    fn test_and_inside_word_not_a_separator() {
        // "Band" contains "and" but has no surrounding whitespace.
        let url = translate("Band width > 5");
        assert!(url.ends_with("query=Band+width+%3E+5"));
    }

    #[test]
    fn test_fallback_url_is_well_formed() {
        let url = fallback_url("Debt to equity < 1%");
        assert_eq!(
            url,
            "https://www.screener.in/screen/raw/?query=Debt+to+equity+%3C+1%25"
        );
        assert!(Url::parse(&url).is_ok());
    }

    #[test]
    fn test_empty_string_still_produces_base_url() {
        // Emptiness is the HTTP boundary's problem; the translator just
        // returns the bare screen URL.
        let url = translate("");
        assert_eq!(
            url,
            "https://www.screener.in/screen/raw/?sort=&order=&source_id=&query="
        );
    }
}
