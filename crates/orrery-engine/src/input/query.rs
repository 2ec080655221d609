//! Page query-string access (`?ms=40&...`).

use url::form_urlencoded;

/// Decoded query parameters, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let raw = search.strip_prefix('?').unwrap_or(search);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key` parsed as a number. Non-numeric values give `None`.
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(|v| v.trim().parse::<f32>().ok())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_question_mark() {
        assert_eq!(QueryParams::parse("?ms=40").get("ms"), Some("40"));
        assert_eq!(QueryParams::parse("ms=40").get("ms"), Some("40"));
    }

    #[test]
    fn first_value_wins() {
        let q = QueryParams::parse("?ms=5&ms=9");
        assert_eq!(q.get_f32("ms"), Some(5.0));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn non_numeric_is_none() {
        let q = QueryParams::parse("?ms=fast&x=%2012.5");
        assert_eq!(q.get_f32("ms"), None);
        assert_eq!(q.get_f32("x"), Some(12.5));
        assert_eq!(q.get_f32("missing"), None);
    }

    #[test]
    fn empty_search() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }
}
