pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Header name to value, in insertion order.
///
/// Names are compared exactly; inserting an existing name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: Vec<(String, String)>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mapping every request starts from.
    pub fn seeded() -> Self {
        Self::with_content_type(JSON_CONTENT_TYPE)
    }

    pub fn with_content_type(content_type: &str) -> Self {
        let mut headers = Self::new();
        headers.insert(CONTENT_TYPE, content_type);
        headers
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds every entry that parses as `key=value`; the rest are skipped.
    pub fn extend_from_params<S: AsRef<str>>(&mut self, params: &[S]) {
        for param in params {
            if let Some((name, value)) = parse_header_param(param.as_ref()) {
                self.insert(name, value);
            }
        }
    }
}

/// Splits a `key=value` entry.
///
/// The value stops at the second `=`, so `a=b=c` yields `("a", "b")`.
/// Both sides must be non-empty before trimming.
pub fn parse_header_param(raw: &str) -> Option<(String, String)> {
    let mut parts = raw.split('=');
    let key = parts.next().filter(|k| !k.is_empty())?;
    let value = parts.next().filter(|v| !v.is_empty())?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_holds_only_json_content_type() {
        let headers = RequestHeaders::seeded();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(CONTENT_TYPE), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn parses_and_trims_key_value() {
        assert_eq!(
            parse_header_param(" X-Token = abc "),
            Some(("X-Token".to_string(), "abc".to_string()))
        );
    }

    #[test]
    fn value_with_equals_is_truncated() {
        assert_eq!(
            parse_header_param("X-Sig=a=b"),
            Some(("X-Sig".to_string(), "a".to_string()))
        );
    }

    #[test]
    fn missing_side_is_dropped() {
        assert_eq!(parse_header_param("X-Empty="), None);
        assert_eq!(parse_header_param("=value"), None);
        assert_eq!(parse_header_param("no-separator"), None);
        assert_eq!(parse_header_param(""), None);
    }

    #[test]
    fn params_extend_and_override_in_order() {
        let mut headers = RequestHeaders::seeded();
        headers.extend_from_params(&["Accept=text/plain", "bogus", "Content-Type=text/xml"]);

        let collected: Vec<_> = headers.iter().collect();
        assert_eq!(
            collected,
            vec![("Content-Type", "text/xml"), ("Accept", "text/plain")]
        );
    }
}
