//! URL query-string parsing.
//!
//! Mirrors `URLSearchParams.get`: pairs keep their order and a lookup returns
//! the first value stored for a key.

/// Decoded query parameters of a page URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a search string, with or without its leading `?`.
    ///
    /// ```rust
    /// use etcher_pages::query::QueryParams;
    ///
    /// let params = QueryParams::parse("?vn=b&etcher-version=1.4.5");
    /// assert_eq!(params.get("vn"), Some("b"));
    /// assert_eq!(params.get("api-version"), None);
    /// ```
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = search
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self { pairs }
    }

    /// Parse the query part of a full URL (between `?` and `#`).
    pub fn from_url(href: &str) -> Self {
        let without_fragment = href.split_once('#').map_or(href, |(head, _)| head);
        match without_fragment.split_once('?') {
            Some((_, search)) => Self::parse(search),
            None => Self::default(),
        }
    }

    /// First value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// Form encoding: `+` is a space. Malformed escapes are kept as written and
// bytes that are not UTF-8 become U+FFFD.
fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
