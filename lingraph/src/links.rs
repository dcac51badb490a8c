//! Graph-browser link building
//!
//! The composed query string is the tool's product; it reaches the external
//! graph browser URL-encoded in the `cql` query parameter.

use anyhow::{Context, Result};
use url::Url;

/// Build the browser link executing `query`
pub fn browser_url(base: &str, query: &str) -> Result<Url> {
    let mut url =
        Url::parse(base).with_context(|| format!("Invalid browser base URL: {base}"))?;
    url.query_pairs_mut().append_pair("cql", query);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_encoded() {
        let url = browser_url(
            "https://grammarxiv.net/entry",
            "match p = () return *, relationships(p)",
        )
        .unwrap();
        assert_eq!(url.host_str(), Some("grammarxiv.net"));
        let query = url.query().unwrap();
        assert!(query.starts_with("cql=match"));
        assert!(!query.contains(' '));
        // Parentheses travel percent-encoded
        assert!(query.contains("%28"));
    }

    #[test]
    fn test_invalid_base_is_an_error() {
        assert!(browser_url("not a url", "match").is_err());
    }
}
