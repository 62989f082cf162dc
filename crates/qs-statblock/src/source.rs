//! Monster-compendium URL normalization.
//!
//! Users paste browser URLs; the API lives under `/api` and wants
//! `?include=` hints for nested records. This is pure string rewriting —
//! the actual fetch is an external collaborator.

use crate::error::{StatblockError, StatblockResult};

const COMPENDIUM_HOST: &str = "nimble.nexus";

/// Normalize a compendium URL for the API: require a `/collections` or
/// `/monsters` path, insert `/api` after the host, and append the
/// matching `?include=` query. URLs for other hosts pass through
/// untouched.
pub fn prepare_monster_url(url: &str) -> StatblockResult<String> {
    let mut url = url.trim().to_string();

    let Some(after_host) = url
        .split_once(COMPENDIUM_HOST)
        .map(|(_, after)| after.to_string())
    else {
        return Ok(url);
    };

    if !after_host.contains("/collections") && !after_host.contains("/monsters") {
        return Err(StatblockError::InvalidSourceUrl(url));
    }

    if !after_host.starts_with("/api") {
        url = url.replacen(COMPENDIUM_HOST, "nimble.nexus/api", 1);
    }

    if after_host.contains("/collections") && !url.contains("?include=monsters") {
        url.push_str("?include=monsters");
    }
    if after_host.contains("/monsters") && !url.contains("?include=families") {
        url.push_str("?include=families");
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_gets_api_and_include() {
        let url = prepare_monster_url("https://nimble.nexus/collections/42").unwrap();
        assert_eq!(
            url,
            "https://nimble.nexus/api/collections/42?include=monsters"
        );
    }

    #[test]
    fn monster_url_gets_api_and_families() {
        let url = prepare_monster_url("https://nimble.nexus/monsters/owlbear").unwrap();
        assert_eq!(
            url,
            "https://nimble.nexus/api/monsters/owlbear?include=families"
        );
    }

    #[test]
    fn api_prefix_not_duplicated() {
        let url = prepare_monster_url("https://nimble.nexus/api/monsters/owlbear").unwrap();
        assert_eq!(
            url,
            "https://nimble.nexus/api/monsters/owlbear?include=families"
        );
    }

    #[test]
    fn include_not_duplicated() {
        let url =
            prepare_monster_url("https://nimble.nexus/api/collections/42?include=monsters")
                .unwrap();
        assert_eq!(
            url,
            "https://nimble.nexus/api/collections/42?include=monsters"
        );
    }

    #[test]
    fn rejects_unrelated_compendium_paths() {
        let err = prepare_monster_url("https://nimble.nexus/about").unwrap_err();
        assert!(err.to_string().contains("invalid source URL"));
    }

    #[test]
    fn other_hosts_pass_through() {
        let url = prepare_monster_url("https://example.com/bestiary.json").unwrap();
        assert_eq!(url, "https://example.com/bestiary.json");
    }

    #[test]
    fn trims_whitespace() {
        let url = prepare_monster_url("  https://example.com/x  ").unwrap();
        assert_eq!(url, "https://example.com/x");
    }
}
