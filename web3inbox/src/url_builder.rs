//! Inbox URL construction.
//!
//! The hosted app reads its native bridge settings from the query string:
//! three provider tags, the account address, and one `<flag>=false` entry per
//! disabled feature. A missing flag means the feature is enabled.

use std::borrow::Borrow;
use std::fmt;

use tracing::debug;
use url::Url;

use crate::config::Web3InboxConfig;
use crate::error::{Result, Web3InboxError};
use crate::types::Account;

/// Build the URL the web view should load for `account`.
///
/// Fixed parameters come first (`chatProvider`, `pushProvider`, `account`,
/// `authProvider`), followed by every flag whose value is `false`, in the
/// iteration order of `flags`. With an unordered map (e.g. `HashMap`) the
/// order of the trailing flags is unspecified; [`FeatureFlags`] iterates in
/// declaration order. Any query already on the endpoint is replaced.
///
/// Values are written with `application/x-www-form-urlencoded` rules: a space
/// becomes `+` and `&` becomes `%26`. The page must decode the query with
/// `URLSearchParams` (or another form decoder), which maps `+` back to a space.
///
/// # Errors
///
/// Returns [`Web3InboxError::InvalidEndpoint`] if the endpoint does not parse,
/// [`Web3InboxError::UrlAssembly`] if it cannot carry a query (e.g. `mailto:`),
/// and [`Web3InboxError::Validation`] for an empty platform tag or
/// flag name.
///
/// [`FeatureFlags`]: crate::types::FeatureFlags
pub fn build_url<I, K, B>(config: &Web3InboxConfig, account: &Account, flags: I) -> Result<Url>
where
    I: IntoIterator<Item = (K, B)>,
    K: fmt::Display,
    B: Borrow<bool>,
{
    let platform = config.platform.as_str();
    if platform.is_empty() {
        return Err(Web3InboxError::Validation("platform tag is empty".into()));
    }

    let mut url = Url::parse(&config.endpoint).map_err(|source| {
        Web3InboxError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            source,
        }
    })?;

    if url.cannot_be_a_base() {
        return Err(Web3InboxError::UrlAssembly(format!(
            "endpoint {url} cannot carry a query"
        )));
    }

    url.set_query(None);
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("chatProvider", platform)
            .append_pair("pushProvider", platform)
            .append_pair("account", account.address())
            .append_pair("authProvider", platform);

        for (key, enabled) in flags {
            if *enabled.borrow() {
                continue;
            }
            let name = key.to_string();
            if name.is_empty() {
                return Err(Web3InboxError::Validation("empty feature flag name".into()));
            }
            query.append_pair(&name, "false");
        }
    }

    debug!(url = %url, "built inbox URL");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::config::dev_config;
    use crate::types::{ConfigParam, FeatureFlags};

    const NO_FLAGS: [(&str, bool); 0] = [];

    fn config(endpoint: &str) -> Web3InboxConfig {
        Web3InboxConfig {
            endpoint: endpoint.into(),
            platform: "ios".into(),
        }
    }

    fn account(address: &str) -> Account {
        Account::new(address).unwrap()
    }

    #[test]
    fn test_disabled_flag_appended_enabled_omitted() {
        let url = build_url(
            &config("https://inbox.example.com/"),
            &account("0xABC123"),
            [("notifications", false), ("sync", true)],
        )
        .unwrap();
        assert_eq!(
            url.query(),
            Some("chatProvider=ios&pushProvider=ios&account=0xABC123&authProvider=ios&notifications=false")
        );
    }

    #[test]
    fn test_empty_flags_has_four_params() {
        let url = build_url(&config("https://inbox.example.com/"), &account("0xDEF456"), NO_FLAGS)
            .unwrap();
        assert_eq!(
            url.query(),
            Some("chatProvider=ios&pushProvider=ios&account=0xDEF456&authProvider=ios")
        );
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(url.as_str().split('?').next(), Some("https://inbox.example.com/"));
    }

    #[test]
    fn test_all_true_flags_produce_nothing() {
        let flags: FeatureFlags = ConfigParam::ALL.into_iter().map(|p| (p, true)).collect();
        let url = build_url(&dev_config(), &account("0x1"), &flags).unwrap();
        assert_eq!(url.query_pairs().count(), 4);
        assert!(url.query_pairs().all(|(_, v)| v != "false"));
    }

    #[test]
    fn test_false_flags_each_appear_once_in_order() {
        let mut flags = FeatureFlags::new();
        flags.insert(ConfigParam::SettingsEnabled, false);
        flags.insert(ConfigParam::PushEnabled, true);
        flags.insert(ConfigParam::ChatEnabled, false);

        let url = build_url(&dev_config(), &account("0x1"), &flags).unwrap();
        let tail: Vec<(String, String)> = url
            .query_pairs()
            .skip(4)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            tail,
            vec![
                ("chatEnabled".to_string(), "false".to_string()),
                ("settingsEnabled".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_address_is_percent_encoded() {
        let url = build_url(
            &config("https://inbox.example.com/"),
            &account("0x AB&C=D"),
            NO_FLAGS,
        )
        .unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("account=0x+AB%26C%3DD"));
        assert!(!query.contains(' '));
        assert_eq!(query.matches('&').count(), 3);

        let decoded = url
            .query_pairs()
            .find(|(k, _)| k == "account")
            .map(|(_, v)| v.into_owned());
        assert_eq!(decoded.as_deref(), Some("0x AB&C=D"));
    }

    #[test]
    fn test_idempotent() {
        let mut flags = BTreeMap::new();
        flags.insert("a", false);
        flags.insert("b", false);
        let cfg = config("https://inbox.example.com/app");
        let acct = account("0xABC");
        let first = build_url(&cfg, &acct, &flags).unwrap();
        let second = build_url(&cfg, &acct, &flags).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_custom_platform_tag() {
        let cfg = config("https://inbox.example.com/").with_platform("android");
        let url = build_url(&cfg, &account("0x1"), NO_FLAGS).unwrap();
        assert_eq!(
            url.query(),
            Some("chatProvider=android&pushProvider=android&account=0x1&authProvider=android")
        );
    }

    #[test]
    fn test_existing_query_replaced() {
        let url = build_url(
            &config("https://inbox.example.com/?stale=1"),
            &account("0x1"),
            NO_FLAGS,
        )
        .unwrap();
        assert!(url.query_pairs().all(|(k, _)| k != "stale"));
        assert_eq!(url.query_pairs().count(), 4);
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = build_url(&config("not a url"), &account("0x1"), NO_FLAGS).unwrap_err();
        assert!(matches!(err, Web3InboxError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_cannot_be_a_base_endpoint_rejected() {
        let err = build_url(&config("mailto:inbox@example.com"), &account("0x1"), NO_FLAGS)
            .unwrap_err();
        assert!(matches!(err, Web3InboxError::UrlAssembly(_)));
    }

    #[test]
    fn test_non_http_schemes_accepted() {
        let url = build_url(
            &config("file:///app/index.html"),
            &account("0xABC"),
            [("x", false)],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "file:///app/index.html?chatProvider=ios&pushProvider=ios&account=0xABC&authProvider=ios&x=false"
        );

        let url = build_url(&config("ftp://example.com/"), &account("0x1"), NO_FLAGS).unwrap();
        assert_eq!(url.scheme(), "ftp");
        assert_eq!(url.query_pairs().count(), 4);

        let url = build_url(&config("myapp://inbox/"), &account("0x1"), NO_FLAGS).unwrap();
        assert_eq!(url.query_pairs().count(), 4);
    }

    #[test]
    fn test_space_in_address_is_plus_encoded() {
        let url = build_url(&config("https://inbox.example.com/"), &account("0x A"), NO_FLAGS)
            .unwrap();
        assert!(url.query().unwrap().contains("account=0x+A"));
    }

    #[test]
    fn test_empty_platform_rejected() {
        let cfg = config("https://inbox.example.com/").with_platform("");
        let err = build_url(&cfg, &account("0x1"), NO_FLAGS).unwrap_err();
        assert!(matches!(err, Web3InboxError::Validation(_)));
    }

    #[test]
    fn test_empty_flag_name_rejected() {
        let err = build_url(
            &config("https://inbox.example.com/"),
            &account("0x1"),
            [("", false)],
        )
        .unwrap_err();
        assert!(matches!(err, Web3InboxError::Validation(_)));
    }
}
