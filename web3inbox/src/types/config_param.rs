use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Web3InboxError;

/// Optional features of the hosted inbox app that can be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigParam {
    ChatEnabled,
    PushEnabled,
    SettingsEnabled,
}

impl ConfigParam {
    pub const ALL: [ConfigParam; 3] = [
        ConfigParam::ChatEnabled,
        ConfigParam::PushEnabled,
        ConfigParam::SettingsEnabled,
    ];

    /// Query parameter name understood by the hosted app.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigParam::ChatEnabled => "chatEnabled",
            ConfigParam::PushEnabled => "pushEnabled",
            ConfigParam::SettingsEnabled => "settingsEnabled",
        }
    }
}

impl fmt::Display for ConfigParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigParam {
    type Err = Web3InboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigParam::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Web3InboxError::Validation(format!("unknown config param: {s}")))
    }
}

/// Feature toggles, iterated in [`ConfigParam`] declaration order.
///
/// `true` is the default and is never sent; only `false` entries reach the URL.
pub type FeatureFlags = BTreeMap<ConfigParam, bool>;
