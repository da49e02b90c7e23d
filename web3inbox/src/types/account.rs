use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, Web3InboxError};

/// A wallet identity scoping the inbox session.
///
/// Parsed from a CAIP-10 account id (`eip155:1:0xab16...`) or a bare
/// address. Only [`Account::address`] is sent to the hosted app.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Account {
    chain: Option<ChainId>,
    address: String,
}

/// CAIP-2 chain id, e.g. `eip155:1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId {
    pub namespace: String,
    pub reference: String,
}

impl Account {
    /// Build an account from a bare address.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(Web3InboxError::InvalidAccount("empty address".into()));
        }
        Ok(Self {
            chain: None,
            address,
        })
    }

    /// Build an account on a specific chain.
    pub fn on_chain(
        namespace: impl Into<String>,
        reference: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        let namespace = namespace.into();
        let reference = reference.into();
        if namespace.is_empty() || reference.is_empty() {
            return Err(Web3InboxError::InvalidAccount(
                "chain namespace and reference must be non-empty".into(),
            ));
        }
        let mut account = Self::new(address)?;
        account.chain = Some(ChainId {
            namespace,
            reference,
        });
        Ok(account)
    }

    /// The wallet address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The chain this account lives on, if known.
    pub fn chain(&self) -> Option<&ChainId> {
        self.chain.as_ref()
    }
}

impl FromStr for Account {
    type Err = Web3InboxError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.splitn(3, ':').collect();
        match parts.as_slice() {
            [address] => Self::new(*address),
            [namespace, reference, address] => Self::on_chain(*namespace, *reference, *address),
            _ => Err(Web3InboxError::InvalidAccount(format!(
                "expected <namespace>:<reference>:<address> or a bare address, got {s:?}"
            ))),
        }
    }
}

impl TryFrom<String> for Account {
    type Error = Web3InboxError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Account> for String {
    fn from(account: Account) -> Self {
        account.to_string()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.chain {
            Some(chain) => write!(f, "{}:{}:{}", chain.namespace, chain.reference, self.address),
            None => f.write_str(&self.address),
        }
    }
}
