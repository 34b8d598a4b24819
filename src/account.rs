use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;

/// Status recorded after a successful sign-in
pub const STATUS_WORK: &str = "work";

/// Credentials and preferences for one remote account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account display name, also used to namespace cached listings
    pub name: String,
    pub username: String,
    pub password: String,
    /// Current session token, replaced on every successful sign-in
    pub access_token: String,
    /// `"work"` when healthy, otherwise the last error reported by the remote
    pub status: String,
    /// Remote id of the directory mounted at `/`
    pub root_folder: String,
    pub order_by: String,
    pub order_direction: String,
    /// Optional proxy every request is routed through
    pub api_proxy_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(name: &str, username: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            root_folder: "0".to_string(),
            order_by: "file_name".to_string(),
            order_direction: "asc".to_string(),
            ..Default::default()
        }
    }

    /// Route a URL through the account's proxy, if one is configured
    pub fn proxied_url(&self, url: &str) -> String {
        match self.api_proxy_url.as_deref() {
            Some(proxy) if !proxy.is_empty() => format!("{}/{}", proxy, url),
            _ => url.to_string(),
        }
    }
}

/// Persistence hook invoked after every sign-in attempt
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist the current state of an account
    async fn save(&self, account: &Account) -> Result<()>;
}

/// In-memory store keeping the last saved copy of each account
pub struct MemoryAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fetch the last saved copy of an account by name
    pub async fn get(&self, name: &str) -> Option<Account> {
        let accounts = self.accounts.read().await;
        accounts.get(name).cloned()
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn save(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.name.clone(), account.clone());
        Ok(())
    }
}

/// Store that discards every save
pub struct NoAccountStore;

#[async_trait]
impl AccountStore for NoAccountStore {
    async fn save(&self, _account: &Account) -> Result<()> {
        Ok(())
    }
}
