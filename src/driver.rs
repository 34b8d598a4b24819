use async_trait::async_trait;
use crate::{account::Account, error::Result, types::File};

/// Capabilities every storage backend exposes to the aggregator
///
/// A host keeps one implementation per provider and looks them up by
/// [`Driver::name`].
#[async_trait]
pub trait Driver: Send + Sync {
    /// Name stamped on every file this driver produces
    fn name(&self) -> &str;

    /// Sign in and refresh the account's session token
    async fn login(&self, account: &mut Account) -> Result<()>;

    /// List the directory at `path`
    ///
    /// Returns `DriverError::NotAFolder` if `path` names a file
    async fn files(&self, path: &str, account: &mut Account) -> Result<Vec<File>>;

    /// Look up a single entry, file or folder, by path
    ///
    /// Returns `DriverError::PathNotFound` if nothing has that name
    async fn file(&self, path: &str, account: &mut Account) -> Result<File>;

    /// Get a direct download URL for the file at `path`
    async fn link(&self, path: &str, account: &mut Account) -> Result<String>;
}
