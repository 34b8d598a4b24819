//! Driver for the 123pan cloud drive.
//!
//! Listings go through `GET file/list` with cursor pagination, and every
//! request carries the account's bearer token. An expired token (`code`
//! 401 in the response body) is refreshed by signing in again once.

mod list;
mod request;
mod resolve;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    account::{Account, AccountStore},
    cache::DirectoryCache,
    config::Pan123Config,
    driver::Driver,
    error::Result,
    transport::Transport,
    types::{File, FileType},
};

pub use types::{Pan123File, FOLDER_TYPE};

/// Name stamped on every file this driver produces
pub const DRIVER_NAME: &str = "123pan";

/// 123pan backend
#[derive(Clone)]
pub struct Pan123Driver {
    config: Pan123Config,
    transport: Arc<dyn Transport>,
    cache: Arc<dyn DirectoryCache<Pan123File>>,
    store: Arc<dyn AccountStore>,
}

impl Pan123Driver {
    /// Create a new driver
    ///
    /// # Arguments
    /// * `config` - API base URL and client settings
    /// * `transport` - Performs the HTTP round trips
    /// * `cache` - Holds raw directory listings between calls
    /// * `store` - Persists accounts after every sign-in attempt
    pub fn new(
        config: Pan123Config,
        transport: Arc<dyn Transport>,
        cache: Arc<dyn DirectoryCache<Pan123File>>,
        store: Arc<dyn AccountStore>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            transport,
            cache,
            store,
        })
    }

    pub fn config(&self) -> &Pan123Config {
        &self.config
    }

    /// The listing cache shared with the host
    pub fn cache(&self) -> &Arc<dyn DirectoryCache<Pan123File>> {
        &self.cache
    }

    /// Convert a raw record into the aggregator's file model
    pub fn format_file(&self, file: &Pan123File) -> File {
        let file_type = if file.is_folder() {
            FileType::Folder
        } else {
            FileType::from_name(&file.file_name)
        };

        File {
            id: file.file_id.to_string(),
            name: file.file_name.clone(),
            size: file.size,
            file_type,
            driver: DRIVER_NAME.to_string(),
            updated_at: file.update_at,
        }
    }
}

#[async_trait]
impl Driver for Pan123Driver {
    fn name(&self) -> &str {
        DRIVER_NAME
    }

    async fn login(&self, account: &mut Account) -> Result<()> {
        Pan123Driver::login(self, account).await
    }

    async fn files(&self, path: &str, account: &mut Account) -> Result<Vec<File>> {
        let raw = self.raw_files(path, account).await?;
        Ok(raw.iter().map(|f| self.format_file(f)).collect())
    }

    async fn file(&self, path: &str, account: &mut Account) -> Result<File> {
        self.find_file(path, account).await
    }

    async fn link(&self, path: &str, account: &mut Account) -> Result<String> {
        self.download_url(path, account).await
    }
}
