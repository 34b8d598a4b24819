use reqwest::Method;
use tracing::{debug, info};

use super::{
    types::{FilesResp, Pan123File},
    Pan123Driver,
};
use crate::{
    account::Account,
    error::{DriverError, Result},
    path::parse_path,
};

/// Cursor that requests the first page
const FIRST_PAGE: &str = "0";
/// Cursor the remote returns after the last page
const LAST_PAGE: &str = "-1";
const PAGE_SIZE: &str = "100";

impl Pan123Driver {
    /// Collect every entry of a remote directory, following the `Next`
    /// cursor until the remote reports the last page.
    ///
    /// Entries keep the order the remote returned them in. Any failed page
    /// fails the whole listing.
    pub async fn get_files(&self, parent_id: &str, account: &mut Account) -> Result<Vec<Pan123File>> {
        let url = self.config.endpoint("file/list");
        let mut next = FIRST_PAGE.to_string();
        let mut files = Vec::new();

        while next != LAST_PAGE {
            debug!(parent = parent_id, cursor = %next, "listing page");
            let query = [
                ("driveId", "0".to_string()),
                ("limit", PAGE_SIZE.to_string()),
                ("next", next.clone()),
                ("orderBy", account.order_by.clone()),
                ("orderDirection", account.order_direction.clone()),
                ("parentFileId", parent_id.to_string()),
                ("trashed", "false".to_string()),
            ];

            let body = self.request(account, Method::GET, &url, &query, None).await?;
            let resp: FilesResp = serde_json::from_slice(&body)?;

            files.extend(resp.data.info_list);
            next = resp.data.next;
        }

        Ok(files)
    }

    /// Raw listing of the directory at `path`, served from the cache when
    /// possible and stored there after a fresh listing.
    pub(crate) async fn raw_files(&self, path: &str, account: &mut Account) -> Result<Vec<Pan123File>> {
        let path = parse_path(path);

        if let Some(cached) = self.cache.get(&account.name, &path).await? {
            return Ok(cached);
        }

        let dir = self.find_file(&path, account).await?;
        if !dir.is_folder() {
            return Err(DriverError::NotAFolder { path });
        }

        let files = self.get_files(&dir.id, account).await?;
        self.cache.set(&account.name, &path, files.clone()).await?;
        info!(account = %account.name, path = %path, entries = files.len(), "cached listing");

        Ok(files)
    }
}
