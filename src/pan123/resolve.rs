use reqwest::Method;
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use super::{
    types::{DownResp, Pan123File},
    Pan123Driver, DRIVER_NAME,
};
use crate::{
    account::Account,
    error::{DriverError, Result},
    path::{parse_path, split_path},
    types::{File, FileType},
};

type ListingFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<Pan123File>>> + Send + 'a>>;

impl Pan123Driver {
    /// Resolve a path to the raw record of a file.
    ///
    /// The parent directory is listed (or served from the cache) and scanned
    /// for an exact name match. Folders are rejected with `NotAFile`.
    pub async fn get_file(&self, path: &str, account: &mut Account) -> Result<Pan123File> {
        let (dir, name) = split_path(path);
        let listing = self.raw_files(&dir, account).await?;

        let parent_files = self
            .cache
            .get(&account.name, &dir)
            .await?
            .unwrap_or(listing);

        match parent_files.into_iter().find(|f| f.file_name == name) {
            Some(file) if file.is_folder() => Err(DriverError::NotAFile {
                path: path.to_string(),
            }),
            Some(file) => Ok(file),
            None => Err(DriverError::PathNotFound {
                path: path.to_string(),
            }),
        }
    }

    /// Look up a file or folder by path. `/` is the account's root folder.
    pub(crate) async fn find_file(&self, path: &str, account: &mut Account) -> Result<File> {
        let path = parse_path(path);
        if path == "/" {
            return Ok(File {
                id: account.root_folder.clone(),
                name: account.name.clone(),
                size: 0,
                file_type: FileType::Folder,
                driver: DRIVER_NAME.to_string(),
                updated_at: account.updated_at,
            });
        }

        let (dir, name) = split_path(&path);
        let parent_files = self.raw_files_boxed(&dir, account).await?;

        parent_files
            .iter()
            .find(|f| f.file_name == name)
            .map(|f| self.format_file(f))
            .ok_or(DriverError::PathNotFound { path })
    }

    // Listing a directory looks the directory up in its parent's listing,
    // so the two recurse into each other until they reach the root.
    fn raw_files_boxed<'a>(&'a self, path: &'a str, account: &'a mut Account) -> ListingFuture<'a> {
        Box::pin(self.raw_files(path, account))
    }

    /// Fetch a direct download URL for the file at `path`
    pub async fn download_url(&self, path: &str, account: &mut Account) -> Result<String> {
        let file = self.get_file(path, account).await?;
        debug!(file_id = file.file_id, "requesting download url");

        let body = json!({
            "driveId": 0,
            "etag": file.etag,
            "fileId": file.file_id,
            "s3keyFlag": file.s3_key_flag,
            "type": file.file_type,
            "fileName": file.file_name,
            "size": file.size,
        });
        let url = self.config.endpoint("file/download_info");

        let bytes = self.request(account, Method::POST, &url, &[], Some(body)).await?;
        let resp: DownResp = serde_json::from_slice(&bytes)?;

        Ok(resp.data.download_url)
    }
}
