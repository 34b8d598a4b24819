/// Integration tests for the 123pan driver
///
/// These run the real reqwest transport against a local mock server

use mockito::{Matcher, Server, ServerGuard};
use pan123_driver::{
    Account, Driver, DriverError, FileType, MemoryAccountStore, MemoryCache, Pan123Config,
    Pan123Driver, Pan123File, ReqwestTransport,
};
use serde_json::json;
use std::sync::Arc;

fn driver_for(api_base: String, store: Arc<MemoryAccountStore>) -> Pan123Driver {
    let config = Pan123Config {
        api_base,
        timeout_secs: 5,
        ..Default::default()
    };
    let transport = Arc::new(ReqwestTransport::new(&config));

    Pan123Driver::new(config, transport, Arc::new(MemoryCache::<Pan123File>::new()), store).unwrap()
}

fn test_account() -> Account {
    let mut account = Account::new("main", "alice", "secret");
    account.access_token = "old-token".to_string();
    account
}

fn entry(id: i64, name: &str, file_type: i32) -> serde_json::Value {
    json!({
        "FileName": name,
        "Size": 512,
        "UpdateAt": "2022-01-01T00:00:00+08:00",
        "FileId": id,
        "Type": file_type,
        "Etag": format!("etag-{}", id),
        "S3KeyFlag": format!("flag-{}", id),
    })
}

fn page(entries: Vec<serde_json::Value>, next: &str) -> String {
    json!({
        "code": 0,
        "message": "ok",
        "data": { "InfoList": entries, "Next": next }
    })
    .to_string()
}

async fn server() -> ServerGuard {
    Server::new_async().await
}

#[tokio::test]
async fn test_expired_token_is_refreshed() {
    let mut server = server().await;
    let store = Arc::new(MemoryAccountStore::new());
    let driver = driver_for(format!("{}/api", server.url()), store.clone());

    let expired = server
        .mock("GET", "/api/file/list")
        .match_header("authorization", "Bearer old-token")
        .match_query(Matcher::Any)
        .with_body(json!({ "code": 401, "message": "token expired" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let sign_in = server
        .mock("POST", "/api/user/sign_in")
        .match_body(Matcher::Json(json!({ "passport": "alice", "password": "secret" })))
        .with_body(json!({ "code": 200, "message": "ok", "data": { "token": "new-token" } }).to_string())
        .expect(1)
        .create_async()
        .await;

    let listing = server
        .mock("GET", "/api/file/list")
        .match_header("authorization", "Bearer new-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("parentFileId".into(), "0".into()),
            Matcher::UrlEncoded("next".into(), "0".into()),
            Matcher::UrlEncoded("trashed".into(), "false".into()),
        ]))
        .with_body(page(vec![entry(1, "movie.mkv", 0), entry(2, "music", 1)], "-1"))
        .expect(1)
        .create_async()
        .await;

    let mut account = test_account();
    let files = driver.files("/", &mut account).await.unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "movie.mkv");
    assert_eq!(files[0].file_type, FileType::Video);
    assert!(files[0].updated_at.is_some());
    assert_eq!(files[1].file_type, FileType::Folder);

    assert_eq!(account.access_token, "new-token");
    assert_eq!(account.status, "work");
    assert_eq!(store.get("main").await.unwrap().access_token, "new-token");

    expired.assert_async().await;
    sign_in.assert_async().await;
    listing.assert_async().await;
}

#[tokio::test]
async fn test_pagination_over_http() {
    let mut server = server().await;

    // A client shared with other drivers
    let client = reqwest::Client::builder()
        .user_agent("aggregator/1.0")
        .build()
        .unwrap();
    let config = Pan123Config {
        api_base: format!("{}/api", server.url()),
        ..Default::default()
    };
    let driver = Pan123Driver::new(
        config,
        Arc::new(ReqwestTransport::with_client(client)),
        Arc::new(MemoryCache::<Pan123File>::new()),
        Arc::new(MemoryAccountStore::new()),
    )
    .unwrap();

    let first = server
        .mock("GET", "/api/file/list")
        .match_header("user-agent", "aggregator/1.0")
        .match_query(Matcher::UrlEncoded("next".into(), "0".into()))
        .with_body(page((0..100).map(|i| entry(i, &format!("{}.txt", i), 0)).collect(), "5"))
        .expect(1)
        .create_async()
        .await;

    let second = server
        .mock("GET", "/api/file/list")
        .match_query(Matcher::UrlEncoded("next".into(), "5".into()))
        .with_body(page((100..137).map(|i| entry(i, &format!("{}.txt", i), 0)).collect(), "-1"))
        .expect(1)
        .create_async()
        .await;

    let mut account = test_account();
    let files = driver.get_files("0", &mut account).await.unwrap();

    assert_eq!(files.len(), 137);
    assert_eq!(files[0].file_id, 0);
    assert_eq!(files[136].file_id, 136);

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_resolve_and_link() {
    let mut server = server().await;
    let driver = driver_for(format!("{}/api", server.url()), Arc::new(MemoryAccountStore::new()));

    let root = server
        .mock("GET", "/api/file/list")
        .match_query(Matcher::UrlEncoded("parentFileId".into(), "0".into()))
        .with_body(page(vec![entry(10, "docs", 1)], "-1"))
        .expect(1)
        .create_async()
        .await;

    let docs = server
        .mock("GET", "/api/file/list")
        .match_query(Matcher::UrlEncoded("parentFileId".into(), "10".into()))
        .with_body(page(vec![entry(11, "report.pdf", 0), entry(12, "old", 1)], "-1"))
        .expect(1)
        .create_async()
        .await;

    let download = server
        .mock("POST", "/api/file/download_info")
        .match_header("authorization", "Bearer old-token")
        .match_body(Matcher::PartialJson(json!({ "fileId": 11, "etag": "etag-11" })))
        .with_body(
            json!({
                "code": 0,
                "message": "ok",
                "data": { "DownloadUrl": "https://cdn.example.com/report.pdf" }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let mut account = test_account();

    let file = driver.get_file("/docs/report.pdf", &mut account).await.unwrap();
    assert_eq!(file.file_id, 11);

    assert!(matches!(
        driver.get_file("/docs/old", &mut account).await,
        Err(DriverError::NotAFile { .. })
    ));
    assert!(matches!(
        driver.get_file("/docs/missing.pdf", &mut account).await,
        Err(DriverError::PathNotFound { .. })
    ));

    let url = driver.link("/docs/report.pdf", &mut account).await.unwrap();
    assert_eq!(url, "https://cdn.example.com/report.pdf");

    // Every listing after the first came from the cache
    root.assert_async().await;
    docs.assert_async().await;
    download.assert_async().await;
}

#[tokio::test]
async fn test_rejected_sign_in() {
    let mut server = server().await;
    let store = Arc::new(MemoryAccountStore::new());
    let driver = driver_for(format!("{}/api", server.url()), store.clone());

    let _sign_in = server
        .mock("POST", "/api/user/sign_in")
        .with_body(json!({ "code": 5113, "message": "wrong password", "data": null }).to_string())
        .create_async()
        .await;

    let mut account = test_account();
    match driver.login(&mut account).await {
        Err(DriverError::Authentication { message }) => assert_eq!(message, "wrong password"),
        other => panic!("Expected Authentication error, got {:?}", other),
    }

    assert_eq!(account.access_token, "old-token");
    assert_eq!(account.status, "wrong password");
    assert_eq!(store.get("main").await.unwrap().status, "wrong password");
}

#[tokio::test]
async fn test_malformed_response() {
    let mut server = server().await;
    let driver = driver_for(format!("{}/api", server.url()), Arc::new(MemoryAccountStore::new()));

    let _listing = server
        .mock("GET", "/api/file/list")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let mut account = test_account();
    assert!(matches!(
        driver.files("/", &mut account).await,
        Err(DriverError::Serialization(_))
    ));
}

#[tokio::test]
async fn test_transport_failure() {
    // Nothing listens on port 1
    let store = Arc::new(MemoryAccountStore::new());
    let driver = driver_for("http://127.0.0.1:1/api".to_string(), store.clone());

    let mut account = test_account();
    assert!(matches!(
        driver.files("/", &mut account).await,
        Err(DriverError::Network(_))
    ));
    assert!(matches!(
        driver.login(&mut account).await,
        Err(DriverError::Network(_))
    ));

    // A sign-in that never reached the server leaves the account alone
    assert_eq!(account.access_token, "old-token");
    assert!(store.get("main").await.is_none());
}
