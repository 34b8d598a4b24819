use bytes::Bytes;
use reqwest::Method;
use serde_json::json;
use tracing::{debug, info, warn};

use super::{
    types::{BaseResp, TokenResp},
    Pan123Driver,
};
use crate::{
    account::{Account, STATUS_WORK},
    error::{DriverError, Result},
    transport::HttpRequest,
};

/// `code` reported by every endpoint except sign-in on success
const CODE_OK: i64 = 0;
/// `code` the sign-in endpoint reports on success
const CODE_SIGN_IN_OK: i64 = 200;
/// `code` reported when the session token is missing or expired
const CODE_UNAUTHORIZED: i64 = 401;

impl Pan123Driver {
    /// Sign in with the account's username and password.
    ///
    /// On success the account's token is replaced and its status set to
    /// `"work"`. On rejection the status holds the server's message and the
    /// old token is kept. Either way the account is saved afterwards; a
    /// failed save is only logged.
    pub async fn login(&self, account: &mut Account) -> Result<()> {
        let url = account.proxied_url(&self.config.endpoint("user/sign_in"));
        let request = HttpRequest::new(Method::POST, url).json(json!({
            "passport": account.username,
            "password": account.password,
        }));

        let body = self.transport.execute(request).await?;
        let resp: TokenResp = serde_json::from_slice(&body)?;

        let result = if resp.base.code == CODE_SIGN_IN_OK {
            account.status = STATUS_WORK.to_string();
            account.access_token = resp.data.map(|d| d.token).unwrap_or_default();
            info!(account = %account.name, "signed in");
            Ok(())
        } else {
            warn!(account = %account.name, code = resp.base.code, message = %resp.base.message, "sign-in rejected");
            account.status = resp.base.message.clone();
            Err(DriverError::Authentication {
                message: resp.base.message,
            })
        };

        if let Err(e) = self.store.save(account).await {
            warn!(account = %account.name, error = %e, "failed to save account");
        }

        result
    }

    /// Issue an authenticated request and return the raw response body.
    ///
    /// Only GET and POST are supported. A 401 in the response body triggers
    /// one sign-in followed by one retry of the original request.
    pub async fn request(
        &self,
        account: &mut Account,
        method: Method,
        url: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<Bytes> {
        if method != Method::GET && method != Method::POST {
            return Err(DriverError::UnsupportedMethod {
                method: method.to_string(),
            });
        }

        let mut reauthenticated = false;
        loop {
            let effective_url = account.proxied_url(url);
            debug!("request: {}", effective_url);

            let mut request = HttpRequest::new(method.clone(), effective_url)
                .header("Authorization", format!("Bearer {}", account.access_token))
                .query(query);
            if let Some(body) = &body {
                request = request.json(body.clone());
            }

            let bytes = self.transport.execute(request).await?;
            let resp: BaseResp = serde_json::from_slice(&bytes)?;

            match resp.code {
                CODE_OK => return Ok(bytes),
                CODE_UNAUTHORIZED if !reauthenticated => {
                    warn!(account = %account.name, "session expired, signing in again");
                    self.login(account).await?;
                    reauthenticated = true;
                }
                code => {
                    return Err(DriverError::Remote {
                        code,
                        message: resp.message,
                    })
                }
            }
        }
    }
}
