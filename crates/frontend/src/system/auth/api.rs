use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, api_url};

/// Login with username and password, returning the issued access token
pub async fn login(username: String, password: String) -> Result<String, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url(&api_base(), "/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map(|r| r.token)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
