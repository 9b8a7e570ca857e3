use contracts::system::auth::TokenClaims;
use leptos::prelude::*;

use super::{api, storage, token};
use crate::api::Credential;

pub const PERMISSION_DENIED: &str =
    "Permission denied. Please log in with an Admin account to access the Dashboard.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub credential: Option<Credential>,
    pub claims: Option<TokenClaims>,
}

impl AuthState {
    /// The "is authorized" signal consumed by the catalog.
    pub fn is_authorized(&self) -> bool {
        self.credential.is_some() && self.claims.as_ref().is_some_and(|c| c.is_admin())
    }
}

/// Accept a token only if it carries the admin role.
pub fn authorize(raw_token: &str) -> Result<AuthState, String> {
    let claims = token::decode_claims(raw_token)?;
    if !claims.is_admin() {
        return Err(PERMISSION_DENIED.to_string());
    }
    Ok(AuthState {
        credential: Some(Credential::new(raw_token)),
        claims: Some(claims),
    })
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore session from localStorage
    let restored = match storage::get_token() {
        Some(raw) => authorize(&raw).unwrap_or_else(|e| {
            log::info!("discarding stored token: {}", e);
            storage::clear_token();
            AuthState::default()
        }),
        None => AuthState::default(),
    };
    let auth_state = RwSignal::new(restored);

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login. Non-admin tokens are discarded.
pub async fn do_login(
    auth_state: RwSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), String> {
    let raw = api::login(username, password).await.map_err(|e| {
        log::warn!("login failed: {}", e);
        INVALID_CREDENTIALS.to_string()
    })?;

    match authorize(&raw) {
        Ok(state) => {
            storage::save_token(&raw);
            auth_state.set(state);
            Ok(())
        }
        Err(e) => {
            storage::clear_token();
            Err(e)
        }
    }
}

/// Helper: Perform logout
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    storage::clear_token();
    auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    fn token(role: &str) -> String {
        let payload = format!(r#"{{"sub":"admin1","role":"{}"}}"#, role);
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_admin_token_authorized() {
        let state = authorize(&token("ROLE_ADMIN")).unwrap();
        assert!(state.is_authorized());
        assert_eq!(state.credential, Some(Credential::new(token("ROLE_ADMIN"))));
    }

    #[test]
    fn test_non_admin_token_rejected() {
        assert_eq!(
            authorize(&token("ROLE_USER")).unwrap_err(),
            PERMISSION_DENIED
        );
        assert!(!AuthState::default().is_authorized());
    }
}
