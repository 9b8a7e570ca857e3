use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use contracts::system::auth::TokenClaims;

/// Decode the payload segment of a JWT without checking the signature.
pub fn decode_claims(token: &str) -> Result<TokenClaims, String> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| "Malformed token".to_string())?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| format!("Malformed token payload: {}", e))?;
    serde_json::from_slice(&bytes).map_err(|e| format!("Malformed token claims: {}", e))
}
