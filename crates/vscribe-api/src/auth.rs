//! Static API-key check for the upload endpoint.

use axum::http::{header, HeaderMap};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Verify the bearer API key against the configured secret.
///
/// The check is optional policy: with no secret configured, every
/// request passes. With one configured, the Authorization header must
/// equal `Bearer <secret>` exactly.
pub fn verify_api_key(config: &ApiConfig, headers: &HeaderMap) -> ApiResult<()> {
    let Some(expected) = config.api_key.as_deref() else {
        return Ok(());
    };

    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(value) if value == format!("Bearer {}", expected) => Ok(()),
        _ => Err(ApiError::InvalidApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config_with_key(key: Option<&str>) -> ApiConfig {
        ApiConfig {
            api_key: key.map(String::from),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_no_key_configured_allows_all() {
        let headers = HeaderMap::new();
        assert!(verify_api_key(&config_with_key(None), &headers).is_ok());
    }

    #[test]
    fn test_matching_key() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer sekrit"),
        );
        assert!(verify_api_key(&config_with_key(Some("sekrit")), &headers).is_ok());
    }

    #[test]
    fn test_missing_or_wrong_key() {
        let config = config_with_key(Some("sekrit"));

        let headers = HeaderMap::new();
        assert!(matches!(
            verify_api_key(&config, &headers),
            Err(ApiError::InvalidApiKey)
        ));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer wrong"),
        );
        assert!(matches!(
            verify_api_key(&config, &headers),
            Err(ApiError::InvalidApiKey)
        ));

        // Bare token without the Bearer prefix does not match
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("sekrit"));
        assert!(matches!(
            verify_api_key(&config, &headers),
            Err(ApiError::InvalidApiKey)
        ));
    }
}
