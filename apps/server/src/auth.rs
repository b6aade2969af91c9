use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::ApiError, main_lib::AppState};

/// Proof that the request carried the shared secret.
///
/// Taken as the first handler argument so the check runs before the body
/// is read. The header may hold the secret as-is or as `Bearer <secret>`.
pub struct Authorized;

impl FromRequestParts<Arc<AppState>> for Authorized {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.authorization_key.as_deref() else {
            tracing::warn!("Rejecting write: AUTHORIZATION_KEY is not configured");
            return Err(unauthorized());
        };

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing authorization key");
                unauthorized()
            })?;

        if matches_secret(header, expected) {
            Ok(Authorized)
        } else {
            tracing::warn!("Invalid authorization key");
            Err(unauthorized())
        }
    }
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Unauthorized".to_string())
}

fn matches_secret(header: &str, expected: &str) -> bool {
    if header == expected {
        return true;
    }
    let mut parts = header.splitn(2, ' ');
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(token)) => {
            scheme.eq_ignore_ascii_case("Bearer") && token.trim() == expected
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::matches_secret;

    #[test]
    fn accepts_raw_and_bearer_secret() {
        assert!(matches_secret("s3cret", "s3cret"));
        assert!(matches_secret("Bearer s3cret", "s3cret"));
        assert!(matches_secret("bearer s3cret", "s3cret"));
    }

    #[test]
    fn rejects_anything_else() {
        assert!(!matches_secret("", "s3cret"));
        assert!(!matches_secret("s3cret ", "s3cret"));
        assert!(!matches_secret("Basic s3cret", "s3cret"));
        assert!(!matches_secret("Bearer other", "s3cret"));
        assert!(!matches_secret("S3CRET", "s3cret"));
    }
}
