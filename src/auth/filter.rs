//! Bearer authentication filter for protected routes

use std::sync::Arc;
use warp::{Filter, Rejection};

use super::token::{extract_bearer_token, is_bearer_scheme, Identity, TokenManager};
use crate::error::{AuthError, UserDirectoryError};

/// Authenticates a request from its raw `Authorization` header value.
///
/// Kept free of any warp types so the decision can be tested on its own.
pub fn authenticate(
    auth_header: Option<&str>,
    token_manager: &TokenManager,
) -> Result<Identity, AuthError> {
    let header = match auth_header {
        Some(h) if !h.trim().is_empty() => h,
        _ => return Err(AuthError::Missing),
    };

    match extract_bearer_token(header) {
        Some(token) => token_manager.identity(token),
        // "Bearer" with nothing after it carries no token at all
        None if is_bearer_scheme(header) => Err(AuthError::Missing),
        None => Err(AuthError::Invalid(
            "Authorization header must use the Bearer scheme".to_string(),
        )),
    }
}

/// Filter that rejects unauthenticated requests and extracts the caller's identity
pub fn with_auth(
    token_manager: Arc<TokenManager>,
) -> impl Filter<Extract = (Identity,), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization").and_then(move |header: Option<String>| {
        let token_manager = token_manager.clone();
        async move {
            match authenticate(header.as_deref(), &token_manager) {
                Ok(identity) => {
                    log::debug!("Authenticated request for {}", identity.username);
                    Ok(identity)
                }
                Err(e) => {
                    log::warn!("Rejected unauthenticated request: {}", e);
                    Err(warp::reject::custom(UserDirectoryError::from(e)))
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::Claims;
    use std::time::Duration;

    fn manager() -> TokenManager {
        TokenManager::new("filter-test-key-0123456789-abcdefghij", Duration::from_secs(60))
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(authenticate(None, &manager()), Err(AuthError::Missing));
        assert_eq!(authenticate(Some("  "), &manager()), Err(AuthError::Missing));
    }

    #[test]
    fn test_bearer_without_token_is_missing() {
        for header in ["Bearer", "Bearer ", "bearer   "] {
            assert_eq!(authenticate(Some(header), &manager()), Err(AuthError::Missing), "{:?}", header);
        }
    }

    #[test]
    fn test_wrong_scheme_is_invalid() {
        let result = authenticate(Some("Basic dXNlcjpwdw=="), &manager());
        assert!(matches!(result, Err(AuthError::Invalid(_))));
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let tm = manager();
        let token = tm
            .generate_token(&Claims::new("test".to_string(), Duration::from_secs(60)))
            .unwrap();
        let header = format!("Bearer {}", token);

        let identity = authenticate(Some(header.as_str()), &tm).unwrap();
        assert_eq!(identity.username, "test");
    }

    #[tokio::test]
    async fn test_filter_rejects_without_header() {
        let filter = with_auth(Arc::new(manager()));
        let rejection = warp::test::request().filter(&filter).await.unwrap_err();

        let err = rejection.find::<UserDirectoryError>().unwrap();
        assert!(matches!(err, UserDirectoryError::Auth(AuthError::Missing)));
    }

    #[tokio::test]
    async fn test_filter_extracts_identity() {
        let tm = Arc::new(manager());
        let token = tm
            .generate_token(&Claims::new("bob".to_string(), Duration::from_secs(60)))
            .unwrap();

        let identity = warp::test::request()
            .header("authorization", format!("Bearer {}", token))
            .filter(&with_auth(tm))
            .await
            .unwrap();
        assert_eq!(identity.username, "bob");
    }
}
