//! Login handler

use warp::{Rejection, Reply};

use super::reject;
use super::schemas::{LoginRequest, LoginResponse};
use crate::core::AppContext;

/// `POST /login`: issues an access token for any non-empty username/password.
///
/// Credentials are not checked against any store. This is an authentication
/// stub inherited from the service contract, not a security boundary.
pub async fn login(request: LoginRequest, ctx: AppContext) -> Result<impl Reply, Rejection> {
    let credentials = request.validate().map_err(reject)?;
    let access_token = ctx
        .token_manager()
        .issue_token(&credentials)
        .map_err(reject)?;

    log::info!("Issued access token for {}", credentials.username());
    Ok(warp::reply::json(&LoginResponse { access_token }))
}
