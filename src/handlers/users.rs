//! User directory handlers. All of them sit behind the bearer auth filter.

use warp::http::StatusCode;
use warp::{Rejection, Reply};

use super::reject;
use super::schemas::CreateUserRequest;
use crate::auth::Identity;
use crate::core::AppContext;

/// `GET /users/`
pub async fn list_users(identity: Identity, ctx: AppContext) -> Result<impl Reply, Rejection> {
    log::debug!("{} listing users", identity.username);
    let users = ctx.directory().list_users().await.map_err(reject)?;
    Ok(warp::reply::json(&users))
}

/// `POST /users/`
pub async fn create_user(
    identity: Identity,
    request: CreateUserRequest,
    ctx: AppContext,
) -> Result<impl Reply, Rejection> {
    let new_user = request.validate().map_err(reject)?;
    log::debug!("{} creating user {}", identity.username, new_user.username());

    let user = ctx.directory().create_user(new_user).await.map_err(reject)?;
    Ok(warp::reply::with_status(
        warp::reply::json(&user),
        StatusCode::CREATED,
    ))
}

/// `GET /users/{id}`
pub async fn get_user(
    user_id: i64,
    _identity: Identity,
    ctx: AppContext,
) -> Result<impl Reply, Rejection> {
    let user = ctx.directory().get_user(user_id).await.map_err(reject)?;
    Ok(warp::reply::json(&user))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    user_id: i64,
    identity: Identity,
    ctx: AppContext,
) -> Result<impl Reply, Rejection> {
    log::debug!("{} deleting user {}", identity.username, user_id);
    ctx.directory().delete_user(user_id).await.map_err(reject)?;
    Ok(warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT))
}
