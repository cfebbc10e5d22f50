//! HTTP route composition
//!
//! Public routes: `POST /login`, `GET /health`, `GET /swagger.json`.
//! Everything under `/users` is wrapped by the bearer auth filter, which runs
//! after path/method matching and before the body is read.

use serde::de::DeserializeOwned;
use std::convert::Infallible;
use warp::{Filter, Rejection, Reply};

use crate::auth::with_auth;
use crate::constants::{API_DOC_PATH, HEALTH_PATH, LOGIN_PATH, MAX_BODY_BYTES, USERS_PATH};
use crate::core::AppContext;
use crate::handlers::schemas::{CreateUserRequest, LoginRequest};
use crate::handlers::{self, handle_rejection};
use crate::security::api_security_headers;

/// Builds the full service: routes, error recovery, security headers and access log
pub fn routes(ctx: AppContext) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let auth = with_auth(ctx.token_manager());

    let health = warp::path(HEALTH_PATH)
        .and(warp::path::end())
        .and(warp::get())
        .and(with_context(ctx.clone()))
        .and_then(handlers::health::health);

    let api_doc = warp::path(API_DOC_PATH)
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&handlers::api_doc::api_document()));

    let login = warp::path(LOGIN_PATH)
        .and(warp::path::end())
        .and(warp::post())
        .and(login_body())
        .and(with_context(ctx.clone()))
        .and_then(handlers::auth::login);

    let list_users = users_root()
        .and(warp::get())
        .and(auth.clone())
        .and(with_context(ctx.clone()))
        .and_then(handlers::users::list_users);

    let create_user = users_root()
        .and(warp::post())
        .and(auth.clone())
        .and(json_body::<CreateUserRequest>())
        .and(with_context(ctx.clone()))
        .and_then(handlers::users::create_user);

    let get_user = user_by_id()
        .and(warp::get())
        .and(auth.clone())
        .and(with_context(ctx.clone()))
        .and_then(handlers::users::get_user);

    let delete_user = user_by_id()
        .and(warp::delete())
        .and(auth)
        .and(with_context(ctx))
        .and_then(handlers::users::delete_user);

    health
        .or(api_doc)
        .or(login)
        .or(list_users)
        .or(create_user)
        .or(get_user)
        .or(delete_user)
        .recover(handle_rejection)
        .with(api_security_headers())
        .with(warp::log("user_directory::http"))
}

// Helper function to include the service context in request
fn with_context(ctx: AppContext) -> impl Filter<Extract = (AppContext,), Error = Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}

/// `/users` and `/users/`
fn users_root() -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::path(USERS_PATH).and(warp::path::end())
}

/// `/users/{id}`
fn user_by_id() -> impl Filter<Extract = (i64,), Error = Rejection> + Clone {
    warp::path(USERS_PATH)
        .and(warp::path::param::<i64>())
        .and(warp::path::end())
}

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

/// Login accepts either a JSON or a form-encoded body
fn login_body() -> impl Filter<Extract = (LoginRequest,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(
        warp::body::json::<LoginRequest>()
            .or(warp::body::form::<LoginRequest>())
            .unify(),
    )
}
