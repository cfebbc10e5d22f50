//! Request handlers for the HTTP endpoints

pub mod api_doc;
pub mod auth;
pub mod health;
pub mod rejection;
pub mod schemas;
pub mod users;

pub use rejection::handle_rejection;

use crate::error::UserDirectoryError;

/// Turns a crate error into a warp rejection for `handle_rejection` to render
pub(crate) fn reject(err: UserDirectoryError) -> warp::Rejection {
    warp::reject::custom(err)
}
