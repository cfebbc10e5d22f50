use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::core::AppContext;

/// `GET /health`: reports whether the user store answers queries
pub async fn health(ctx: AppContext) -> Result<impl Reply, Rejection> {
    if ctx.directory().is_healthy().await {
        Ok(warp::reply::with_status("OK", StatusCode::OK))
    } else {
        Ok(warp::reply::with_status(
            "UNAVAILABLE",
            StatusCode::SERVICE_UNAVAILABLE,
        ))
    }
}
