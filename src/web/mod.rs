
mod error;
pub mod mw_res_map;
pub mod rest;

pub use self::error::{ClientError, Error, Result};

use crate::model::ModelManager;
use axum::{middleware, Router};
use mw_res_map::mw_response_map;

pub fn app(mm: ModelManager) -> Router {
    Router::new()
        .merge(rest::routes(mm))
        .layer(middleware::map_response(mw_response_map))
}
