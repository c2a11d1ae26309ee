
use crate::{model, web};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::debug;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    InvalidId(String),
    InvalidPage(String),
    InvalidPageSize(String),
    InvalidBody(String),

    Model(model::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        debug!("{:<12} - web::Error {self:?}", "INTO_RES");
        // Status is rewritten by mw_response_map from the error stored here.
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<model::Error> for Error {
    fn from(value: model::Error) -> Self {
        Self::Model(value)
    }
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        use web::Error::*;

        match self {
            InvalidId(..) | InvalidPage(..) | InvalidPageSize(..) | InvalidBody(..) => {
                (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS)
            }
            Model(model::Error::EntityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, ClientError::ENTITY_NOT_FOUND)
            }
        }
    }
}

#[derive(Debug, Clone, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    ENTITY_NOT_FOUND,
    INVALID_PARAMS,
}
