// Copyright 2023. The polls authors all rights reserved.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::{debug, error};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxDynError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("the requested path {path} was not found on this server")]
    NotFound { path: String },
    #[error("unhandled exception")]
    Unhandled(BoxDynError),
}

impl Error {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Error::NotFound { path: _ } => StatusCode::NOT_FOUND,
            Error::Unhandled(_err) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::NotFound { ref path } => debug!("not found: {path}"),
            Error::Unhandled(ref err) => error!("unhandled error: {err}"),
        }

        #[derive(Serialize)]
        struct ErrorResponse {
            message: String,
        }

        (self.status(), Json(ErrorResponse { message: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = Error::NotFound { path: "/polls/abc/".to_string() };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "the requested path /polls/abc/ was not found on this server");
    }

    #[test]
    fn unhandled_maps_to_500() {
        let err = Error::Unhandled("boom".into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "unhandled exception");
    }
}
