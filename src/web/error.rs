//! Maps service errors onto HTTP responses.

use crate::{errors::Error, web::templates::error_page};
use axum::{
    http::{StatusCode, header},
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use tracing::{error, warn};

const BASIC_CHALLENGE: &str = "Basic realm=\"Car Listings staff\", charset=\"UTF-8\"";

impl Error {
    /// HTTP status reported for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::CarNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::Config { .. }
            | Self::Database(_)
            | Self::Io(_)
            | Self::CarLookup { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Server-side details stay in the log.
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Something went wrong while handling this request.".to_string()
        } else {
            warn!("Request rejected ({}): {}", status.as_u16(), self);
            self.to_string()
        };

        let body = Html(error_page(status, &message));
        if matches!(self, Self::Unauthenticated) {
            // Basic first so browsers show their login prompt
            let challenges = AppendHeaders([
                (header::WWW_AUTHENTICATE, BASIC_CHALLENGE),
                (header::WWW_AUTHENTICATE, "Bearer"),
            ]);
            (status, challenges, body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let not_found = Error::CarNotFound {
            id: "9".to_string(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        let lookup = Error::CarLookup {
            car_id: "9".to_string(),
        };
        assert_eq!(lookup.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(Error::Unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(Error::AccessDenied.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_unauthenticated_offers_basic_and_bearer() {
        let response = Error::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let challenges: Vec<_> = response
            .headers()
            .get_all(header::WWW_AUTHENTICATE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect();
        assert_eq!(challenges, vec![BASIC_CHALLENGE, "Bearer"]);
    }
}
