//! Staff-only access control for the moderation pages.
//!
//! Callers authenticate either with `Authorization: Bearer <token>` or, from a
//! browser, with HTTP Basic using their user name and token as the password.
//! The token must belong to a configured user whose `is_staff` flag is set. The
//! check runs before the wrapped handler, so rejected callers never see
//! moderation data.

use crate::{
    config::users::UserConfig,
    errors::{Error, Result},
    web::AppState,
};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, warn};

/// Credentials carried by an `Authorization` header
#[derive(Debug, PartialEq, Eq)]
pub enum Credentials {
    /// `Bearer <token>`
    Bearer(String),
    /// `Basic base64(<name>:<token>)`
    Basic {
        /// User name typed into the browser prompt
        name: String,
        /// The user's token, sent as the password
        token: String,
    },
}

impl Credentials {
    /// Reads credentials from the request headers. Malformed headers count as
    /// missing.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(Self::Bearer(token.trim().to_string()));
        }
        let encoded = value.strip_prefix("Basic ")?;
        let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (name, token) = decoded.split_once(':')?;
        Some(Self::Basic {
            name: name.to_string(),
            token: token.to_string(),
        })
    }

    fn authenticate<'a>(&self, state: &'a AppState) -> Option<&'a UserConfig> {
        match self {
            Self::Bearer(token) => state.users.authenticate(token),
            Self::Basic { name, token } => state
                .users
                .authenticate(token)
                .filter(|user| &user.name == name),
        }
    }
}

/// Middleware that requires a staff member's credentials.
///
/// # Errors
/// Returns `Error::Unauthenticated` when credentials are missing or unknown and
/// `Error::AccessDenied` when they belong to a non-staff user.
pub async fn require_staff(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let user = Credentials::from_headers(req.headers())
        .ok_or(Error::Unauthenticated)?
        .authenticate(&state)
        .ok_or(Error::Unauthenticated)?;
    if !user.is_staff {
        warn!("Non-staff user {} tried to reach {}", user.name, req.uri());
        return Err(Error::AccessDenied);
    }

    debug!("Staff member {} authorised for {}", user.name, req.uri());
    Ok(next.run(req).await)
}
