//! Axum extractor for the acting user

use crate::{ApiError, AppState};

use amity_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The authenticated caller.
///
/// Read from the `X-User-Id` header, which must carry the UUID of a
/// registered user. Anything else is rejected with `401`.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value =
                parts
                    .headers
                    .get(USER_ID_HEADER)
                    .ok_or_else(|| ApiError::Unauthorized {
                        message: format!("Missing {} header", USER_ID_HEADER),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

            let uuid = header_value
                .to_str()
                .ok()
                .and_then(|value| Uuid::parse_str(value.trim()).ok())
                .ok_or_else(|| {
                    log::warn!("Invalid UUID in {} header", USER_ID_HEADER);
                    ApiError::Unauthorized {
                        message: format!("Invalid {} header", USER_ID_HEADER),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;

            let repo = UserRepository::new(state.pool.clone());
            if repo.find_by_id(uuid).await?.is_none() {
                log::warn!("Unknown user in {} header: {}", USER_ID_HEADER, uuid);
                return Err(ApiError::Unauthorized {
                    message: "Unknown user".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            log::debug!("Authenticated request as user {}", uuid);
            Ok(UserId(uuid))
        }
    }
}
