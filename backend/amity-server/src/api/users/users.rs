//! User directory REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateUserRequest, UserResponse};

use amity_core::User;
use amity_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

const MAX_USERNAME_LENGTH: usize = 150;
const MAX_EMAIL_LENGTH: usize = 254;

/// POST /users/
///
/// Register a user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(req) = payload?;

    let username = req.username.trim().to_string();
    if username.is_empty() {
        return Err(ApiError::Validation {
            message: "Username cannot be empty".to_string(),
            field: Some("username".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(ApiError::Validation {
            message: format!(
                "Username must be at most {} characters",
                MAX_USERNAME_LENGTH
            ),
            field: Some("username".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let email = req.email.trim().to_string();
    if email.len() > MAX_EMAIL_LENGTH || !is_plausible_email(&email) {
        return Err(ApiError::Validation {
            message: format!("Invalid email address: '{}'", email),
            field: Some("email".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let user = User::new(email, username);

    let repo = UserRepository::new(state.pool.clone());
    match repo.create(&user).await {
        Ok(()) => {}
        Err(e) if e.is_unique_violation() => {
            log::debug!("Duplicate user registration: {}", e);
            return Err(ApiError::Conflict {
                message: "A user with this email or username already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(e.into()),
    }

    log::info!("Registered user {} ({})", user.id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// GET /users/{id}/
///
/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
