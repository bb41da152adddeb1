use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{NewUser, UpdateUser, UserResponse},
        Error,
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    create_user_handler,
    list_users_handler,
    get_user_handler,
    update_user_handler,
    delete_user_handler
))]
/// Defines the OpenAPI spec for user endpoints
pub struct UsersApi;

/// Used to group user endpoints together in the OpenAPI documentation
pub const USER_API_GROUP: &str = "USER";

const MIN_PASSWORD_LEN: usize = 8;

/// Builds a router for all the user routes
pub fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_user_handler))
        .route("/", get(list_users_handler))
        .route("/:id", get(get_user_handler))
        .route("/:id", patch(update_user_handler))
        .route("/:id", delete(delete_user_handler))
}

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Checks the shape constraints on a create body and unpacks the required
/// fields, collecting every violation into a single 400 error.
fn validate_new_user(body: NewUser) -> Result<(String, String, String), Error> {
    let mut violations = Vec::new();
    if body.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        violations.push("name must be a non-empty string".to_string());
    }
    match body.email.as_deref() {
        None => violations.push("email is required".to_string()),
        Some(email) if !is_valid_email(email) => {
            violations.push("email must be a valid email address".to_string())
        }
        _ => {}
    }
    match body.password.as_deref() {
        None => violations.push("password is required".to_string()),
        Some(password) if password.len() < MIN_PASSWORD_LEN => violations.push(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        )),
        _ => {}
    }
    match (body.name, body.email, body.password) {
        (Some(name), Some(email), Some(password)) if violations.is_empty() => {
            Ok((name, email, password))
        }
        _ => Err(Error::bad_request(&violations)),
    }
}

/// Checks the shape constraints on whichever fields a partial update provides.
fn validate_update_user(body: &UpdateUser) -> Result<(), Error> {
    let mut violations = Vec::new();
    if body.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        violations.push("name must be a non-empty string".to_string());
    }
    if body.email.as_deref().is_some_and(|e| !is_valid_email(e)) {
        violations.push("email must be a valid email address".to_string());
    }
    if body
        .password
        .as_deref()
        .is_some_and(|p| p.len() < MIN_PASSWORD_LEN)
    {
        violations.push(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::bad_request(&violations))
    }
}

/// Create user handler function
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_API_GROUP,
    request_body = NewUser,
    responses(
        (status = 201, description = "User successfully created", body = UserResponse),
        (status = 400, description = "Request body failed shape validation"),
    )
)]
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewUser>,
) -> Result<impl IntoResponse, Error> {
    let (name, email, password) = validate_new_user(body)?;
    let user = state.store.create_user(name, email, password);
    info!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// List users handler function
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_API_GROUP,
    responses(
        (status = 200, description = "All users in insertion order", body = [UserResponse]),
    )
)]
pub async fn list_users_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let users: Vec<UserResponse> = state
        .store
        .list_users()
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Json(users)
}

/// Get user handler function
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_API_GROUP,
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found"),
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    )
)]
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, Error> {
    let user = state.store.get_user_by_id(id).ok_or_else(|| Error::not_found(id))?;
    Ok(Json(UserResponse::from(user)))
}

/// Update user handler function
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_API_GROUP,
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User successfully updated", body = UserResponse),
        (status = 400, description = "Request body failed shape validation"),
        (status = 404, description = "User not found"),
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    )
)]
pub async fn update_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUser>,
) -> Result<Json<UserResponse>, Error> {
    validate_update_user(&body)?;
    let user = state
        .store
        .update_user(id, body)
        .ok_or_else(|| Error::not_found(id))?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete user handler function
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_API_GROUP,
    responses(
        (status = 204, description = "User successfully deleted"),
        (status = 404, description = "User not found"),
    ),
    params(
        ("id" = i32, Path, description = "User ID")
    )
)]
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !state.store.delete_user(id) {
        return Err(Error::not_found(id));
    }
    info!("Deleted user {id}");
    Ok(StatusCode::NO_CONTENT)
}
