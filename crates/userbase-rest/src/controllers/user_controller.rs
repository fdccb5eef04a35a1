//! User CRUD controller.
//!
//! Every handler answers 404 `{"message": "user not found"}` for a missing
//! user and 500 with a fixed message for any other failure, including
//! malformed bodies and constraint violations.

use crate::{
    extractors::PaginationQuery,
    responses::{created, message, ok, ApiResult, AppError, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use userbase_core::{Entity, NewUser, PageRequest, User, UserbaseError};
use utoipa::ToSchema;
use validator::Validate;

const CREATE_FAILED: &str = "error creating user";
const LIST_FAILED: &str = "error getting users";
const GET_FAILED: &str = "error getting user";
const UPDATE_FAILED: &str = "error updating user";
const DELETE_FAILED: &str = "error deleting user";

/// Body of `POST /user` and `PUT /user/{id}`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    /// Display name, at most 30 characters.
    #[validate(length(max = 30))]
    pub username: String,
    /// Email address, at most 50 characters, unique.
    #[validate(length(max = 50))]
    pub email: String,
}

impl From<UserPayload> for NewUser {
    fn from(payload: UserPayload) -> Self {
        NewUser::new(payload.username, payload.email)
    }
}

/// Body of `GET /users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    /// Users on the requested page.
    #[schema(value_type = Vec<User>)]
    pub users: Vec<Value>,
    /// `ceil(total / per_page)`.
    pub total_pages: u64,
    /// The page that was served.
    pub current_page: u32,
}

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route("/user/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Decodes and validates a JSON body into a draft.
fn parse_payload(body: Result<Json<UserPayload>, JsonRejection>) -> Result<NewUser, UserbaseError> {
    let Json(payload) = body.map_err(|rejection| UserbaseError::validation(rejection.body_text()))?;
    payload
        .validate()
        .map_err(|errors| UserbaseError::validation(errors.to_string()))?;
    Ok(payload.into())
}

/// Resolves the `{id}` segment; a non-integer id addresses no user.
fn parse_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::not_found(User::NAME))
}

/// Loads the addressed user or answers 404.
async fn load_user(state: &AppState, id: i64, failure: &'static str) -> ApiResult<User> {
    state
        .users
        .get_by_id(id)
        .await
        .map_err(AppError::failed(failure))?
        .ok_or(AppError::not_found(User::NAME))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 500, description = "Invalid body, duplicate email, or storage failure", body = MessageResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let draft = parse_payload(body).map_err(AppError::failed(CREATE_FAILED))?;
    debug!("Create user request: {}", draft.username);

    state
        .users
        .create(draft)
        .await
        .map_err(AppError::failed(CREATE_FAILED))?;

    Ok(created(MessageResponse::new("user created")))
}

/// List users one page at a time.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of users", body = UserListResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> ApiResult<(StatusCode, Json<UserListResponse>)> {
    let request: PageRequest = query.map(|Query(q)| q).unwrap_or_default().into();
    debug!(
        "List users request: page {}, per_page {}",
        request.page, request.per_page
    );

    let page = state
        .users
        .get_all(request)
        .await
        .map_err(AppError::failed(LIST_FAILED))?;

    let total_pages = page.total_pages();
    let current_page = page.page;
    let users = page.into_iter().map(|user| user.to_json()).collect();

    Ok(ok(UserListResponse {
        users,
        total_pages,
        current_page,
    }))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = parse_id(id)?;
    debug!("Get user request: {}", id);

    let user = load_user(&state, id, GET_FAILED).await?;
    Ok(ok(user.to_json()))
}

/// Overwrite a user's username and email.
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "The updated user", body = User),
        (status = 404, description = "No such user", body = MessageResponse),
        (status = 500, description = "Invalid body, duplicate email, or storage failure", body = MessageResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UserPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = parse_id(id)?;
    debug!("Update user request: {}", id);

    let mut user = load_user(&state, id, UPDATE_FAILED).await?;
    let changes = parse_payload(body).map_err(AppError::failed(UPDATE_FAILED))?;
    user.apply(changes);

    let updated = state
        .users
        .update(&user)
        .await
        .map_err(AppError::failed_unless_missing(UPDATE_FAILED))?;

    Ok(ok(updated.to_json()))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "No such user", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let id = parse_id(id)?;
    debug!("Delete user request: {}", id);

    let user = load_user(&state, id, DELETE_FAILED).await?;
    state
        .users
        .delete(&user)
        .await
        .map_err(AppError::failed_unless_missing(DELETE_FAILED))?;

    Ok(message("user deleted"))
}
