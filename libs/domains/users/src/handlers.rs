use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::{AppError, Envelope, EnvelopeJson, errors::handlers::not_found, messages};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, update_user, delete_user),
    components(schemas(User, CreateUserRequest, UpdateUserRequest)),
    tags(
        (name = "Users", description = "In-memory user records. Every body is wrapped in {status, message, data}.")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
///
/// Methods not listed here answer 404 `not Found`, not 405. HEAD is
/// registered explicitly so it does not fall through to the GET handlers.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/users",
            get(list_users)
                .head(not_found)
                .post(create_user)
                .fallback(not_found),
        )
        .route(
            "/users/{id}",
            get(get_user)
                .head(not_found)
                .put(update_user)
                .delete(delete_user)
                .fallback(not_found),
        )
        .with_state(shared_service)
}

/// Path IDs must be plain ASCII digits; anything else cannot name a user.
fn parse_id(raw: &str) -> Result<u64, AppError> {
    let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());

    digits_only
        .then(|| raw.parse().ok())
        .flatten()
        .ok_or_else(|| {
            tracing::debug!(id = raw, "Non-numeric user ID in path");
            AppError::NotFound
        })
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = [User]),
        (status = 500, description = "Repository failure")
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Result<Envelope<Vec<User>>, AppError> {
    let users = service.get_all_users().await?;
    Ok(Envelope::data(StatusCode::OK, users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created with its assigned ID", body = User),
        (status = 400, description = "Undecodable body or missing field"),
        (status = 500, description = "Repository failure")
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    EnvelopeJson(input): EnvelopeJson<CreateUserRequest>,
) -> Result<Envelope<User>, AppError> {
    let user = service
        .create_user(input.first_name, input.last_name, input.email)
        .await?;
    Ok(Envelope::data(StatusCode::CREATED, user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this ID")
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Envelope<User>, AppError> {
    let user = service.get_user_by_id(parse_id(&id)?).await?;
    Ok(Envelope::data(StatusCode::OK, user))
}

/// Replace a user record
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User replaced", body = User),
        (status = 400, description = "Undecodable body or missing field"),
        (status = 404, description = "No user with this ID")
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    EnvelopeJson(input): EnvelopeJson<UpdateUserRequest>,
) -> Result<Envelope<User>, AppError> {
    let user = input.into_user(parse_id(&id)?);
    service.update_user(user.clone()).await?;
    Ok(Envelope::data(StatusCode::OK, user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "No user with this ID")
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Envelope<()>, AppError> {
    service.delete_user(parse_id(&id)?).await?;
    Ok(Envelope::message(StatusCode::OK, messages::SUCCESS))
}
