//! OpenAPI documentation configuration.

use crate::controllers::{
    health_controller::HealthResponse,
    user_controller::{UserListResponse, UserPayload},
};
use crate::responses::MessageResponse;
use userbase_core::User;
use utoipa::OpenApi;

/// OpenAPI documentation for the Userbase API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userbase API",
        version = "0.1.0",
        description = "User CRUD service",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::health_controller::test_route,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            User,
            UserPayload,
            UserListResponse,
            MessageResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Liveness and health endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in ["/user", "/users", "/user/{id}", "/test", "/health"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
