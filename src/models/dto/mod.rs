pub mod health;
pub mod message;
pub mod user;
pub use health::HealthResponse;
pub use message::Message;
pub use user::*;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    Message,
    HealthResponse,
    NewUser,
    UpdateUser,
    UserResponse,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
