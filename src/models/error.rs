use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::dto::Message;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Message>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(Message::new(message)),
        }
    }

    /// 404 for an id with no corresponding live record.
    pub fn not_found(id: i32) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            &format!("User with ID {id} not found"),
        )
    }

    /// 400 listing the violated shape constraints.
    pub fn bad_request(violations: &[String]) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &violations.join("; "))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}
