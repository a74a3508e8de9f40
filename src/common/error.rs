use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    Unauthorized,
    DecodingRequestFailed,

    AuthInvalidCredentials,
    AuthMissingCredentials,

    UsersNotFound,
    UsersUsernameTaken,

    MessagesNotFound,
    MessagesMissingField,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::Unauthorized => "unauthorized",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::AuthInvalidCredentials => "auth.invalid_credentials",
            AppError::AuthMissingCredentials => "auth.missing_credentials",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersUsernameTaken => "users.username_taken",

            AppError::MessagesNotFound => "messages.not_found",
            AppError::MessagesMissingField => "messages.missing_field",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::Unauthorized => "You are not authorized to perform this action.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::AuthInvalidCredentials => "Invalid username or password.",
            AppError::AuthMissingCredentials => "Username and password are required.",

            AppError::UsersNotFound => "This user does not exist.",
            AppError::UsersUsernameTaken => "This username is already taken.",

            AppError::MessagesNotFound => "This message does not exist.",
            AppError::MessagesMissingField => "Missing a required field.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::AuthMissingCredentials
            | AppError::UsersUsernameTaken
            | AppError::MessagesMissingField => StatusCode::BAD_REQUEST,

            AppError::Unauthorized | AppError::AuthInvalidCredentials => StatusCode::UNAUTHORIZED,

            AppError::UsersNotFound | AppError::MessagesNotFound => StatusCode::NOT_FOUND,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_failures_are_401() {
        assert_eq!(
            AppError::Unauthorized.http_status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::AuthInvalidCredentials.http_status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn invalid_input_is_400() {
        assert_eq!(
            AppError::DecodingRequestFailed.http_status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MessagesMissingField.http_status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UsersUsernameTaken.http_status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_resources_are_404() {
        assert_eq!(
            AppError::UsersNotFound.http_status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MessagesNotFound.http_status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn error_body_carries_code_and_message() {
        let (status, body) = AppError::UsersNotFound.response_parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json = serde_json::to_value(&body.0).unwrap();
        assert_eq!(json["code"], "users.not_found");
        assert_eq!(json["message"], "This user does not exist.");
    }
}
