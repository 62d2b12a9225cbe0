use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use notesapp::NotesError;

/// Errors a handler can return. Every variant renders as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by the store
    Store(NotesError),
    /// The request could not be parsed (body, path or query string)
    Rejection { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(NotesError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(NotesError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Rejection { status, .. } => *status,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Store(NotesError::Validation(msg)) => msg.clone(),
            ApiError::Store(NotesError::NotFound(_)) => "Note not found".to_string(),
            ApiError::Store(err) => err.to_string(),
            ApiError::Rejection { message, .. } => message.clone(),
        }
    }
}

impl From<NotesError> for ApiError {
    fn from(err: NotesError) -> Self {
        ApiError::Store(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        } else {
            tracing::debug!(%status, error = %message, "request rejected");
        }

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
