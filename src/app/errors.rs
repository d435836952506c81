use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::DefaultApiError;

    #[test]
    fn internal_server_error_maps_to_500() {
        let error = DefaultApiError::InternalServerError.value();

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "An internal server error occurred.");
    }
}
