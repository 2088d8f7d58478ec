//! Error translation to client payloads.

use actix_web::{HttpResponse, ResponseError};
use repolist_config::MessagesConfig;
use repolist_ghapi_interface::{ApiError, QueryParameter};
use repolist_models::ErrorMessage;

use crate::ServerError;

/// Convert an error to the payload sent back to the client.
pub fn translate_error(messages: &MessagesConfig, error: &ServerError) -> ErrorMessage {
    let message = match error {
        ServerError::MissingHeader { .. } => messages.missing_header.clone(),
        ServerError::NotAcceptable => messages.not_acceptable.clone(),
        ServerError::InvalidQuery { .. } => messages.invalid_query.clone(),
        _ => match error.api_error() {
            Some(ApiError::NotFound { .. }) => messages.user_not_found.clone(),
            Some(ApiError::InvalidParameter {
                parameter: QueryParameter::Sort,
                ..
            }) => messages.wrong_sort_param.clone(),
            Some(ApiError::InvalidParameter {
                parameter: QueryParameter::Direction,
                ..
            }) => messages.wrong_direction_param.clone(),
            Some(ApiError::UpstreamError { message, .. }) => {
                format!("{}{}", messages.unexpected_error, message)
            }
            Some(e) => format!("{}{}", messages.unexpected_error, e),
            None => format!("{}{}", messages.unexpected_error, error),
        },
    };

    ErrorMessage::new(error.status_code().as_u16(), message)
}

/// Build the HTTP response of an error, status and body aligned.
pub fn error_response(messages: &MessagesConfig, error: &ServerError) -> HttpResponse {
    HttpResponse::build(error.status_code()).json(translate_error(messages, error))
}
