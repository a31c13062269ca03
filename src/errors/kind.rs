use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Standard HTTP error kinds the API can raise and document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpErrorKind {
    /// Malformed or invalid input
    BadRequest,

    /// Missing or invalid credentials
    Unauthorized,

    /// Authenticated but not allowed
    Forbidden,

    /// Resource does not exist
    NotFound,

    /// HTTP method not supported on this route
    MethodNotAllowed,

    /// Operation not implemented
    NotImplemented,

    /// Client took too long to send the request
    RequestTimeout,

    /// Resource state conflict (duplicates, concurrent edits)
    Conflict,

    /// Resource permanently removed
    Gone,

    /// Conditional request precondition failed
    PreconditionFailed,

    /// Request body too large
    PayloadTooLarge,

    /// Content type not accepted
    UnsupportedMediaType,

    /// Well-formed but semantically invalid input
    UnprocessableEntity,

    /// Unexpected server failure
    InternalServerError,

    /// Dependency or server temporarily unavailable
    ServiceUnavailable,

    /// Upstream did not answer in time
    GatewayTimeout,

    /// HTTP protocol version not supported
    HttpVersionNotSupported,
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl HttpErrorKind {
    /// Every kind, in documentation order
    pub const ALL: [HttpErrorKind; 17] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::NotImplemented,
        Self::RequestTimeout,
        Self::Conflict,
        Self::Gone,
        Self::PreconditionFailed,
        Self::PayloadTooLarge,
        Self::UnsupportedMediaType,
        Self::UnprocessableEntity,
        Self::InternalServerError,
        Self::ServiceUnavailable,
        Self::GatewayTimeout,
        Self::HttpVersionNotSupported,
    ];

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::NotImplemented => 501,
            Self::RequestTimeout => 408,
            Self::Conflict => 409,
            Self::Gone => 410,
            Self::PreconditionFailed => 412,
            Self::PayloadTooLarge => 413,
            Self::UnsupportedMediaType => 415,
            Self::UnprocessableEntity => 422,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
            Self::GatewayTimeout => 504,
            Self::HttpVersionNotSupported => 505,
        }
    }

    /// Canonical reason phrase, also used as the default message
    pub fn description(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::NotImplemented => "Not Implemented",
            Self::RequestTimeout => "Request Timeout",
            Self::Conflict => "Conflict",
            Self::Gone => "Gone",
            Self::PreconditionFailed => "Precondition Failed",
            Self::PayloadTooLarge => "Payload Too Large",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::InternalServerError => "Internal Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
            Self::GatewayTimeout => "Gateway Timeout",
            Self::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }

    /// Name of the exception type raised for this kind
    pub fn exception_name(&self) -> &'static str {
        match self {
            Self::BadRequest => "BadRequestException",
            Self::Unauthorized => "UnauthorizedException",
            Self::Forbidden => "ForbiddenException",
            Self::NotFound => "NotFoundException",
            Self::MethodNotAllowed => "MethodNotAllowedException",
            Self::NotImplemented => "NotImplementedException",
            Self::RequestTimeout => "RequestTimeoutException",
            Self::Conflict => "ConflictException",
            Self::Gone => "GoneException",
            Self::PreconditionFailed => "PreconditionFailedException",
            Self::PayloadTooLarge => "PayloadTooLargeException",
            Self::UnsupportedMediaType => "UnsupportedMediaTypeException",
            Self::UnprocessableEntity => "UnprocessableEntityException",
            Self::InternalServerError => "InternalServerErrorException",
            Self::ServiceUnavailable => "ServiceUnavailableException",
            Self::GatewayTimeout => "GatewayTimeoutException",
            Self::HttpVersionNotSupported => "HttpVersionNotSupportedException",
        }
    }

    /// Reverse lookup by status code
    pub fn from_status(status: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.status_code() == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_status_codes_are_unique_errors() {
        let statuses: HashSet<u16> = HttpErrorKind::ALL.iter().map(|k| k.status_code()).collect();
        assert_eq!(statuses.len(), HttpErrorKind::ALL.len());
        assert!(statuses.iter().all(|s| (400..=599).contains(s)));
    }

    #[test]
    fn test_from_status() {
        assert_eq!(HttpErrorKind::from_status(404), Some(HttpErrorKind::NotFound));
        assert_eq!(HttpErrorKind::from_status(505), Some(HttpErrorKind::HttpVersionNotSupported));
        assert_eq!(HttpErrorKind::from_status(429), None);
        assert_eq!(HttpErrorKind::from_status(200), None);
    }

    #[test]
    fn test_display_uses_reason_phrase() {
        assert_eq!(HttpErrorKind::UnsupportedMediaType.to_string(), "Unsupported Media Type");
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&HttpErrorKind::PayloadTooLarge).unwrap();
        assert_eq!(json, "\"PAYLOAD_TOO_LARGE\"");
    }
}
