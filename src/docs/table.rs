use crate::errors::HttpErrorKind;

/// One row of the exception-to-documentation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionDocEntry {
    /// Base error kind the row documents
    pub kind: HttpErrorKind,
    /// Name of the response decorator this row stands for
    pub decorator: &'static str,
    /// Description used when nothing more specific is known
    pub default_description: &'static str,
}

impl ExceptionDocEntry {
    const fn new(
        kind: HttpErrorKind,
        decorator: &'static str,
        default_description: &'static str,
    ) -> Self {
        Self {
            kind,
            decorator,
            default_description,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

/// Standard error kinds that get generated documentation, in output order
pub static EXCEPTION_DOC_MAP: [ExceptionDocEntry; 17] = [
    ExceptionDocEntry::new(HttpErrorKind::BadRequest, "ApiBadRequestResponse", "Bad Request"),
    ExceptionDocEntry::new(HttpErrorKind::Unauthorized, "ApiUnauthorizedResponse", "Unauthorized"),
    ExceptionDocEntry::new(HttpErrorKind::Forbidden, "ApiForbiddenResponse", "Forbidden"),
    ExceptionDocEntry::new(HttpErrorKind::NotFound, "ApiNotFoundResponse", "Not Found"),
    ExceptionDocEntry::new(
        HttpErrorKind::MethodNotAllowed,
        "ApiMethodNotAllowedResponse",
        "Method Not Allowed",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::NotImplemented,
        "ApiNotImplementedResponse",
        "Not Implemented",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::RequestTimeout,
        "ApiRequestTimeoutResponse",
        "Request Timeout",
    ),
    ExceptionDocEntry::new(HttpErrorKind::Conflict, "ApiConflictResponse", "Conflict"),
    ExceptionDocEntry::new(HttpErrorKind::Gone, "ApiGoneResponse", "Gone"),
    ExceptionDocEntry::new(
        HttpErrorKind::PreconditionFailed,
        "ApiPreconditionFailedResponse",
        "Precondition Failed",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::PayloadTooLarge,
        "ApiPayloadTooLargeResponse",
        "Payload Too Large",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::UnsupportedMediaType,
        "ApiUnsupportedMediaTypeResponse",
        "Unsupported Media Type",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::UnprocessableEntity,
        "ApiUnprocessableEntityResponse",
        "Unprocessable Entity",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::InternalServerError,
        "ApiInternalServerErrorResponse",
        "Internal Server Error",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::ServiceUnavailable,
        "ApiServiceUnavailableResponse",
        "Service Unavailable",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::GatewayTimeout,
        "ApiGatewayTimeoutResponse",
        "Gateway Timeout",
    ),
    ExceptionDocEntry::new(
        HttpErrorKind::HttpVersionNotSupported,
        "ApiHttpVersionNotSupportedResponse",
        "HTTP Version Not Supported",
    ),
];

/// Table row for a kind
pub fn entry_for_kind(kind: HttpErrorKind) -> &'static ExceptionDocEntry {
    let index = match kind {
        HttpErrorKind::BadRequest => 0,
        HttpErrorKind::Unauthorized => 1,
        HttpErrorKind::Forbidden => 2,
        HttpErrorKind::NotFound => 3,
        HttpErrorKind::MethodNotAllowed => 4,
        HttpErrorKind::NotImplemented => 5,
        HttpErrorKind::RequestTimeout => 6,
        HttpErrorKind::Conflict => 7,
        HttpErrorKind::Gone => 8,
        HttpErrorKind::PreconditionFailed => 9,
        HttpErrorKind::PayloadTooLarge => 10,
        HttpErrorKind::UnsupportedMediaType => 11,
        HttpErrorKind::UnprocessableEntity => 12,
        HttpErrorKind::InternalServerError => 13,
        HttpErrorKind::ServiceUnavailable => 14,
        HttpErrorKind::GatewayTimeout => 15,
        HttpErrorKind::HttpVersionNotSupported => 16,
    };
    &EXCEPTION_DOC_MAP[index]
}

/// Table row documenting a resolved status, if any
pub fn entry_for_status(status: u16) -> Option<&'static ExceptionDocEntry> {
    EXCEPTION_DOC_MAP
        .iter()
        .find(|entry| entry.status_code() == status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::status::status_from_description;

    #[test]
    fn test_descriptions_resolve_to_kind_status() {
        for entry in &EXCEPTION_DOC_MAP {
            assert_eq!(
                status_from_description(entry.default_description),
                entry.status_code(),
                "{} resolves to the wrong status",
                entry.decorator
            );
        }
    }

    #[test]
    fn test_entry_for_kind_is_consistent() {
        for kind in HttpErrorKind::ALL {
            assert_eq!(entry_for_kind(kind).kind, kind);
        }
    }

    #[test]
    fn test_table_follows_kind_order() {
        let kinds: Vec<HttpErrorKind> = EXCEPTION_DOC_MAP.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, HttpErrorKind::ALL.to_vec());
    }

    #[test]
    fn test_entry_for_status() {
        assert_eq!(entry_for_status(404).map(|e| e.decorator), Some("ApiNotFoundResponse"));
        assert!(entry_for_status(429).is_none());
        assert!(entry_for_status(200).is_none());
    }
}
