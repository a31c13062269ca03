use serde::Serialize;

use crate::errors::{ExceptionResponse, HttpError};

/// Best-effort view of an exception's status, message and reason
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExceptionInfo {
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Read `{status_code, message, error}` from an exception instance.
///
/// Missing pieces come back as `None`. For object payloads `error` is taken
/// from the `error` key and falls back to `message`; text payloads carry no
/// `error`.
pub fn extract_info<E: HttpError + ?Sized>(exception: &E) -> ExceptionInfo {
    let status_code = exception.status().or_else(|| exception.status_field());
    let error = exception.response().and_then(|response| match &response {
        ExceptionResponse::Text(_) => None,
        ExceptionResponse::Object(_) => response
            .field("error")
            .or_else(|| response.field("message"))
            .map(str::to_string),
    });

    ExceptionInfo {
        status_code,
        message: exception.message(),
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConflictException, HttpException, NotFoundException};
    use serde_json::{json, Map, Value};

    /// Only exposes a raw status field and a message
    struct LegacyError;

    impl HttpError for LegacyError {
        fn status_field(&self) -> Option<u16> {
            Some(410)
        }

        fn message(&self) -> Option<String> {
            Some("Gone for good".to_string())
        }
    }

    struct Opaque;

    impl HttpError for Opaque {
        fn message(&self) -> Option<String> {
            None
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_text_payload_has_no_error() {
        let exception = HttpException::new(400, "plain text");
        let info = extract_info(&exception);
        assert_eq!(info.status_code, Some(400));
        assert_eq!(info.message.as_deref(), Some("plain text"));
        assert_eq!(info.error, None);
    }

    #[test]
    fn test_message_only_object_uses_message_as_error() {
        let exception = HttpException::new(
            400,
            ExceptionResponse::Object(object(json!({ "message": "X" }))),
        );
        assert_eq!(extract_info(&exception).error.as_deref(), Some("X"));
    }

    #[test]
    fn test_error_key_wins_over_message() {
        let exception = HttpException::new(
            400,
            ExceptionResponse::Object(object(json!({ "message": "X", "error": "Y" }))),
        );
        assert_eq!(extract_info(&exception).error.as_deref(), Some("Y"));
    }

    #[test]
    fn test_standard_exceptions() {
        let info = extract_info(&NotFoundException::default());
        assert_eq!(info.status_code, Some(404));
        assert_eq!(info.message.as_deref(), Some("Not Found"));
        assert_eq!(info.error.as_deref(), Some("Not Found"));

        let info = extract_info(&ConflictException::new("Duplicate name"));
        assert_eq!(info.message.as_deref(), Some("Duplicate name"));
        assert_eq!(info.error.as_deref(), Some("Conflict"));
    }

    #[test]
    fn test_status_field_fallback() {
        let info = extract_info(&LegacyError);
        assert_eq!(info.status_code, Some(410));
        assert_eq!(info.error, None);
    }

    #[test]
    fn test_nothing_available() {
        assert_eq!(extract_info(&Opaque), ExceptionInfo::default());
    }
}
