use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::kind::HttpErrorKind;
use crate::docs::instantiate::{Instantiate, InstantiateError};

/// Capability shared by every exception that maps onto an HTTP error.
///
/// Exceptions may be only partially introspectable, so every accessor is
/// optional. The documentation mapper reads them through
/// [`crate::docs::extract_info`].
pub trait HttpError {
    /// Status accessor
    fn status(&self) -> Option<u16> {
        None
    }

    /// Generic status field, consulted when the accessor yields nothing
    fn status_field(&self) -> Option<u16> {
        None
    }

    /// Human-readable message
    fn message(&self) -> Option<String>;

    /// Response payload sent to clients
    fn response(&self) -> Option<ExceptionResponse> {
        None
    }
}

/// Payload carried by an exception: either a bare string or a JSON object
/// shaped like `{ "message": .., "error": .. }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExceptionResponse {
    Text(String),
    Object(Map<String, Value>),
}

impl ExceptionResponse {
    /// Build an object payload
    pub fn object(status: u16, message: impl Into<String>, error: Option<&str>) -> Self {
        let mut map = Map::new();
        map.insert("statusCode".to_string(), Value::from(status));
        map.insert("message".to_string(), Value::String(message.into()));
        if let Some(error) = error {
            map.insert("error".to_string(), Value::String(error.to_string()));
        }
        Self::Object(map)
    }

    /// String value stored under `key`, if this is an object payload
    pub fn field(&self, key: &str) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Object(map) => map.get(key).and_then(Value::as_str),
        }
    }
}

impl From<String> for ExceptionResponse {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ExceptionResponse {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Generic exception carrying an explicit status and payload
#[derive(Debug, Clone, PartialEq)]
pub struct HttpException {
    status: u16,
    response: ExceptionResponse,
}

impl HttpException {
    pub fn new(status: u16, response: impl Into<ExceptionResponse>) -> Self {
        Self {
            status,
            response: response.into(),
        }
    }

    /// Exception for a standard kind, with an optional custom message.
    ///
    /// Without a message the reason phrase becomes the message; with one, the
    /// reason phrase moves to `error`.
    pub fn from_kind(kind: HttpErrorKind, message: Option<&str>) -> Self {
        let status = kind.status_code();
        let response = match message {
            Some(message) => ExceptionResponse::object(status, message, Some(kind.description())),
            None => ExceptionResponse::object(status, kind.description(), None),
        };
        Self { status, response }
    }

    pub fn status_code(&self) -> u16 {
        self.status
    }

    pub fn kind(&self) -> Option<HttpErrorKind> {
        HttpErrorKind::from_status(self.status)
    }

    pub fn payload(&self) -> &ExceptionResponse {
        &self.response
    }

    /// Message shown to clients
    pub fn message_text(&self) -> String {
        match &self.response {
            ExceptionResponse::Text(text) => text.clone(),
            ExceptionResponse::Object(_) => self
                .response
                .field("message")
                .map(str::to_string)
                .or_else(|| self.kind().map(|k| k.description().to_string()))
                .unwrap_or_else(|| "Http Exception".to_string()),
        }
    }
}

impl fmt::Display for HttpException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message_text())
    }
}

impl std::error::Error for HttpException {}

impl HttpError for HttpException {
    fn status(&self) -> Option<u16> {
        Some(self.status)
    }

    fn message(&self) -> Option<String> {
        Some(self.message_text())
    }

    fn response(&self) -> Option<ExceptionResponse> {
        Some(self.response.clone())
    }
}

impl Instantiate for HttpException {
    fn instantiate() -> Result<Self, InstantiateError> {
        Err(InstantiateError::ArgumentsRequired("HttpException"))
    }
}

/// Exception type bound to one standard error kind
pub trait StandardException: HttpError + Instantiate {
    const KIND: HttpErrorKind;

    fn custom_message(&self) -> Option<&str>;

    fn to_exception(&self) -> HttpException {
        HttpException::from_kind(Self::KIND, self.custom_message())
    }
}

macro_rules! standard_exceptions {
    ($($name:ident => $kind:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Raised for `HttpErrorKind::", stringify!($kind), "`")]
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $name {
                message: Option<String>,
            }

            impl $name {
                pub fn new(message: impl Into<String>) -> Self {
                    Self {
                        message: Some(message.into()),
                    }
                }
            }

            impl StandardException for $name {
                const KIND: HttpErrorKind = HttpErrorKind::$kind;

                fn custom_message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }

            impl HttpError for $name {
                fn status(&self) -> Option<u16> {
                    Some(Self::KIND.status_code())
                }

                fn message(&self) -> Option<String> {
                    Some(self.to_exception().message_text())
                }

                fn response(&self) -> Option<ExceptionResponse> {
                    Some(self.to_exception().response)
                }
            }

            impl Instantiate for $name {
                fn instantiate() -> Result<Self, InstantiateError> {
                    Ok(Self::default())
                }
            }

            impl From<$name> for HttpException {
                fn from(e: $name) -> Self {
                    e.to_exception()
                }
            }
        )+
    };
}

standard_exceptions! {
    BadRequestException => BadRequest,
    UnauthorizedException => Unauthorized,
    ForbiddenException => Forbidden,
    NotFoundException => NotFound,
    MethodNotAllowedException => MethodNotAllowed,
    NotImplementedException => NotImplemented,
    RequestTimeoutException => RequestTimeout,
    ConflictException => Conflict,
    GoneException => Gone,
    PreconditionFailedException => PreconditionFailed,
    PayloadTooLargeException => PayloadTooLarge,
    UnsupportedMediaTypeException => UnsupportedMediaType,
    UnprocessableEntityException => UnprocessableEntity,
    InternalServerErrorException => InternalServerError,
    ServiceUnavailableException => ServiceUnavailable,
    GatewayTimeoutException => GatewayTimeout,
    HttpVersionNotSupportedException => HttpVersionNotSupported,
}
