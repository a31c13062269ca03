use std::fmt;

use super::extract::{extract_info, ExceptionInfo};
use super::instantiate::{short_type_name, try_instantiate, Instantiate};
use super::status::status_from_description;
use super::table::entry_for_kind;
use crate::errors::{
    BadRequestException, ConflictException, ForbiddenException, GatewayTimeoutException,
    GoneException, HttpError, HttpErrorKind, HttpVersionNotSupportedException,
    InternalServerErrorException, MethodNotAllowedException, NotFoundException,
    NotImplementedException, PayloadTooLargeException, PreconditionFailedException,
    RequestTimeoutException, ServiceUnavailableException, StandardException,
    UnauthorizedException, UnprocessableEntityException, UnsupportedMediaTypeException,
};

/// Handle on an exception type: its name plus a way to introspect it
#[derive(Clone, Copy)]
pub struct ExceptionType {
    name: &'static str,
    probe: fn() -> Option<ExceptionInfo>,
}

fn probe<T: HttpError + Instantiate>() -> Option<ExceptionInfo> {
    try_instantiate::<T>().map(|exception| extract_info(&exception))
}

impl ExceptionType {
    pub fn of<T: HttpError + Instantiate>() -> Self {
        Self {
            name: short_type_name::<T>(),
            probe: probe::<T>,
        }
    }

    /// Handle on the built-in exception for a kind
    pub fn standard(kind: HttpErrorKind) -> Self {
        match kind {
            HttpErrorKind::BadRequest => Self::of::<BadRequestException>(),
            HttpErrorKind::Unauthorized => Self::of::<UnauthorizedException>(),
            HttpErrorKind::Forbidden => Self::of::<ForbiddenException>(),
            HttpErrorKind::NotFound => Self::of::<NotFoundException>(),
            HttpErrorKind::MethodNotAllowed => Self::of::<MethodNotAllowedException>(),
            HttpErrorKind::NotImplemented => Self::of::<NotImplementedException>(),
            HttpErrorKind::RequestTimeout => Self::of::<RequestTimeoutException>(),
            HttpErrorKind::Conflict => Self::of::<ConflictException>(),
            HttpErrorKind::Gone => Self::of::<GoneException>(),
            HttpErrorKind::PreconditionFailed => Self::of::<PreconditionFailedException>(),
            HttpErrorKind::PayloadTooLarge => Self::of::<PayloadTooLargeException>(),
            HttpErrorKind::UnsupportedMediaType => Self::of::<UnsupportedMediaTypeException>(),
            HttpErrorKind::UnprocessableEntity => Self::of::<UnprocessableEntityException>(),
            HttpErrorKind::InternalServerError => Self::of::<InternalServerErrorException>(),
            HttpErrorKind::ServiceUnavailable => Self::of::<ServiceUnavailableException>(),
            HttpErrorKind::GatewayTimeout => Self::of::<GatewayTimeoutException>(),
            HttpErrorKind::HttpVersionNotSupported => {
                Self::of::<HttpVersionNotSupportedException>()
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Instantiate and introspect; `None` if the type needs arguments
    pub fn probe(&self) -> Option<ExceptionInfo> {
        (self.probe)()
    }
}

impl fmt::Debug for ExceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExceptionType").field(&self.name).finish()
    }
}

/// Replacement values for the generated example
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleOverrides {
    pub message: Option<String>,
    pub error: Option<String>,
    pub status_code: Option<u16>,
    pub name: Option<String>,
}

impl ExampleOverrides {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Static description of one exception an operation may raise
#[derive(Debug, Clone)]
pub struct ExceptionDescriptor {
    pub exception: ExceptionType,
    pub status_hint: Option<u16>,
    pub default_description: String,
    pub example_overrides: Option<ExampleOverrides>,
}

/// Descriptor after status resolution and introspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedException {
    pub name: &'static str,
    pub status_code: u16,
    pub info: Option<ExceptionInfo>,
}

fn is_error_status(status: &u16) -> bool {
    (400..=599).contains(status)
}

impl ExceptionDescriptor {
    pub fn new<T: HttpError + Instantiate>(default_description: impl Into<String>) -> Self {
        Self {
            exception: ExceptionType::of::<T>(),
            status_hint: None,
            default_description: default_description.into(),
            example_overrides: None,
        }
    }

    /// Descriptor for a built-in exception, described by its reason phrase
    pub fn standard<T: StandardException>() -> Self {
        Self::new::<T>(T::KIND.description())
    }

    /// Descriptor for a kind, described by its table row
    pub fn for_kind(kind: HttpErrorKind) -> Self {
        Self {
            exception: ExceptionType::standard(kind),
            status_hint: None,
            default_description: entry_for_kind(kind).default_description.to_string(),
            example_overrides: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status_hint = Some(status);
        self
    }

    pub fn with_overrides(mut self, overrides: ExampleOverrides) -> Self {
        self.example_overrides = Some(overrides);
        self
    }

    /// Resolve the documented status.
    ///
    /// Order: explicit hint, then the instantiated exception's status, then
    /// the default description (500 when unrecognized). Candidates outside
    /// 400..=599 are skipped.
    pub fn resolve(&self) -> ResolvedException {
        let info = self.exception.probe();
        let status_code = self
            .status_hint
            .filter(is_error_status)
            .or_else(|| {
                info.as_ref()
                    .and_then(|info| info.status_code)
                    .filter(is_error_status)
            })
            .unwrap_or_else(|| status_from_description(&self.default_description));

        ResolvedException {
            name: self.exception.name(),
            status_code,
            info,
        }
    }
}
