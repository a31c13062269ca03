//! HTTP exceptions raised by handlers and rendered as JSON error responses

pub mod exception;
pub mod kind;
pub mod response;

pub use exception::{
    BadRequestException, ConflictException, ExceptionResponse, ForbiddenException,
    GatewayTimeoutException, GoneException, HttpError, HttpException,
    HttpVersionNotSupportedException, InternalServerErrorException, MethodNotAllowedException,
    NotFoundException, NotImplementedException, PayloadTooLargeException,
    PreconditionFailedException, RequestTimeoutException, ServiceUnavailableException,
    StandardException, UnauthorizedException, UnprocessableEntityException,
    UnsupportedMediaTypeException,
};
pub use kind::HttpErrorKind;
pub use response::ExceptionBody;
