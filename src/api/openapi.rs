use utoipa::{Modify, OpenApi};

use crate::docs::{ApiErrors, ErrorDocs, ExampleOverrides, ExceptionDescriptor};
use crate::errors::{
    BadRequestException, ConflictException, ExceptionBody, HttpErrorKind, HttpException,
    NotFoundException, PayloadTooLargeException, UnprocessableEntityException,
    UnsupportedMediaTypeException,
};
use crate::metrics::ERROR_DOC_ENTRIES_TOTAL;
use crate::portfolio::{Application, NewApplication, NewTechnology, Technology};

/// Errors raised while reading a JSON request body
fn json_body_errors(errors: ApiErrors) -> ApiErrors {
    errors
        .with(
            ExceptionDescriptor::new::<HttpException>("Malformed JSON body")
                .with_status(400)
                .with_overrides(ExampleOverrides::default().name("MalformedJson")),
        )
        .raises::<PayloadTooLargeException>()
        .raises::<UnsupportedMediaTypeException>()
}

/// Errors raised while parsing an `{id}` path segment
fn id_path_errors(errors: ApiErrors) -> ApiErrors {
    errors.with(
        ExceptionDescriptor::new::<HttpException>("Malformed id")
            .with_status(400)
            .with_overrides(
                ExampleOverrides::default()
                    .message("Invalid URL: Cannot parse `id` as a UUID")
                    .name("MalformedId"),
            ),
    )
}

/// Exceptions each operation may raise, keyed by operation id
pub fn error_docs() -> ErrorDocs {
    ErrorDocs::new()
        .operation(
            "get_application",
            id_path_errors(ApiErrors::new().with(
                ExceptionDescriptor::standard::<NotFoundException>().with_overrides(
                    ExampleOverrides::default()
                        .message("Application not found: 6f1c2a9e-0000-4000-8000-000000000000")
                        .name("ApplicationNotFound"),
                ),
            )),
        )
        .operation(
            "create_application",
            json_body_errors(
                ApiErrors::new()
                    .raises::<BadRequestException>()
                    .raises::<ConflictException>()
                    .with(
                        ExceptionDescriptor::standard::<UnprocessableEntityException>()
                            .with_overrides(
                                ExampleOverrides::default()
                                    .message("Unknown technology: 6f1c2a9e-0000-4000-8000-000000000000")
                                    .name("UnknownTechnology"),
                            ),
                    ),
            ),
        )
        .operation(
            "delete_application",
            id_path_errors(ApiErrors::new().raises_kind(HttpErrorKind::NotFound)),
        )
        .operation(
            "create_technology",
            json_body_errors(
                ApiErrors::new()
                    .raises::<BadRequestException>()
                    .raises::<ConflictException>()
                    .raises_kind(HttpErrorKind::UnprocessableEntity),
            ),
        )
}

/// Attaches generated error responses when the document is built
pub struct ErrorResponses;

impl Modify for ErrorResponses {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        for entry in error_docs().apply(openapi) {
            ERROR_DOC_ENTRIES_TOTAL
                .with_label_values(&[&entry.status_code.to_string()])
                .inc();
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Portfolio management API. Error responses are generated from the exceptions each operation raises.",
        contact(
            name = "Portfolio API",
        )
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::list_applications,
        crate::api::handlers::get_application,
        crate::api::handlers::create_application,
        crate::api::handlers::delete_application,
        crate::api::handlers::list_technologies,
        crate::api::handlers::create_technology,
    ),
    components(
        schemas(
            Application,
            NewApplication,
            Technology,
            NewTechnology,
            ExceptionBody,
            HttpErrorKind,
        )
    ),
    modifiers(&ErrorResponses),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "applications", description = "Portfolio applications"),
        (name = "technologies", description = "Technologies applications are built with"),
    )
)]
pub struct ApiDoc;
