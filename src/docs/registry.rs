use std::collections::BTreeMap;
use tracing::debug;
use utoipa::openapi::{ComponentsBuilder, OpenApi, RefOr};
use utoipa::ToSchema;

use super::descriptor::ExceptionDescriptor;
use super::grouped::{
    group_exceptions, unique_example_key, GroupedException, EXCEPTION_BODY_SCHEMA,
};
use super::table::entry_for_status;
use crate::errors::{ExceptionBody, HttpErrorKind, StandardException};

/// Exceptions a single operation may raise
#[derive(Debug, Clone, Default)]
pub struct ApiErrors {
    descriptors: Vec<ExceptionDescriptor>,
}

impl ApiErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raises<T: StandardException>(self) -> Self {
        self.with(ExceptionDescriptor::standard::<T>())
    }

    pub fn raises_kind(self, kind: HttpErrorKind) -> Self {
        self.with(ExceptionDescriptor::for_kind(kind))
    }

    pub fn with(mut self, descriptor: ExceptionDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn descriptors(&self) -> &[ExceptionDescriptor] {
        &self.descriptors
    }

    pub fn grouped(&self) -> BTreeMap<u16, GroupedException> {
        group_exceptions(&self.descriptors)
    }
}

/// One documentation entry written into the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedEntry {
    pub operation_id: String,
    pub status_code: u16,
    pub decorator: &'static str,
}

/// Error documentation for a whole API, keyed by operation id
#[derive(Debug, Clone, Default)]
pub struct ErrorDocs {
    operations: BTreeMap<String, ApiErrors>,
}

impl ErrorDocs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(mut self, operation_id: impl Into<String>, errors: ApiErrors) -> Self {
        self.operations.insert(operation_id.into(), errors);
        self
    }

    pub fn get(&self, operation_id: &str) -> Option<&ApiErrors> {
        self.operations.get(operation_id)
    }

    /// Write the grouped error responses into every registered operation.
    ///
    /// Statuses already documented by hand keep their description and gain
    /// the generated examples.
    pub fn apply(&self, openapi: &mut OpenApi) -> Vec<AttachedEntry> {
        let mut attached = Vec::new();

        for path_item in openapi.paths.paths.values_mut() {
            for operation in path_item.operations.values_mut() {
                let Some(operation_id) = operation.operation_id.clone() else {
                    continue;
                };
                let Some(errors) = self.operations.get(&operation_id) else {
                    continue;
                };

                for (status, group) in errors.grouped() {
                    let generated = group.to_response();
                    let key = status.to_string();

                    match operation.responses.responses.get_mut(&key) {
                        Some(RefOr::T(existing)) => {
                            for (content_type, content) in generated.content {
                                match existing.content.get_mut(&content_type) {
                                    Some(current) => {
                                        for (name, example) in content.examples {
                                            let key = unique_example_key(&name, |key| {
                                                current.examples.contains_key(key)
                                            });
                                            current.examples.insert(key, example);
                                        }
                                    }
                                    None => {
                                        existing.content.insert(content_type, content);
                                    }
                                }
                            }
                        }
                        Some(RefOr::Ref(_)) => continue,
                        None => {
                            operation
                                .responses
                                .responses
                                .insert(key, RefOr::T(generated));
                        }
                    }

                    if let Some(entry) = entry_for_status(status) {
                        debug!(
                            operation_id = %operation_id,
                            status = status,
                            decorator = entry.decorator,
                            "Attached error documentation"
                        );
                        attached.push(AttachedEntry {
                            operation_id: operation_id.clone(),
                            status_code: status,
                            decorator: entry.decorator,
                        });
                    }
                }
            }
        }

        if !attached.is_empty() {
            let components = openapi
                .components
                .get_or_insert_with(|| ComponentsBuilder::new().build());
            if !components.schemas.contains_key(EXCEPTION_BODY_SCHEMA) {
                let (_, schema) = ExceptionBody::schema();
                components
                    .schemas
                    .insert(EXCEPTION_BODY_SCHEMA.to_string(), schema);
            }
        }

        attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ConflictException, HttpException, NotFoundException};
    use serde_json::json;
    use utoipa::openapi::{
        example::ExampleBuilder,
        path::{OperationBuilder, PathItem, PathItemType, PathsBuilder},
        ContentBuilder, OpenApiBuilder, ResponseBuilder,
    };

    fn document() -> OpenApi {
        let get = OperationBuilder::new()
            .operation_id(Some("get_item"))
            .response("200", ResponseBuilder::new().description("Item").build())
            .response(
                "404",
                ResponseBuilder::new().description("Item does not exist").build(),
            )
            .build();
        let post = OperationBuilder::new()
            .operation_id(Some("create_item"))
            .response("201", ResponseBuilder::new().description("Created").build())
            .build();

        OpenApiBuilder::new()
            .paths(
                PathsBuilder::new()
                    .path("/items/{id}", PathItem::new(PathItemType::Get, get))
                    .path("/items", PathItem::new(PathItemType::Post, post)),
            )
            .build()
    }

    #[test]
    fn test_apply_adds_responses() {
        let docs = ErrorDocs::new()
            .operation("get_item", ApiErrors::new().raises::<NotFoundException>())
            .operation(
                "create_item",
                ApiErrors::new()
                    .raises::<ConflictException>()
                    .raises_kind(HttpErrorKind::BadRequest),
            );

        let mut openapi = document();
        let attached = docs.apply(&mut openapi);
        assert_eq!(attached.len(), 3);

        let json = serde_json::to_value(&openapi).unwrap();
        let get = &json["paths"]["/items/{id}"]["get"]["responses"];
        assert_eq!(get["404"]["description"], "Item does not exist");
        assert_eq!(
            get["404"]["content"]["application/json"]["examples"]["NotFoundException"]["value"],
            json!({ "statusCode": 404, "message": "Not Found", "error": "Not Found" })
        );

        let post = &json["paths"]["/items"]["post"]["responses"];
        assert_eq!(post["409"]["description"], "Conflict");
        assert_eq!(post["400"]["description"], "Bad Request");
        assert!(json["components"]["schemas"]["ExceptionBody"].is_object());
    }

    #[test]
    fn test_unregistered_operations_untouched() {
        let docs = ErrorDocs::new().operation(
            "missing_operation",
            ApiErrors::new().raises::<NotFoundException>(),
        );

        let mut openapi = document();
        let before = serde_json::to_value(&openapi).unwrap();
        assert!(docs.apply(&mut openapi).is_empty());
        assert_eq!(serde_json::to_value(&openapi).unwrap(), before);
    }

    #[test]
    fn test_unmapped_exception_adds_nothing() {
        let docs = ErrorDocs::new().operation(
            "create_item",
            ApiErrors::new().with(
                ExceptionDescriptor::new::<HttpException>("Too Many Requests").with_status(429),
            ),
        );

        let mut openapi = document();
        assert!(docs.apply(&mut openapi).is_empty());
        let json = serde_json::to_value(&openapi).unwrap();
        assert!(json["paths"]["/items"]["post"]["responses"]["429"].is_null());
    }

    #[test]
    fn test_hand_written_example_is_kept() {
        let hand_written = ExampleBuilder::new().summary("Hand written").build();
        let get = OperationBuilder::new()
            .operation_id(Some("get_item"))
            .response(
                "404",
                ResponseBuilder::new()
                    .description("Item does not exist")
                    .content(
                        "application/json",
                        ContentBuilder::new()
                            .examples_from_iter([("NotFoundException", RefOr::T(hand_written))])
                            .build(),
                    )
                    .build(),
            )
            .build();
        let mut openapi = OpenApiBuilder::new()
            .paths(PathsBuilder::new().path("/items/{id}", PathItem::new(PathItemType::Get, get)))
            .build();

        let docs =
            ErrorDocs::new().operation("get_item", ApiErrors::new().raises::<NotFoundException>());
        assert_eq!(docs.apply(&mut openapi).len(), 1);

        let json = serde_json::to_value(&openapi).unwrap();
        let examples =
            &json["paths"]["/items/{id}"]["get"]["responses"]["404"]["content"]["application/json"]["examples"];
        assert_eq!(examples["NotFoundException"]["summary"], "Hand written");
        assert_eq!(examples["NotFoundException_2"]["summary"], "Not Found");
        assert_eq!(examples["NotFoundException_2"]["value"]["statusCode"], 404);
    }
}
