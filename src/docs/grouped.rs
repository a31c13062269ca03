use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::openapi::{
    example::ExampleBuilder, schema::Schema, ContentBuilder, Ref, RefOr, Response,
    ResponseBuilder,
};

use super::descriptor::ExceptionDescriptor;
use super::table::entry_for_status;
use crate::errors::ExceptionBody;

/// Name of the schema every error example points at
pub const EXCEPTION_BODY_SCHEMA: &str = "ExceptionBody";

/// `name`, or `name_2`, `name_3`, ... if already taken
pub(crate) fn unique_example_key(name: &str, taken: impl Fn(&str) -> bool) -> String {
    let mut key = name.to_string();
    let mut suffix = 2;
    while taken(&key) {
        key = format!("{}_{}", name, suffix);
        suffix += 1;
    }
    key
}

/// One named example in a documentation entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleEntry {
    pub summary: String,
    pub value: ExceptionBody,
}

/// Documentation entry for one status code
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedException {
    pub description: String,
    pub examples: BTreeMap<String, ExampleEntry>,
}

impl GroupedException {
    fn add(&mut self, name: String, example: ExampleEntry) {
        if !self
            .description
            .split(" | ")
            .any(|existing| existing == example.summary)
        {
            if !self.description.is_empty() {
                self.description.push_str(" | ");
            }
            self.description.push_str(&example.summary);
        }

        let key = unique_example_key(&name, |key| self.examples.contains_key(key));
        self.examples.insert(key, example);
    }

    /// OpenAPI response for this entry
    pub fn to_response(&self) -> Response {
        let schema: RefOr<Schema> = RefOr::Ref(Ref::from_schema_name(EXCEPTION_BODY_SCHEMA));
        let examples = self.examples.iter().map(|(name, example)| {
            let built = ExampleBuilder::new()
                .summary(example.summary.clone())
                .value(serde_json::to_value(&example.value).ok())
                .build();
            (name.clone(), RefOr::T(built))
        });

        ResponseBuilder::new()
            .description(self.description.clone())
            .content(
                "application/json",
                ContentBuilder::new()
                    .schema(schema)
                    .examples_from_iter(examples)
                    .build(),
            )
            .build()
    }
}

/// Resolve descriptors and group them by status.
///
/// Descriptors whose status has no table entry are dropped without notice.
pub fn group_exceptions(descriptors: &[ExceptionDescriptor]) -> BTreeMap<u16, GroupedException> {
    let mut groups: BTreeMap<u16, GroupedException> = BTreeMap::new();

    for descriptor in descriptors {
        let resolved = descriptor.resolve();
        let Some(entry) = entry_for_status(resolved.status_code) else {
            continue;
        };

        let overrides = descriptor.example_overrides.clone().unwrap_or_default();
        let info = resolved.info.unwrap_or_default();

        let value = ExceptionBody {
            status_code: overrides.status_code.unwrap_or(resolved.status_code),
            message: overrides
                .message
                .or(info.message)
                .unwrap_or_else(|| descriptor.default_description.clone()),
            error: overrides
                .error
                .or(info.error)
                .or_else(|| Some(entry.default_description.to_string())),
        };
        let name = overrides
            .name
            .unwrap_or_else(|| resolved.name.to_string());

        groups.entry(resolved.status_code).or_default().add(
            name,
            ExampleEntry {
                summary: descriptor.default_description.clone(),
                value,
            },
        );
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::descriptor::ExampleOverrides;
    use crate::errors::{
        BadRequestException, HttpErrorKind, HttpException, NotFoundException,
        UnprocessableEntityException,
    };

    #[test]
    fn test_all_kinds_one_entry_each() {
        let descriptors: Vec<ExceptionDescriptor> = HttpErrorKind::ALL
            .into_iter()
            .map(ExceptionDescriptor::for_kind)
            .collect();

        let groups = group_exceptions(&descriptors);
        let statuses: Vec<u16> = groups.keys().copied().collect();
        assert_eq!(
            statuses,
            vec![400, 401, 403, 404, 405, 408, 409, 410, 412, 413, 415, 422, 500, 501, 503, 504, 505]
        );
        for kind in HttpErrorKind::ALL {
            let group = &groups[&kind.status_code()];
            assert_eq!(group.description, kind.description());
            assert_eq!(group.examples.len(), 1);
            assert!(group.examples.contains_key(kind.exception_name()));
        }
    }

    #[test]
    fn test_same_status_is_grouped() {
        let descriptors = vec![
            ExceptionDescriptor::standard::<BadRequestException>(),
            ExceptionDescriptor::new::<HttpException>("Validation failed").with_status(400),
        ];

        let groups = group_exceptions(&descriptors);
        assert_eq!(groups.len(), 1);
        let group = &groups[&400];
        assert_eq!(group.description, "Bad Request | Validation failed");
        assert_eq!(group.examples.len(), 2);

        let fallback = &group.examples["HttpException"];
        assert_eq!(fallback.value.message, "Validation failed");
        assert_eq!(fallback.value.error.as_deref(), Some("Bad Request"));
        assert_eq!(fallback.value.status_code, 400);
    }

    #[test]
    fn test_duplicate_names_are_suffixed() {
        let descriptors = vec![
            ExceptionDescriptor::standard::<NotFoundException>(),
            ExceptionDescriptor::standard::<NotFoundException>(),
        ];
        let group = &group_exceptions(&descriptors)[&404];
        assert_eq!(group.description, "Not Found");
        assert!(group.examples.contains_key("NotFoundException"));
        assert!(group.examples.contains_key("NotFoundException_2"));
    }

    #[test]
    fn test_overrides_apply() {
        let descriptors = vec![ExceptionDescriptor::standard::<UnprocessableEntityException>()
            .with_overrides(
                ExampleOverrides::default()
                    .message("Unknown technology")
                    .name("UnknownTechnology"),
            )];

        let group = &group_exceptions(&descriptors)[&422];
        let example = &group.examples["UnknownTechnology"];
        assert_eq!(example.value.message, "Unknown technology");
        assert_eq!(example.value.error.as_deref(), Some("Unprocessable Entity"));
        assert_eq!(example.summary, "Unprocessable Entity");
    }

    #[test]
    fn test_unmapped_status_is_omitted() {
        let descriptors = vec![
            ExceptionDescriptor::new::<HttpException>("Too Many Requests").with_status(429),
            ExceptionDescriptor::standard::<NotFoundException>(),
        ];
        let groups = group_exceptions(&descriptors);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![404]);
    }

    #[test]
    fn test_to_response_carries_examples() {
        let groups = group_exceptions(&[ExceptionDescriptor::standard::<NotFoundException>()]);
        let response = groups[&404].to_response();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["description"], "Not Found");
        let content = &json["content"]["application/json"];
        assert_eq!(content["schema"]["$ref"], "#/components/schemas/ExceptionBody");
        let example = &content["examples"]["NotFoundException"];
        assert_eq!(example["summary"], "Not Found");
        assert_eq!(example["value"]["statusCode"], 404);
        assert_eq!(example["value"]["message"], "Not Found");
        assert_eq!(example["value"]["error"], "Not Found");
    }
}
