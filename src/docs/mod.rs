//! Generated OpenAPI documentation for the errors an operation can raise.
//!
//! Each operation registers the exceptions it may raise. Every exception is
//! resolved to a status code, grouped with the others sharing that status,
//! and written into the document as a response with one named example per
//! exception. Statuses without a row in [`EXCEPTION_DOC_MAP`] are skipped.

pub mod descriptor;
pub mod extract;
pub mod grouped;
pub mod instantiate;
pub mod registry;
pub mod status;
pub mod table;

pub use descriptor::{ExampleOverrides, ExceptionDescriptor, ExceptionType, ResolvedException};
pub use extract::{extract_info, ExceptionInfo};
pub use grouped::{group_exceptions, ExampleEntry, GroupedException, EXCEPTION_BODY_SCHEMA};
pub use instantiate::{try_instantiate, Instantiate, InstantiateError};
pub use registry::{ApiErrors, AttachedEntry, ErrorDocs};
pub use status::status_from_description;
pub use table::{entry_for_kind, entry_for_status, ExceptionDocEntry, EXCEPTION_DOC_MAP};
