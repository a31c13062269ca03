//! HTTP surface: handlers, router, middleware and the OpenAPI document

pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
