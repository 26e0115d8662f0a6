//! Types and pure logic shared by the CRM backend and its yew frontend.
//!
//! Everything in here compiles for both the native server and `wasm32`, so it
//! carries no I/O: wire models, patch merging, validation, search filters and
//! the client route table.

pub mod display;
pub mod model;
pub mod patch;
pub mod requests;
pub mod routes;
pub mod search;
pub mod theme;
pub mod validation;
