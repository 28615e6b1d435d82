//! Request handlers, one module per resource.

pub mod admin;
pub mod ticker;
pub mod track;
pub mod webhook;
