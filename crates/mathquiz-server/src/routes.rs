pub(crate) mod error;
pub(crate) mod json;
pub(crate) mod openapi;
pub(crate) mod questions;
pub(crate) mod quiz;
pub(crate) mod stats;
