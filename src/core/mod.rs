// src/core/mod.rs

pub mod markup;
pub mod sanitize;

pub use markup::{parse_document, Element};
