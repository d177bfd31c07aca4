use crate::style::{Property, StyleKey};
use thiserror::Error;

/// Failures while parsing a stylesheet or resolving a style property
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("malformed selector: {0}")]
    InvalidSelector(String),

    #[error("malformed {property} value: {value}")]
    InvalidValue { property: Property, value: String },

    #[error("unknown style selector: {0}")]
    UnknownSelector(StyleKey),

    #[error("style property {property} is not defined for {key}")]
    MissingProperty { key: StyleKey, property: Property },

    #[error("style property {property} of {key} is not a {expected}")]
    TypeMismatch {
        key: StyleKey,
        property: Property,
        expected: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("style error: {0}")]
    Style(#[from] StyleError),
}

pub type Result<T> = std::result::Result<T, Error>;
