use thiserror::Error;

/// Errors that can occur in the comparison layer.
///
/// Text-consuming operations are total and never fail; the only error source
/// is an invalid [`CompareConfig`](crate::CompareConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
