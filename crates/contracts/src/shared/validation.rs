use thiserror::Error;

/// Client-side validation failure. Raised before any request is built, so it
/// never reaches the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Max price must be greater than or equal to Min price.")]
    InvertedRange,
    #[error("All fields are required ({0} is missing).")]
    MissingField(&'static str),
    #[error("{0} must be a number.")]
    InvalidNumber(&'static str),
    #[error("Price must be positive.")]
    NonPositivePrice,
    #[error("Quantity must not be negative.")]
    NegativeQuantity,
    #[error("Selected brand is unknown.")]
    UnknownBrand,
}
