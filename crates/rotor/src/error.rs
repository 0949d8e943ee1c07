use crate::discrete::Label;
use thiserror::Error;

/// Rejected dial configuration. Returned from the dial constructors and never
/// repaired silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("empty range: min ({min}) must be less than max ({max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("step must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("sweep must be within (0, 360] degrees, got {0}")]
    InvalidSweep(f64),
    #[error("page step must be positive, got {0}")]
    InvalidPageStep(f64),
    #[error("a selector needs at least one label")]
    EmptyLabels,
    #[error("label '{0}' is declared more than once")]
    DuplicateLabel(Label),
    #[error("angle override names unknown label '{0}'")]
    UnknownOverride(Label),
    #[error("label '{0}' has more than one angle override")]
    DuplicateOverride(Label),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotaryError {
    #[error("label '{0}' is not part of this selector")]
    InvalidLabel(Label),
    #[error("control geometry is unavailable")]
    GeometryUnavailable,
}
