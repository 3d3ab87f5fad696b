//! Error taxonomy for the impact pipeline and its collaborators

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImpactError>;

/// Coarse failure category callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric argument was non-finite, non-positive or otherwise out of domain
    InvalidInput,
    /// A geolocation or catalog collaborator failed or returned no data
    UpstreamUnavailable,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    #[error("invalid {parameter} ({value}): {reason}")]
    InvalidInput {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("missing input: {0}")]
    MissingInput(&'static str),

    #[error("{collaborator} unavailable: {message}")]
    UpstreamUnavailable {
        collaborator: &'static str,
        message: String,
    },
}

impl ImpactError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } | Self::MissingInput(_) => ErrorKind::InvalidInput,
            Self::UpstreamUnavailable { .. } => ErrorKind::UpstreamUnavailable,
        }
    }

    pub fn upstream(collaborator: &'static str, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            collaborator,
            message: message.into(),
        }
    }
}

/// Reject NaN and infinities
pub fn require_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ImpactError::InvalidInput {
            parameter,
            value,
            reason: "must be a finite number",
        })
    }
}

/// Reject anything that is not a finite number strictly greater than zero
pub fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    let value = require_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::InvalidInput {
            parameter,
            value,
            reason: "must be greater than zero",
        })
    }
}

/// Reject finite values outside `[min, max]`
pub fn require_in_range(parameter: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    let value = require_finite(parameter, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ImpactError::InvalidInput {
            parameter,
            value,
            reason: "is outside the allowed range",
        })
    }
}
