// ABOUTME: Unified error handling for the BMI engine with typed measurement errors
// ABOUTME: Defines ErrorCode, MeasurementError, AppError, and the JSON error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calculator Contributors

//! # Unified Error Handling System
//!
//! Two layers of errors live here:
//!
//! - [`MeasurementError`] is the typed error returned by the engine (validator,
//!   calculator, classifier). Every variant is an input-correction error: the caller
//!   re-prompts, nothing is retried.
//! - [`AppError`] is the boundary error carried to the presentation layer, with an
//!   [`ErrorCode`], a human-readable message, optional context, and a source chain.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Non-positive or non-finite measurement, or a non-finite BMI
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Measurement outside its configured realistic range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Negative BMI handed to the classifier
    #[serde(rename = "NEGATIVE_BMI")]
    NegativeBmi = 3004,

    // Configuration (6000-6999)
    /// Configuration could not be read
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration was read but failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected failure, details go to the log only
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Output could not be serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status for a command-line front end (sysexits.h values)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            // EX_DATAERR
            Self::InvalidInput | Self::ValueOutOfRange | Self::NegativeBmi => 65,
            // EX_CONFIG
            Self::ConfigError | Self::ConfigInvalid => 78,
            // EX_SOFTWARE
            Self::InternalError | Self::SerializationError => 70,
        }
    }

    /// Whether the error is a fault in the program rather than in what the user supplied
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::InternalError | Self::SerializationError)
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::NegativeBmi => "The BMI value is negative",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An unexpected error occurred",
            Self::SerializationError => "Data serialization failed",
        }
    }
}

/// Which body measurement an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Standing height in centimeters
    Height,
    /// Body weight in kilograms
    Weight,
}

impl Measurement {
    /// Unit suffix used in messages
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Height => "cm",
            Self::Weight => "kg",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Height => f.write_str("Height"),
            Self::Weight => f.write_str("Weight"),
        }
    }
}

/// Typed input errors produced by the validator, calculator, and classifier
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MeasurementError {
    /// NaN or infinite measurement
    #[error("{measurement} must be a finite number.")]
    NonFinite {
        /// Offending measurement
        measurement: Measurement,
    },

    /// Zero or negative measurement
    #[error("{measurement} must be a positive value.")]
    NonPositive {
        /// Offending measurement
        measurement: Measurement,
    },

    /// Positive but below the configured minimum
    #[error(
        "{measurement} seems too low. Please enter a value between {min} and {max} {}.",
        .measurement.unit()
    )]
    TooLow {
        /// Offending measurement
        measurement: Measurement,
        /// Received value
        value: f64,
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// Above the configured maximum
    #[error(
        "{measurement} exceeds realistic range. Maximum allowed: {max} {}.",
        .measurement.unit()
    )]
    TooHigh {
        /// Offending measurement
        measurement: Measurement,
        /// Received value
        value: f64,
        /// Configured maximum
        max: f64,
    },

    /// Classifier received a negative BMI
    #[error("BMI cannot be negative. Received: {0}")]
    NegativeBmi(f64),

    /// Classifier received NaN
    #[error("BMI must be a number. Received: {0}")]
    InvalidBmi(f64),
}

impl MeasurementError {
    /// Map this error onto the shared error code space
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NonFinite { .. } | Self::NonPositive { .. } | Self::InvalidBmi(_) => {
                ErrorCode::InvalidInput
            }
            Self::TooLow { .. } | Self::TooHigh { .. } => ErrorCode::ValueOutOfRange,
            Self::NegativeBmi(_) => ErrorCode::NegativeBmi,
        }
    }

    /// The measurement at fault, if the error concerns height or weight
    #[must_use]
    pub const fn measurement(&self) -> Option<Measurement> {
        match self {
            Self::NonFinite { measurement }
            | Self::NonPositive { measurement }
            | Self::TooLow { measurement, .. }
            | Self::TooHigh { measurement, .. } => Some(*measurement),
            Self::NegativeBmi(_) | Self::InvalidBmi(_) => None,
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Input field the error refers to
    pub field: Option<Measurement>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            field: None,
            details: serde_json::Value::Null,
        }
    }
}

/// Unified error type for the application boundary
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the input field the error refers to
    #[must_use]
    pub fn with_field(mut self, field: Measurement) -> Self {
        self.context.field = Some(field);
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Message safe to show an end user: internal details are replaced by the
    /// code's generic description
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.code.is_internal() {
            format!("{}. Please try again.", self.code.description())
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<MeasurementError> for AppError {
    fn from(error: MeasurementError) -> Self {
        let app_error = Self::new(error.code(), error.to_string());
        let app_error = match error.measurement() {
            Some(field) => app_error.with_field(field),
            None => app_error,
        };
        app_error.with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.chain().nth(1) {
            Some(source) => Self::internal(error.to_string()).with_details(serde_json::json!({
                "source": source.to_string()
            })),
            None => Self::internal(error.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// JSON error envelope printed by front ends
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// User-facing message
    pub message: String,
    /// Input field at fault
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Measurement>,
    /// Additional details
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let message = error.user_message();
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message,
                field: error.context.field,
                details: error.context.details,
            },
        }
    }
}
