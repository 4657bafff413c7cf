//! Descriptor-level errors.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hard failure raised when a descriptor may not create items in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDenied {
    pub descriptor: String,
    pub scope: String,
}

impl Display for AccessDenied {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not applicable in '{}'", self.descriptor, self.scope)
    }
}

impl Error for AccessDenied {}

/// Failure while rendering a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "description render failed: {}", self.message)
    }
}

impl Error for RenderError {}

/// Item creation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateItemError {
    /// No registered descriptor carries the requested id.
    DescriptorNotFound(String),
    /// Item name is blank, reserved or contains an unsafe character.
    InvalidName(String),
    /// Descriptor is not applicable in the target scope.
    AccessDenied(AccessDenied),
    /// Descriptor factory failed.
    Factory(String),
}

impl Display for CreateItemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DescriptorNotFound(id) => write!(f, "item descriptor not found: {id}"),
            Self::InvalidName(reason) => write!(f, "item name is invalid: {reason}"),
            Self::AccessDenied(err) => write!(f, "{err}"),
            Self::Factory(message) => write!(f, "item factory failed: {message}"),
        }
    }
}

impl Error for CreateItemError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AccessDenied(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AccessDenied> for CreateItemError {
    fn from(value: AccessDenied) -> Self {
        Self::AccessDenied(value)
    }
}
