//! Crate-level error types.
//!
//! Only configuration is fallible. Runtime navigation follows fail-open /
//! no-op policies and never produces an error.

use std::fmt;

/// Errors produced by the artvistas-nav crate.
#[derive(Debug)]
pub enum NavError {
    /// Generic I/O failure while reading or writing a config file.
    Io(std::io::Error),
    /// TOML options or tour parsing/serialization failure.
    OptionsParse(String),
    /// A tour was built from an empty waypoint list.
    EmptyTour,
    /// A tour waypoint has a non-finite position or look-at point.
    InvalidWaypoint(String),
    /// A waypoint id was not found in the tour.
    UnknownWaypoint(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::EmptyTour => write!(f, "tour must contain at least one waypoint"),
            Self::InvalidWaypoint(id) => {
                write!(f, "tour waypoint '{id}' has a non-finite position")
            }
            Self::UnknownWaypoint(id) => write!(f, "unknown waypoint '{id}'"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
