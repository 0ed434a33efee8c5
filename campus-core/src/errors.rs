//! # Errors
//!
//! campus keeps a deliberately small error taxonomy:
//! - `NotFound` is the only failure the in-memory services produce
//! - `NetworkError` is what a store reports when a service call itself fails
//! - the rest exist for the route gate and for real backends swapped in later
//!
//! A `PortalError` travels inside `anyhow::Error`, so any layer can return
//! `anyhow::Result` and callers can still recover the structured kind.

use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for campus APIs.
pub type PortalResult<T> = std::result::Result<T, AnyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    NotAuthenticated,
    NotFound,
    NotImplemented,
    NetworkError,
    GeneralError,
}

impl ErrorKind {
    /// Stable snake_case code, also used as `errorKind` on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::NotAuthenticated => "not_authenticated",
            ErrorKind::NotFound => "not_found",
            ErrorKind::NotImplemented => "not_implemented",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::GeneralError => "general_error",
        }
    }

    /// Inverse of [`ErrorKind::code`]. Unknown codes map to `GeneralError`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "bad_request" => ErrorKind::BadRequest,
            "not_authenticated" => ErrorKind::NotAuthenticated,
            "not_found" => ErrorKind::NotFound,
            "not_implemented" => ErrorKind::NotImplemented,
            "network_error" => ErrorKind::NetworkError,
            _ => ErrorKind::GeneralError,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A structured campus error that can live inside `anyhow::Error`.
#[derive(Debug)]
pub struct PortalError {
    pub kind: ErrorKind,
    pub message: String,
    pub source: Option<AnyError>,
}

impl PortalError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    /// Convert into `anyhow::Error`.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Find a `PortalError` anywhere in an `anyhow` chain.
    pub fn from_anyhow(err: &AnyError) -> Option<&PortalError> {
        err.chain().find_map(|e| e.downcast_ref::<PortalError>())
    }

    /// Turn any error into a PortalError:
    /// - if it's already a PortalError, keep it
    /// - otherwise wrap as GeneralError
    pub fn normalize(err: AnyError) -> PortalError {
        match err.downcast::<PortalError>() {
            Ok(portal) => portal,
            Err(other) => PortalError::new(ErrorKind::GeneralError, other.to_string()).with_source(other),
        }
    }

    /// True when `err` carries a `NotFound` PortalError.
    pub fn is_not_found(err: &AnyError) -> bool {
        Self::from_anyhow(err).is_some_and(|e| e.kind == ErrorKind::NotFound)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, msg)
    }
    pub fn not_authenticated(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthenticated, msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, msg)
    }
    pub fn network_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkError, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Bail out of an `anyhow::Result` function with a `PortalError`.
#[macro_export]
macro_rules! bail_portal {
    ($ctor:ident, $msg:expr) => {
        return Err($crate::errors::PortalError::$ctor($msg).into_anyhow());
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::PortalError::$ctor(format!($fmt, $($arg)*)).into_anyhow());
    };
}
