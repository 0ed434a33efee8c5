//! The uniform result of every service call.
//!
//! In Rust an [`Envelope`] is a sum type, so callers match on both outcomes.
//! On the wire it keeps the familiar flat shape:
//!
//! ```json
//! { "success": true,  "data": { ... }, "message": "Resource uploaded" }
//! { "success": false, "error": "Payment not found", "errorKind": "not_found" }
//! ```

use serde::de::value::UnitDeserializer;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ErrorKind, PortalError};

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success {
        data: T,
        message: Option<String>,
    },
    Failure {
        kind: ErrorKind,
        error: String,
    },
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope::Success {
            data,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Envelope::Success {
            data,
            message: Some(message.into()),
        }
    }

    pub fn fail(kind: ErrorKind, error: impl Into<String>) -> Self {
        Envelope::Failure {
            kind,
            error: error.into(),
        }
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::fail(ErrorKind::NotFound, error)
    }

    /// Attach a message to a success. Failures are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Envelope::Success { data, .. } => Envelope::Success {
                data,
                message: Some(message.into()),
            },
            failure => failure,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Envelope::Success { data, .. } => Some(data),
            Envelope::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Envelope::Success { data, .. } => Some(data),
            Envelope::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Envelope::Success { message, .. } => message.as_deref(),
            Envelope::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Failure { error, .. } => Some(error),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Envelope::Success { .. } => None,
            Envelope::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Envelope::Success { data, message } => Envelope::Success {
                data: f(data),
                message,
            },
            Envelope::Failure { kind, error } => Envelope::Failure { kind, error },
        }
    }

    /// Convert into a `Result`, turning failures into a [`PortalError`].
    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            Envelope::Success { data, .. } => Ok(data),
            Envelope::Failure { kind, error } => Err(PortalError::new(kind, error).into_anyhow()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireOwned<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    error: Option<String>,
    error_kind: Option<String>,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Envelope::Success { data, message } => WireRef {
                success: true,
                data: Some(data),
                message: message.as_deref(),
                error: None,
                error_kind: None,
            },
            Envelope::Failure { kind, error } => WireRef {
                success: false,
                data: None,
                message: None,
                error: Some(error.as_str()),
                error_kind: Some(kind.code()),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireOwned::<T>::deserialize(deserializer)?;

        if wire.success {
            // `Envelope<()>` arrives as `"data": null` or without `data` at all.
            let data = match wire.data {
                Some(data) => data,
                None => {
                    let unit: UnitDeserializer<D::Error> = ().into_deserializer();
                    T::deserialize(unit).map_err(|_| serde::de::Error::missing_field("data"))?
                }
            };
            return Ok(Envelope::Success {
                data,
                message: wire.message,
            });
        }

        let kind = wire
            .error_kind
            .as_deref()
            .map(ErrorKind::from_code)
            .unwrap_or(ErrorKind::GeneralError);
        let error = wire
            .error
            .or(wire.message)
            .unwrap_or_else(|| "Unknown error".to_string());

        Ok(Envelope::Failure { kind, error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_serializes_flat() {
        let env: Envelope<()> = Envelope::not_found("Payment not found");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": false, "error": "Payment not found", "errorKind": "not_found"})
        );
    }

    #[test]
    fn success_serializes_data_and_message() {
        let env = Envelope::ok_with_message(json!({"id": "p1"}), "Payment successful");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"success": true, "data": {"id": "p1"}, "message": "Payment successful"})
        );
    }

    #[test]
    fn backend_failure_without_kind_parses_as_general_error() {
        let env: Envelope<u32> =
            serde_json::from_value(json!({"success": false, "message": "Server exploded"})).unwrap();
        assert_eq!(env.error_kind(), Some(ErrorKind::GeneralError));
        assert_eq!(env.error(), Some("Server exploded"));
    }

    #[test]
    fn success_without_data_is_rejected() {
        let parsed = serde_json::from_value::<Envelope<u32>>(json!({"success": true}));
        assert!(parsed.is_err());
    }

    #[test]
    fn unit_success_parses_without_data() {
        let env: Envelope<()> =
            serde_json::from_value(json!({"success": true, "message": "Resource deleted"})).unwrap();
        assert!(env.is_success());
        assert_eq!(env.message(), Some("Resource deleted"));
    }

    #[test]
    fn into_result_carries_the_kind() {
        let err = Envelope::<u8>::not_found("Resource not found")
            .into_result()
            .unwrap_err();
        assert!(PortalError::is_not_found(&err));
    }
}
