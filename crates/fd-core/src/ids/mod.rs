//! ID type wrappers for type safety.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Server-assigned shipment identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ShipmentId(i64);

/// Server-assigned order identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct OrderId(i64);

macro_rules! impl_int_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn new(id: i64) -> Self {
                    Self(id)
                }

                pub fn value(self) -> i64 {
                    self.0
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<i64> for $name {
                fn from(id: i64) -> Self {
                    Self(id)
                }
            }
        )*
    };
}

impl_int_id!(ShipmentId, OrderId);

/// Globally unique business key of an order.
///
/// Compared exactly as typed: case- and whitespace-sensitive. This is the
/// dedup key for staged additions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

/// Identifier of a driver/employee, as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

macro_rules! impl_str_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                pub fn new(s: impl Into<String>) -> Self {
                    Self(s.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<String> for $name {
                fn from(s: String) -> Self {
                    Self(s)
                }
            }

            impl From<&str> for $name {
                fn from(s: &str) -> Self {
                    Self(s.to_string())
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )*
    };
}

impl_str_id!(TrackingNumber, EmployeeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_id_roundtrip() {
        let id = OrderId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(OrderId::from(42), id);
    }

    #[test]
    fn test_tracking_number_is_compared_exactly_as_typed() {
        let a = TrackingNumber::from("UTE777");
        let b = TrackingNumber::from("ute777");
        let c = TrackingNumber::from("UTE777 ");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, TrackingNumber::new("UTE777"));
    }

    #[test]
    fn test_str_id_accessors() {
        let id = EmployeeId::from("EMP-9");
        assert_eq!(id.as_str(), "EMP-9");
        assert_eq!(id.clone().into_inner(), "EMP-9".to_string());
    }
}
