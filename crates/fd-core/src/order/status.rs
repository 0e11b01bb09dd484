use serde::{Deserialize, Serialize};

/// Order lifecycle status as reported by the backend.
///
/// The console only classifies; every transition is decided server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Created, not yet collected from the sender
    Pending,

    /// Collected by a driver, waiting to enter a shipment leg
    PickedUp,

    /// Travelling inside a shipment
    InTransit,

    /// Handed over to the recipient
    Delivered,

    /// Cancelled before delivery
    Cancelled,
}

impl OrderStatus {
    /// Check if this is a terminal state (no more transitions possible)
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Whether the backend would accept this order into a shipment.
    ///
    /// Display-only mirror of the server rule; the resolver response stays
    /// authoritative.
    pub fn can_join_shipment(self) -> bool {
        matches!(self, Self::Pending | Self::PickedUp)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PickedUp => "picked up",
            Self::InTransit => "in transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Which party pays the delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayerRole {
    Sender,
    Recipient,
}

/// Settlement state of the delivery fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());

        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::PickedUp.is_terminal());
        assert!(!OrderStatus::InTransit.is_terminal());
    }

    #[test]
    fn test_can_join_shipment() {
        assert!(OrderStatus::Pending.can_join_shipment());
        assert!(OrderStatus::PickedUp.can_join_shipment());

        assert!(!OrderStatus::InTransit.can_join_shipment());
        assert!(!OrderStatus::Delivered.can_join_shipment());
        assert!(!OrderStatus::Cancelled.can_join_shipment());
    }

    #[test]
    fn test_wire_spelling() {
        let json = serde_json::to_string(&OrderStatus::PickedUp).unwrap();
        assert_eq!(json, "\"PICKED_UP\"");

        let parsed: OrderStatus = serde_json::from_str("\"IN_TRANSIT\"").unwrap();
        assert_eq!(parsed, OrderStatus::InTransit);
    }
}
