use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of an order: the dish and how many were ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
}

/// Order status as stored by the order service.
///
/// The vocabulary is open (new statuses may appear upstream), so this is a
/// newtype over the raw string with constants for the values the engine
/// reasons about. `Food processing` is the canonical in-flight spelling; the
/// legacy `Processing` value still blocks cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(pub String);

impl OrderStatus {
    pub const PENDING: &'static str = "Pending";
    pub const FOOD_PROCESSING: &'static str = "Food processing";
    pub const OUT_FOR_DELIVERY: &'static str = "Out for delivery";
    pub const DELIVERED: &'static str = "Delivered";
    pub const CANCELLED: &'static str = "Cancelled";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn cancelled() -> Self {
        Self(Self::CANCELLED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True once the kitchen or the rider has the order, or it is already
    /// done, cancellation is no longer allowed from here on.
    pub fn blocks_cancellation(&self) -> bool {
        matches!(
            self.0.as_str(),
            Self::FOOD_PROCESSING | Self::OUT_FOR_DELIVERY | Self::DELIVERED | "Processing"
        )
    }

    pub fn is_delivered(&self) -> bool {
        self.0 == Self::DELIVERED
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderStatus {
    fn from(status: &str) -> Self {
        Self(status.to_string())
    }
}

/// A customer order as returned by the order-history collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderLine>,
    /// Order total in whole rupees.
    pub amount: u64,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
}

impl Order {
    /// Last six characters of the id, the short form shown to customers.
    pub fn short_id(&self) -> String {
        let chars: Vec<char> = self.id.chars().collect();
        let start = chars.len().saturating_sub(6);
        chars[start..].iter().collect()
    }

    /// Items rendered as `Name xQty` joined with commas.
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|line| format!("{} x{}", line.name, line.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str) -> Order {
        Order {
            id: "68a1f004bc5d".into(),
            user_id: "u1".into(),
            items: vec![
                OrderLine { name: "Margherita Pizza".into(), quantity: 2 },
                OrderLine { name: "Garlic Bread".into(), quantity: 1 },
            ],
            amount: 660,
            status: OrderStatus::new(status),
            date: Utc::now(),
        }
    }

    #[test]
    fn blocked_statuses_cover_both_processing_spellings() {
        for status in ["Food processing", "Out for delivery", "Delivered", "Processing"] {
            assert!(OrderStatus::new(status).blocks_cancellation(), "{status}");
        }
        for status in ["Pending", "Cancelled", "Payment failed"] {
            assert!(!OrderStatus::new(status).blocks_cancellation(), "{status}");
        }
    }

    #[test]
    fn short_id_is_last_six_chars() {
        assert_eq!(order("Pending").short_id(), "04bc5d");
        let tiny = Order { id: "ab".into(), ..order("Pending") };
        assert_eq!(tiny.short_id(), "ab");
    }

    #[test]
    fn item_summary_joins_lines() {
        assert_eq!(
            order("Pending").item_summary(),
            "Margherita Pizza x2, Garlic Bread x1"
        );
    }
}
