//! Order Model
//!
//! Stored order documents plus the creation/update payloads and the
//! enriched read views composed by `orders::enrich`.

use super::serde_helpers;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

// =============================================================================
// Order status
// =============================================================================

/// Order lifecycle status
///
/// Transitions follow a fixed chain with cancellation reachable from any
/// non-terminal state:
///
/// ```text
/// received -> preparing -> ready -> served -> completed
///     \          |           |        |
///      `---------+-----------+--------+--> cancelled
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Received,
    Preparing,
    Ready,
    Served,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All enumerated values, for validation messages
    pub const ALL: [&'static str; 6] = [
        "received",
        "preparing",
        "ready",
        "served",
        "completed",
        "cancelled",
    ];

    /// Parse a client-supplied status string
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "received" => Some(Self::Received),
            "preparing" => Some(Self::Preparing),
            "ready" => Some(Self::Ready),
            "served" => Some(Self::Served),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Served => "served",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether moving from `self` to `next` is a legal transition
    ///
    /// Setting the current status again is a no-op and allowed.
    pub fn can_transition_to(&self, next: Self) -> bool {
        if *self == next {
            return true;
        }
        match (self, next) {
            (Self::Received, Self::Preparing) => true,
            (Self::Preparing, Self::Ready) => true,
            (Self::Ready, Self::Served) => true,
            (Self::Served, Self::Completed) => true,
            (from, Self::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Received
    }
}

// =============================================================================
// Stored order
// =============================================================================

/// One menu-item line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item_id: RecordId,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Stored order document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub items: Vec<OrderItem>,
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub employee_id: RecordId,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    /// Frozen snapshot computed at creation time, never recomputed
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// API request types
// =============================================================================

/// One item line of a creation payload
///
/// References are raw strings here so that malformed ids surface as
/// validation messages instead of deserialization failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    #[serde(default)]
    pub menu_item_id: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create order payload
///
/// There is deliberately no `total` field: the server computes the total
/// from the current catalog and ignores anything the client sends.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
    #[serde(default)]
    pub table_id: String,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Partial update payload
///
/// Changed identifiers are re-parsed to record ids but their existence is
/// not re-checked, and item changes never recompute the frozen total.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<OrderItemInput>>,
}

// =============================================================================
// Enriched read views
// =============================================================================

/// Employee projection inside an enriched order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSnapshot {
    pub name: String,
    pub role: super::EmployeeRole,
}

/// Table projection inside an enriched order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub table_number: i32,
    pub location: String,
}

/// Menu item projection inside an enriched order item
///
/// `price` reflects the catalog's current value, which may diverge from the
/// frozen order total computed at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemSnapshot {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Order item annotated with its catalog snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedOrderItem {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item_id: RecordId,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// `null` when the reference no longer resolves (partial-view contract)
    pub menu_item: Option<MenuItemSnapshot>,
}

/// Denormalized order view returned by the read endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedOrder {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub items: Vec<EnrichedOrderItem>,
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub employee_id: RecordId,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    /// `null` when the reference no longer resolves
    pub employee: Option<EmployeeSnapshot>,
    /// `null` when the reference no longer resolves
    pub table: Option<TableSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chain_is_legal() {
        assert!(OrderStatus::Received.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Ready));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Served));
        assert!(OrderStatus::Served.can_transition_to(OrderStatus::Completed));
    }

    #[test]
    fn test_backwards_and_skipping_transitions_rejected() {
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Received));
        assert!(!OrderStatus::Received.can_transition_to(OrderStatus::Served));
        assert!(!OrderStatus::Served.can_transition_to(OrderStatus::Preparing));
    }

    #[test]
    fn test_cancel_reachable_from_non_terminal_only() {
        assert!(OrderStatus::Received.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Served.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_same_status_is_noop() {
        assert!(OrderStatus::Preparing.can_transition_to(OrderStatus::Preparing));
        assert!(OrderStatus::Cancelled.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_status_parse_round_trip() {
        for name in OrderStatus::ALL {
            let status = OrderStatus::parse(name).expect("known status should parse");
            assert_eq!(status.as_str(), name);
        }
        assert!(OrderStatus::parse("pending").is_none());
    }
}
