//! Orders

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{cart::CartLineItem, money::MinorUnits, pickup::ConfirmedPickup};

/// Prefix of every order number.
pub const ORDER_NUMBER_PREFIX: &str = "LF-";

/// Human-facing order reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generates a new order number from a time-ordered UUID.
    pub fn generate() -> Self {
        Self(format!(
            "{ORDER_NUMBER_PREFIX}{}",
            Uuid::now_v7().simple().to_string().to_uppercase()
        ))
    }

    /// Wraps an existing order number.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The order number text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A paid order, as confirmed to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order reference
    pub order_number: OrderNumber,

    /// Who collects the order and when
    pub pickup: ConfirmedPickup,

    /// Cart lines as they were when payment started
    pub items: Vec<CartLineItem>,

    /// Total charged, in cents
    pub total: MinorUnits,

    /// When the payment provider confirmed the order
    pub placed_at: Timestamp,
}

impl Order {
    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
