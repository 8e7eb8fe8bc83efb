//! Cart
//!
//! The shopper's cart: an ordered, de-duplicated list of line items. Adding an id that is already
//! present merges quantities into the existing line, which keeps its position. A line never holds
//! a quantity below one; reducing it to zero removes it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    catalog::{Product, ProductKind},
    money::{MinorUnits, line_total},
};

/// Maximum quantity a single cart line may hold.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Items must be added with a quantity of at least one.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// The resulting line quantity would exceed [`MAX_LINE_QUANTITY`].
    #[error("quantity {0} exceeds the limit of {MAX_LINE_QUANTITY} per line")]
    QuantityExceedsLimit(u64),
}

/// Kind of purchasable a line item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A single flower
    Flower,

    /// A catalog bouquet
    Bouquet,

    /// A bouquet assembled in the builder
    Custom,
}

impl From<ProductKind> for ItemKind {
    fn from(kind: ProductKind) -> Self {
        match kind {
            ProductKind::Flower => ItemKind::Flower,
            ProductKind::Bouquet => ItemKind::Bouquet,
        }
    }
}

/// Stems of one flower inside a custom bouquet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stem {
    /// Catalog flower id
    pub flower_id: String,

    /// Number of stems of that flower
    pub quantity: u32,
}

/// Flowers making up a custom bouquet.
pub type Composition = SmallVec<[Stem; 4]>;

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product id, or `custom-…` for builder output
    pub id: String,

    /// Display name
    pub name: String,

    /// Price of one unit in cents
    pub unit_price: MinorUnits,

    /// Always at least one
    pub quantity: u32,

    /// Image reference
    pub image_ref: String,

    /// Flower, bouquet or custom bouquet
    pub kind: ItemKind,

    /// Stems of a custom bouquet; empty for catalog items
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub composition: Composition,
}

impl CartLineItem {
    /// Price of the whole line.
    pub fn line_total(&self) -> MinorUnits {
        line_total(self.unit_price, self.quantity)
    }
}

/// Item to be added to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    /// Product id
    pub id: String,

    /// Display name
    pub name: String,

    /// Price of one unit in cents
    pub unit_price: MinorUnits,

    /// Quantity to add
    pub quantity: u32,

    /// Image reference
    pub image_ref: String,

    /// Item kind
    pub kind: ItemKind,

    /// Stems of a custom bouquet
    pub composition: Composition,
}

impl NewCartItem {
    /// A single unit of a catalog product.
    pub fn from_product(product: Product) -> Self {
        NewCartItem {
            id: product.id,
            name: product.name,
            unit_price: product.unit_price,
            quantity: 1,
            image_ref: product.image,
            kind: product.kind.into(),
            composition: Composition::new(),
        }
    }

    /// Sets the quantity to add.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Outcome of a quantity change on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// The line now holds this quantity.
    Updated(u32),

    /// The line was removed.
    Removed,

    /// No line had the id; nothing changed.
    Untouched,
}

/// Shopping cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, merging into an existing line with the same id.
    ///
    /// New ids are appended; merged lines keep their position. Returns the line as it now stands.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: the item quantity is zero.
    /// - [`CartError::QuantityExceedsLimit`]: the line would exceed [`MAX_LINE_QUANTITY`].
    pub fn add_item(&mut self, item: NewCartItem) -> Result<CartLineItem, CartError> {
        if item.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        if let Some(line) = self.items.iter_mut().find(|line| line.id == item.id) {
            line.quantity = checked_quantity(u64::from(line.quantity) + u64::from(item.quantity))?;

            return Ok(line.clone());
        }

        let line = CartLineItem {
            quantity: checked_quantity(u64::from(item.quantity))?,
            id: item.id,
            name: item.name,
            unit_price: item.unit_price,
            image_ref: item.image_ref,
            kind: item.kind,
            composition: item.composition,
        };

        self.items.push(line.clone());

        Ok(line)
    }

    /// Sets the quantity of a line directly. Zero or less removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityExceedsLimit`] when `quantity` exceeds [`MAX_LINE_QUANTITY`].
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<LineChange, CartError> {
        let Some(index) = self.position(id) else {
            return Ok(LineChange::Untouched);
        };

        if quantity <= 0 {
            self.items.remove(index);
            return Ok(LineChange::Removed);
        }

        let quantity = checked_quantity(quantity.unsigned_abs())?;

        if let Some(line) = self.items.get_mut(index) {
            line.quantity = quantity;
        }

        Ok(LineChange::Updated(quantity))
    }

    /// Removes a line. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.items.remove(index);

        true
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price × quantity` over all lines.
    pub fn total(&self) -> MinorUnits {
        self.items
            .iter()
            .map(CartLineItem::line_total)
            .fold(0, MinorUnits::saturating_add)
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Finds a line by id.
    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|line| line.id == id)
    }
}

fn checked_quantity(quantity: u64) -> Result<u32, CartError> {
    u32::try_from(quantity)
        .ok()
        .filter(|quantity| *quantity <= MAX_LINE_QUANTITY)
        .ok_or(CartError::QuantityExceedsLimit(quantity))
}
