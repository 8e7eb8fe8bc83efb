//! Bouquet Builder
//!
//! A scratch selection of flowers, kept apart from the cart until it is committed as a single
//! custom bouquet line priced at the sum of its stems.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    cart::{Cart, CartError, CartLineItem, Composition, ItemKind, LineChange, NewCartItem, Stem},
    catalog::Flower,
    money::{MinorUnits, line_total},
};

/// Name given to committed bouquets when the shopper leaves it blank.
pub const DEFAULT_BOUQUET_NAME: &str = "Custom Bouquet";

/// Image used when a bouquet has no flower image to borrow.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Prefix of the ids given to committed custom bouquets.
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Errors raised by the builder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// Nothing has been selected.
    #[error("bouquet is empty")]
    EmptyBouquet,

    /// The flower cannot currently be ordered.
    #[error("flower {0:?} is out of stock")]
    OutOfStock(String),

    /// The committed bouquet could not be added to the cart.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// A flower picked in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// The picked flower
    pub flower: Flower,

    /// Number of stems
    pub quantity: u32,
}

impl Selection {
    /// Price of all stems of this flower.
    pub fn line_total(&self) -> MinorUnits {
        line_total(self.flower.price, self.quantity)
    }
}

/// Custom bouquet builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BouquetBuilder {
    selections: Vec<Selection>,
}

impl BouquetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one stem of a flower.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::OutOfStock`]: the flower is not in stock.
    /// - [`BuilderError::Cart`]: the selection already holds the maximum number of stems.
    pub fn add_flower(&mut self, flower: &Flower) -> Result<&Selection, BuilderError> {
        if !flower.in_stock {
            return Err(BuilderError::OutOfStock(flower.id.to_string()));
        }

        let index = match self.position(flower.id) {
            Some(index) => {
                if let Some(selection) = self.selections.get_mut(index) {
                    selection.quantity = bounded(i64::from(selection.quantity) + 1)?;
                }

                index
            }
            None => {
                self.selections.push(Selection {
                    flower: *flower,
                    quantity: 1,
                });

                self.selections.len() - 1
            }
        };

        self.selections
            .get(index)
            .ok_or(BuilderError::EmptyBouquet)
    }

    /// Applies a signed change to a selection's stem count; reaching zero removes it.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Cart`] when the result would exceed the per-line maximum.
    pub fn update_quantity(&mut self, flower_id: &str, delta: i64) -> Result<LineChange, BuilderError> {
        let Some(index) = self.position(flower_id) else {
            return Ok(LineChange::Untouched);
        };

        let Some(selection) = self.selections.get_mut(index) else {
            return Ok(LineChange::Untouched);
        };

        let quantity = i64::from(selection.quantity).saturating_add(delta);

        if quantity <= 0 {
            self.selections.remove(index);
            return Ok(LineChange::Removed);
        }

        selection.quantity = bounded(quantity)?;

        Ok(LineChange::Updated(selection.quantity))
    }

    /// Drops a flower from the selection. Returns whether anything was removed.
    pub fn remove_flower(&mut self, flower_id: &str) -> bool {
        let Some(index) = self.position(flower_id) else {
            return false;
        };

        self.selections.remove(index);

        true
    }

    /// Current selections in the order they were first picked.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Sum of `price × stems` over the selection.
    pub fn total(&self) -> MinorUnits {
        self.selections
            .iter()
            .map(Selection::line_total)
            .fold(0, MinorUnits::saturating_add)
    }

    /// Total number of stems selected.
    pub fn stem_count(&self) -> u64 {
        self.selections
            .iter()
            .map(|selection| u64::from(selection.quantity))
            .sum()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Discards the selection.
    pub fn reset(&mut self) {
        self.selections.clear();
    }

    /// Adds the selection to `cart` as one custom bouquet and resets the builder.
    ///
    /// The bouquet is named `name` (trimmed), falling back to [`DEFAULT_BOUQUET_NAME`], and is
    /// priced at [`BouquetBuilder::total`] with a quantity of one.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::EmptyBouquet`]: nothing is selected; the cart is left unchanged.
    /// - [`BuilderError::Cart`]: the cart rejected the line.
    pub fn commit(&mut self, cart: &mut Cart, name: Option<&str>) -> Result<CartLineItem, BuilderError> {
        let item = self.to_cart_item(name)?;

        let line = cart.add_item(item)?;

        self.reset();

        Ok(line)
    }

    fn to_cart_item(&self, name: Option<&str>) -> Result<NewCartItem, BuilderError> {
        let first = self.selections.first().ok_or(BuilderError::EmptyBouquet)?;

        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_BOUQUET_NAME);

        let image = if first.flower.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            first.flower.image
        };

        Ok(NewCartItem {
            id: format!("{CUSTOM_ID_PREFIX}{}", Uuid::now_v7().simple()),
            name: name.to_string(),
            unit_price: self.total(),
            quantity: 1,
            image_ref: image.to_string(),
            kind: ItemKind::Custom,
            composition: self
                .selections
                .iter()
                .map(|selection| Stem {
                    flower_id: selection.flower.id.to_string(),
                    quantity: selection.quantity,
                })
                .collect::<Composition>(),
        })
    }

    fn position(&self, flower_id: &str) -> Option<usize> {
        self.selections
            .iter()
            .position(|selection| selection.flower.id == flower_id)
    }
}

fn bounded(quantity: i64) -> Result<u32, BuilderError> {
    u32::try_from(quantity)
        .ok()
        .filter(|quantity| *quantity <= crate::cart::MAX_LINE_QUANTITY)
        .ok_or(BuilderError::Cart(CartError::QuantityExceedsLimit(
            quantity.unsigned_abs(),
        )))
}
