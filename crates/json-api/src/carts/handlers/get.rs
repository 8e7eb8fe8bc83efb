//! Get Cart Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use posy::{
    cart::{CartLineItem, ItemKind, Stem},
    money::format_price,
};
use posy_app::domain::carts::models::CartSummary;

use crate::{carts::errors::into_status_error, extensions::*};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines in insertion order
    pub items: Vec<CartItemResponse>,

    /// Number of units across all lines
    pub item_count: u64,

    /// Sum of line totals in cents
    pub subtotal: u64,

    /// Formatted subtotal
    pub subtotal_display: String,
}

impl From<CartSummary> for CartResponse {
    fn from(cart: CartSummary) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            item_count: cart.item_count,
            subtotal_display: format_price(cart.subtotal),
            subtotal: cart.subtotal,
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    /// Product id, or `custom-…` for builder bouquets
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price in cents
    pub unit_price: u64,

    /// Units on the line
    pub quantity: u32,

    /// `unit_price × quantity` in cents
    pub line_total: u64,

    /// Image reference
    pub image: String,

    /// `flower`, `bouquet` or `custom`
    pub kind: String,

    /// Stems making up a custom bouquet
    pub composition: Vec<StemResponse>,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(line: CartLineItem) -> Self {
        let kind = match line.kind {
            ItemKind::Flower => "flower",
            ItemKind::Bouquet => "bouquet",
            ItemKind::Custom => "custom",
        };

        Self {
            line_total: line.line_total(),
            id: line.id,
            name: line.name,
            unit_price: line.unit_price,
            quantity: line.quantity,
            image: line.image_ref,
            kind: kind.to_string(),
            composition: line.composition.into_iter().map(StemResponse::from).collect(),
        }
    }
}

/// Stem Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StemResponse {
    /// Catalog flower id
    pub flower_id: String,

    /// Number of stems
    pub quantity: u32,
}

impl From<Stem> for StemResponse {
    fn from(stem: Stem) -> Self {
        Self {
            flower_id: stem.flower_id,
            quantity: stem.quantity,
        }
    }
}

/// Get Cart Handler
///
/// Returns the session's cart with its item count and subtotal.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
    ),
)]
#[tracing::instrument(
    name = "carts.get",
    skip(session, depot),
    fields(session = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    tracing::Span::current().record("session", tracing::field::display(session));

    let cart = state
        .app
        .carts
        .get_cart(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
