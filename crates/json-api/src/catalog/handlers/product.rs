//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use posy::{
    catalog::{Product, ProductKind},
    money::format_price,
};

use crate::{catalog::errors::into_status_error, extensions::*};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Unit price in cents
    pub unit_price: u64,

    /// Formatted unit price
    pub unit_price_display: String,

    /// Image reference
    pub image: String,

    /// `flower` or `bouquet`
    pub kind: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let kind = match product.kind {
            ProductKind::Flower => "flower",
            ProductKind::Bouquet => "bouquet",
        };

        Self {
            unit_price_display: format_price(product.unit_price),
            id: product.id,
            name: product.name,
            description: product.description,
            unit_price: product.unit_price,
            image: product.image,
            kind: kind.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Resolves a flower or bouquet id to what the cart and the payment provider see.
#[endpoint(
    tags("catalog"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
#[tracing::instrument(name = "catalog.product", skip(product, depot), fields(product_id = tracing::field::Empty), err)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state()?;
    let product = product.into_inner();

    tracing::Span::current().record("product_id", tracing::field::display(&product));

    let product = state
        .app
        .catalog
        .resolve(product)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
