//! List Flowers Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use posy::{
    catalog::{Category, Flower},
    money::format_price,
};
use posy_app::domain::catalog::CatalogServiceError;

use crate::{catalog::errors::into_status_error, extensions::*};

/// Flower Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FlowerResponse {
    /// Flower id, also its product id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Price per stem in cents
    pub price: u64,

    /// Formatted price per stem
    pub price_display: String,

    /// Image reference
    pub image: String,

    /// Category name
    pub category: String,

    /// Colours the flower comes in
    pub colors: Vec<String>,

    /// Whether the flower can be ordered
    pub in_stock: bool,
}

impl From<Flower> for FlowerResponse {
    fn from(flower: Flower) -> Self {
        Self {
            id: flower.id.to_string(),
            name: flower.name.to_string(),
            description: flower.description.to_string(),
            price: flower.price,
            price_display: format_price(flower.price),
            image: flower.image.to_string(),
            category: flower.category.to_string(),
            colors: flower.colors.iter().map(ToString::to_string).collect(),
            in_stock: flower.in_stock,
        }
    }
}

/// Flowers Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FlowersResponse {
    /// Matching flowers, in catalog order
    pub flowers: Vec<FlowerResponse>,
}

/// List Flowers Handler
///
/// Returns the flowers sold by the stem, optionally of one category or only those in stock.
#[endpoint(
    tags("catalog"),
    summary = "List Flowers",
    responses(
        (status_code = StatusCode::OK, description = "Flowers"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown category"),
    ),
)]
#[tracing::instrument(name = "catalog.flowers", skip(category, in_stock, depot), err)]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    in_stock: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<FlowersResponse>, StatusError> {
    let state = depot.state()?;

    let category = category
        .into_inner()
        .filter(|category| !category.trim().is_empty())
        .map(|category| {
            category
                .parse::<Category>()
                .map_err(CatalogServiceError::from)
        })
        .transpose()
        .map_err(into_status_error)?;

    let flowers = state
        .app
        .catalog
        .list_flowers(category, in_stock.into_inner().unwrap_or(false))
        .await
        .map_err(into_status_error)?;

    Ok(Json(FlowersResponse {
        flowers: flowers.into_iter().map(Into::into).collect(),
    }))
}
