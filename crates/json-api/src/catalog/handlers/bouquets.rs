//! List Bouquets Handler

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use posy::{catalog::Bouquet, money::format_price};

use crate::{catalog::errors::into_status_error, extensions::*};

/// Bouquet Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BouquetResponse {
    /// Bouquet id, also its product id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Price in cents
    pub price: u64,

    /// Formatted price
    pub price_display: String,

    /// Image reference
    pub image: String,

    /// Ids of the flowers in the arrangement
    pub flowers: Vec<String>,

    /// Whether the bouquet is featured
    pub popular: bool,
}

impl From<Bouquet> for BouquetResponse {
    fn from(bouquet: Bouquet) -> Self {
        Self {
            id: bouquet.id.to_string(),
            name: bouquet.name.to_string(),
            description: bouquet.description.to_string(),
            price: bouquet.price,
            price_display: format_price(bouquet.price),
            image: bouquet.image.to_string(),
            flowers: bouquet.flowers.iter().map(ToString::to_string).collect(),
            popular: bouquet.popular,
        }
    }
}

/// Bouquets Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BouquetsResponse {
    /// Matching bouquets, in catalog order
    pub bouquets: Vec<BouquetResponse>,
}

/// List Bouquets Handler
#[endpoint(tags("catalog"), summary = "List Bouquets")]
#[tracing::instrument(name = "catalog.bouquets", skip(popular, depot), err)]
pub(crate) async fn handler(
    popular: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<BouquetsResponse>, StatusError> {
    let state = depot.state()?;

    let bouquets = state
        .app
        .catalog
        .list_bouquets(popular.into_inner().unwrap_or(false))
        .await
        .map_err(into_status_error)?;

    Ok(Json(BouquetsResponse {
        bouquets: bouquets.into_iter().map(Into::into).collect(),
    }))
}
