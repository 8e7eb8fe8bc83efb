//! Get Builder Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use posy::{builder::Selection, money::format_price};
use posy_app::domain::builder::models::BuilderSummary;

use crate::{builder::errors::into_status_error, extensions::*};

/// Builder Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BuilderResponse {
    /// Flowers picked so far, in the order they were first picked
    pub selections: Vec<SelectionResponse>,

    /// Stems across all selections
    pub stem_count: u64,

    /// Bouquet price in cents
    pub total: u64,

    /// Formatted bouquet price
    pub total_display: String,
}

impl From<BuilderSummary> for BuilderResponse {
    fn from(summary: BuilderSummary) -> Self {
        Self {
            selections: summary
                .selections
                .into_iter()
                .map(SelectionResponse::from)
                .collect(),
            stem_count: summary.stem_count,
            total_display: format_price(summary.total),
            total: summary.total,
        }
    }
}

/// Selection Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SelectionResponse {
    /// Catalog flower id
    pub flower_id: String,

    /// Flower name
    pub name: String,

    /// Price per stem in cents
    pub unit_price: u64,

    /// Stems selected
    pub quantity: u32,

    /// Price of the selected stems in cents
    pub line_total: u64,
}

impl From<Selection> for SelectionResponse {
    fn from(selection: Selection) -> Self {
        Self {
            flower_id: selection.flower.id.to_string(),
            name: selection.flower.name.to_string(),
            unit_price: selection.flower.price,
            quantity: selection.quantity,
            line_total: selection.line_total(),
        }
    }
}

/// Get Builder Handler
///
/// Returns the custom bouquet being assembled and its running total.
#[endpoint(
    tags("builder"),
    summary = "Get Bouquet Builder",
    responses(
        (status_code = StatusCode::OK, description = "Builder selection"),
        (status_code = StatusCode::NOT_FOUND, description = "Session not found"),
    ),
)]
#[tracing::instrument(
    name = "builder.get",
    skip(session, depot),
    fields(session = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    session: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BuilderResponse>, StatusError> {
    let state = depot.state()?;
    let session = session.into_session();

    tracing::Span::current().record("session", tracing::field::display(session));

    let summary = state
        .app
        .builder
        .get_builder(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use posy::{builder::BouquetBuilder, catalog::Catalog};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use posy_app::domain::sessions::models::SessionUuid;

    use crate::test_helpers::MockServices;

    use super::*;

    #[tokio::test]
    async fn test_get_builder_returns_selection_and_total() -> TestResult {
        let mut mocks = MockServices::default();
        let session = SessionUuid::new();
        let catalog = Catalog::florist();
        let mut builder = BouquetBuilder::new();

        for flower in ["tulip-red", "tulip-red", "lily-white"] {
            if let Some(flower) = catalog.flower(flower) {
                builder.add_flower(flower)?;
            }
        }

        let summary = BuilderSummary::from(&builder);

        mocks
            .builder
            .expect_get_builder()
            .once()
            .withf(move |s| *s == session)
            .return_once(move |_| Ok(summary));

        let mut res = TestClient::get(format!("http://example.com/sessions/{session}/builder"))
            .send(&mocks.service(Router::with_path("sessions/{session}/builder").get(handler)))
            .await;

        let body: BuilderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.selections.len(), 2);
        assert_eq!(body.stem_count, 3);
        assert_eq!(body.total, 13_97);
        assert_eq!(body.total_display, "$13.97");

        Ok(())
    }
}
