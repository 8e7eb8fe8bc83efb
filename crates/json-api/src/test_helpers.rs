//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use posy_app::{
    context::AppContext,
    domain::{
        builder::MockBuilderService, carts::MockCartsService, catalog::MockCatalogService,
        checkout::MockCheckoutService, contact::MockContactService,
        sessions::MockSessionsService,
    },
};

use crate::state::State;

/// Mocked app services; anything a test leaves unconfigured fails when called.
#[derive(Default)]
pub(crate) struct MockServices {
    pub(crate) catalog: MockCatalogService,
    pub(crate) sessions: MockSessionsService,
    pub(crate) carts: MockCartsService,
    pub(crate) builder: MockBuilderService,
    pub(crate) checkout: MockCheckoutService,
    pub(crate) contact: MockContactService,
}

impl MockServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            catalog: Arc::new(self.catalog),
            sessions: Arc::new(self.sessions),
            carts: Arc::new(self.carts),
            builder: Arc::new(self.builder),
            checkout: Arc::new(self.checkout),
            contact: Arc::new(self.contact),
        })
    }

    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}
