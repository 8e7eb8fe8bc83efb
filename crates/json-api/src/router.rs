//! App Router

use salvo::Router;

use crate::{builder, carts, catalog, checkout, contact, sessions};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("catalog")
                .push(Router::with_path("flowers").get(catalog::flowers::handler))
                .push(Router::with_path("bouquets").get(catalog::bouquets::handler))
                .push(Router::with_path("products/{product}").get(catalog::product::handler)),
        )
        .push(Router::with_path("contact").post(contact::create::handler))
        .push(
            Router::with_path("sessions")
                .post(sessions::create::handler)
                .push(
                    Router::with_path("{session}")
                        .delete(sessions::delete::handler)
                        .push(
                            Router::with_path("cart")
                                .get(carts::get::handler)
                                .push(
                                    Router::with_path("items")
                                        .post(carts::items::create::handler)
                                        .push(
                                            Router::with_path("{item}")
                                                .put(carts::items::update::handler)
                                                .delete(carts::items::delete::handler),
                                        ),
                                ),
                        )
                        .push(
                            Router::with_path("builder")
                                .get(builder::get::handler)
                                .push(Router::with_path("commit").post(builder::commit::handler))
                                .push(
                                    Router::with_path("flowers")
                                        .post(builder::flowers::create::handler)
                                        .push(
                                            Router::with_path("{flower}")
                                                .patch(builder::flowers::update::handler)
                                                .delete(builder::flowers::delete::handler),
                                        ),
                                ),
                        )
                        .push(
                            Router::with_path("checkout")
                                .get(checkout::get::handler)
                                .post(checkout::begin::handler)
                                .push(Router::with_path("details").put(checkout::details::handler))
                                .push(
                                    Router::with_path("payment")
                                        .post(checkout::payment::create::handler)
                                        .delete(checkout::payment::delete::handler),
                                )
                                .push(
                                    Router::with_path("complete").post(checkout::complete::handler),
                                ),
                        ),
                ),
        )
}
