//! Checkout
//!
//! The checkout state machine. A checkout moves `Cart → Details → PaymentPending → Completed`:
//!
//! - `Cart → Details` needs a non-empty cart.
//! - `Details → PaymentPending` needs valid pickup details. It snapshots the cart and yields a
//!   [`PaymentRequest`] for the payment provider.
//! - The provider's answer is applied with [`Checkout::attach_session`] or
//!   [`Checkout::payment_failed`]; failure returns to `Details`.
//! - `PaymentPending → Completed` happens only on [`Checkout::complete`], driven by the
//!   provider's completion signal for the attached session.
//!
//! Transitions are applied only on explicit results. Each payment attempt carries an
//! [`AttemptId`] so a provider answer that arrives after the attempt was abandoned is ignored.

use std::fmt;

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    cart::{Cart, CartLineItem, ItemKind},
    money::MinorUnits,
    orders::{Order, OrderNumber},
    pickup::{ConfirmedPickup, MissingFields, PickupDetails, ValidationError},
};

/// Checkout stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    /// Shopper is still editing the cart.
    Cart,

    /// Pickup details are being captured.
    Details,

    /// A payment session is being created or awaits completion.
    PaymentPending,

    /// The provider confirmed payment.
    Completed,
}

impl CheckoutStage {
    /// Stage name as used in payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            CheckoutStage::Cart => "cart",
            CheckoutStage::Details => "details",
            CheckoutStage::PaymentPending => "payment_pending",
            CheckoutStage::Completed => "completed",
        }
    }
}

impl fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by checkout transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout needs at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// The transition is not available from the current stage.
    #[error("checkout is in the {actual} stage, expected {expected}")]
    InvalidStage {
        /// Stage the transition starts from
        expected: CheckoutStage,

        /// Stage the checkout is in
        actual: CheckoutStage,
    },

    /// Pickup details are incomplete or invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A payment attempt is already under way.
    #[error("a payment attempt is already in progress")]
    PaymentInFlight,

    /// The payment attempt was abandoned before the provider answered.
    #[error("payment attempt {0} is no longer current")]
    StaleAttempt(AttemptId),

    /// Completion arrived before a payment session was attached.
    #[error("no payment session has been created")]
    NoPaymentSession,

    /// Completion names a different payment session.
    #[error("completion does not match the pending payment session")]
    SessionMismatch,
}

/// Identifies one attempt at creating a payment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptId(Uuid);

impl AttemptId {
    /// A fresh attempt id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying UUID.
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One `{productId, quantity}` pair sent to the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLine {
    /// Catalog product id
    pub product_id: String,

    /// Units to charge
    pub quantity: u32,
}

/// Payment lines for one session.
pub type PaymentLines = SmallVec<[PaymentLine; 8]>;

/// What the payment provider is asked to charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Attempt the request belongs to
    pub attempt: AttemptId,

    /// Lines to charge
    pub lines: PaymentLines,

    /// Cart total at the time of the request, in cents
    pub total: MinorUnits,
}

/// Opaque handle issued by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Session token the client uses to render the hosted payment form
    pub token: String,
}

/// Builds payment lines from cart lines.
///
/// Catalog items map one to one. Custom bouquets are charged as the stems they are made of, so
/// every line resolves against the catalog and the charged total matches the bouquet price.
/// Lines naming the same product are merged, keeping the first position.
pub fn payment_lines(items: &[CartLineItem]) -> PaymentLines {
    let mut lines = PaymentLines::new();

    let mut push = |product_id: &str, quantity: u32| {
        match lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => lines.push(PaymentLine {
                product_id: product_id.to_string(),
                quantity,
            }),
        }
    };

    for item in items {
        if item.kind == ItemKind::Custom && !item.composition.is_empty() {
            for stem in &item.composition {
                push(&stem.flower_id, stem.quantity.saturating_mul(item.quantity));
            }
        } else {
            push(&item.id, item.quantity);
        }
    }

    lines
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Cart,
    Details,
    PaymentPending {
        attempt: AttemptId,
        pickup: ConfirmedPickup,
        items: Vec<CartLineItem>,
        total: MinorUnits,
        session: Option<PaymentSession>,
    },
    Completed {
        order: Box<Order>,
        confirmation_sent: bool,
    },
}

/// Checkout state for one shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    state: State,
    last_error: Option<String>,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkout {
    /// A checkout in the `Cart` stage.
    pub fn new() -> Self {
        Self {
            state: State::Cart,
            last_error: None,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> CheckoutStage {
        match self.state {
            State::Cart => CheckoutStage::Cart,
            State::Details => CheckoutStage::Details,
            State::PaymentPending { .. } => CheckoutStage::PaymentPending,
            State::Completed { .. } => CheckoutStage::Completed,
        }
    }

    /// Message describing why the last payment attempt failed, if it did.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Current payment attempt, while payment is pending.
    pub fn attempt(&self) -> Option<AttemptId> {
        match &self.state {
            State::PaymentPending { attempt, .. } => Some(*attempt),
            _ => None,
        }
    }

    /// Session attached to the pending payment attempt.
    pub fn payment_session(&self) -> Option<&PaymentSession> {
        match &self.state {
            State::PaymentPending { session, .. } => session.as_ref(),
            _ => None,
        }
    }

    /// Cart lines captured for the pending payment attempt.
    pub fn pending_items(&self) -> Option<&[CartLineItem]> {
        match &self.state {
            State::PaymentPending { items, .. } => Some(items),
            _ => None,
        }
    }

    /// The confirmed order, once completed.
    pub fn order(&self) -> Option<&Order> {
        match &self.state {
            State::Completed { order, .. } => Some(order),
            _ => None,
        }
    }

    /// Whether the order confirmation was delivered.
    pub fn confirmation_sent(&self) -> bool {
        matches!(
            self.state,
            State::Completed {
                confirmation_sent: true,
                ..
            }
        )
    }

    /// Starts checkout: `Cart → Details`.
    ///
    /// Calling it again while capturing details is harmless; calling it after completion starts a
    /// new checkout.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::PaymentInFlight`]: a payment attempt is pending.
    pub fn begin(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        if let State::PaymentPending { .. } = self.state {
            return Err(CheckoutError::PaymentInFlight);
        }

        if cart.is_empty() {
            self.state = State::Cart;
            return Err(CheckoutError::EmptyCart);
        }

        self.state = State::Details;
        self.last_error = None;

        Ok(())
    }

    /// Checks that the cart may change.
    ///
    /// The cart is frozen while a payment attempt is pending; the order is built from the
    /// snapshot taken when the attempt started.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PaymentInFlight`] while payment is pending.
    pub fn ensure_cart_editable(&self) -> Result<(), CheckoutError> {
        match self.state {
            State::PaymentPending { .. } => Err(CheckoutError::PaymentInFlight),
            _ => Ok(()),
        }
    }

    /// Falls back to `Cart` if the cart was emptied while capturing details.
    ///
    /// Returns whether the stage changed.
    pub fn sync_with_cart(&mut self, cart: &Cart) -> bool {
        if self.state == State::Details && cart.is_empty() {
            self.state = State::Cart;
            return true;
        }

        false
    }

    /// Records that new pickup details were submitted.
    ///
    /// New details supersede any pending attempt, which returns the checkout to `Details`.
    /// Returns the abandoned attempt, if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidStage`] outside `Details` and `PaymentPending`.
    pub fn accept_details(&mut self) -> Result<Option<AttemptId>, CheckoutError> {
        match self.state {
            State::Details => Ok(None),
            State::PaymentPending { attempt, .. } => {
                self.state = State::Details;
                Ok(Some(attempt))
            }
            State::Cart | State::Completed { .. } => Err(self.invalid_stage(CheckoutStage::Details)),
        }
    }

    /// `Details → PaymentPending`: validates pickup details and snapshots the cart.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::PaymentInFlight`]: an attempt is already pending.
    /// - [`CheckoutError::InvalidStage`]: checkout is not capturing details.
    /// - [`CheckoutError::EmptyCart`]: the cart was emptied; checkout falls back to `Cart`.
    /// - [`CheckoutError::Validation`]: details are missing or invalid; checkout stays in `Details`.
    pub fn start_payment(
        &mut self,
        cart: &Cart,
        details: Option<&PickupDetails>,
        today: Date,
    ) -> Result<PaymentRequest, CheckoutError> {
        match self.state {
            State::Details => {}
            State::PaymentPending { .. } => return Err(CheckoutError::PaymentInFlight),
            State::Cart | State::Completed { .. } => {
                return Err(self.invalid_stage(CheckoutStage::Details));
            }
        }

        if cart.is_empty() {
            self.state = State::Cart;
            return Err(CheckoutError::EmptyCart);
        }

        let pickup = match details {
            Some(details) => details.validate(today)?,
            None => return Err(ValidationError::MissingFields(all_fields_missing()).into()),
        };

        let attempt = AttemptId::new();
        let lines = payment_lines(cart.items());
        let total = cart.total();

        self.state = State::PaymentPending {
            attempt,
            pickup,
            items: cart.items().to_vec(),
            total,
            session: None,
        };
        self.last_error = None;

        Ok(PaymentRequest {
            attempt,
            lines,
            total,
        })
    }

    /// Attaches the session the provider created for `attempt`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::StaleAttempt`] when `attempt` is not the pending attempt or
    /// already has a session.
    pub fn attach_session(
        &mut self,
        attempt: AttemptId,
        session: PaymentSession,
    ) -> Result<(), CheckoutError> {
        match &mut self.state {
            State::PaymentPending {
                attempt: current,
                session: slot @ None,
                ..
            } if *current == attempt => {
                *slot = Some(session);
                Ok(())
            }
            _ => Err(CheckoutError::StaleAttempt(attempt)),
        }
    }

    /// Records that the provider could not create a session for `attempt`; checkout returns to
    /// `Details` carrying `reason`.
    ///
    /// Returns `false` and changes nothing if `attempt` is no longer current.
    pub fn payment_failed(&mut self, attempt: AttemptId, reason: impl fmt::Display) -> bool {
        if self.attempt() != Some(attempt) {
            return false;
        }

        self.state = State::Details;
        self.last_error = Some(reason.to_string());

        true
    }

    /// Abandons the pending payment attempt: `PaymentPending → Details`. The cart is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidStage`] when no payment is pending.
    pub fn cancel_payment(&mut self) -> Result<AttemptId, CheckoutError> {
        let Some(attempt) = self.attempt() else {
            return Err(self.invalid_stage(CheckoutStage::PaymentPending));
        };

        self.state = State::Details;

        Ok(attempt)
    }

    /// `PaymentPending → Completed` on the provider's completion signal for `token`.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::InvalidStage`]: no payment is pending.
    /// - [`CheckoutError::NoPaymentSession`]: the provider has not issued a session yet.
    /// - [`CheckoutError::SessionMismatch`]: `token` is not the pending session's token.
    pub fn complete(
        &mut self,
        token: &str,
        order_number: OrderNumber,
        placed_at: Timestamp,
    ) -> Result<Order, CheckoutError> {
        let State::PaymentPending {
            pickup,
            items,
            total,
            session,
            ..
        } = &self.state
        else {
            return Err(self.invalid_stage(CheckoutStage::PaymentPending));
        };

        let Some(session) = session else {
            return Err(CheckoutError::NoPaymentSession);
        };

        if session.token != token {
            return Err(CheckoutError::SessionMismatch);
        }

        let order = Order {
            order_number,
            pickup: pickup.clone(),
            items: items.clone(),
            total: *total,
            placed_at,
        };

        self.state = State::Completed {
            order: Box::new(order.clone()),
            confirmation_sent: false,
        };
        self.last_error = None;

        Ok(order)
    }

    /// Records whether the order confirmation reached the shopper.
    pub fn record_confirmation(&mut self, delivered: bool) {
        if let State::Completed {
            confirmation_sent, ..
        } = &mut self.state
        {
            *confirmation_sent = delivered;
        }
    }

    /// Returns to the `Cart` stage, discarding any order or pending attempt.
    pub fn reset(&mut self) {
        self.state = State::Cart;
        self.last_error = None;
    }

    fn invalid_stage(&self, expected: CheckoutStage) -> CheckoutError {
        CheckoutError::InvalidStage {
            expected,
            actual: self.stage(),
        }
    }
}

/// All required fields, as reported when no details were captured.
pub fn all_fields_missing() -> MissingFields {
    PickupDetails::default().missing_fields()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::cart::{Composition, NewCartItem, Stem};

    use super::*;

    const TODAY: Date = date(2026, 10, 18);

    fn rose(quantity: u32) -> NewCartItem {
        NewCartItem {
            id: "rose-red".to_string(),
            name: "Red Roses".to_string(),
            unit_price: 4_99,
            quantity,
            image_ref: String::new(),
            kind: ItemKind::Flower,
            composition: Composition::new(),
        }
    }

    fn custom() -> NewCartItem {
        NewCartItem {
            id: "custom-abc".to_string(),
            name: "Custom Bouquet".to_string(),
            unit_price: 13_97,
            quantity: 2,
            image_ref: String::new(),
            kind: ItemKind::Custom,
            composition: [
                Stem {
                    flower_id: "tulip-red".to_string(),
                    quantity: 2,
                },
                Stem {
                    flower_id: "rose-red".to_string(),
                    quantity: 1,
                },
            ]
            .into_iter()
            .collect(),
        }
    }

    fn details() -> PickupDetails {
        PickupDetails {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            pickup_date: "2026-10-19".to_string(),
            pickup_time: "10:00".to_string(),
            special_instructions: Some("Ring the bell".to_string()),
        }
    }

    fn cart_with_rose() -> Result<Cart, crate::cart::CartError> {
        let mut cart = Cart::new();

        cart.add_item(rose(2))?;

        Ok(cart)
    }

    fn pending(cart: &Cart) -> Result<(Checkout, PaymentRequest), CheckoutError> {
        let mut checkout = Checkout::new();

        checkout.begin(cart)?;
        let request = checkout.start_payment(cart, Some(&details()), TODAY)?;

        Ok((checkout, request))
    }

    fn session(token: &str) -> PaymentSession {
        PaymentSession {
            token: token.to_string(),
        }
    }

    #[test]
    fn begin_requires_a_non_empty_cart() {
        let mut checkout = Checkout::new();

        assert_eq!(checkout.begin(&Cart::new()), Err(CheckoutError::EmptyCart));
        assert_eq!(checkout.stage(), CheckoutStage::Cart);
    }

    #[test]
    fn begin_moves_to_details() -> TestResult {
        let cart = cart_with_rose()?;
        let mut checkout = Checkout::new();

        checkout.begin(&cart)?;
        checkout.begin(&cart)?;

        assert_eq!(checkout.stage(), CheckoutStage::Details);

        Ok(())
    }

    #[test]
    fn emptying_the_cart_returns_details_to_cart() -> TestResult {
        let mut cart = cart_with_rose()?;
        let mut checkout = Checkout::new();

        checkout.begin(&cart)?;

        assert!(!checkout.sync_with_cart(&cart));

        cart.clear();

        assert!(checkout.sync_with_cart(&cart));
        assert_eq!(checkout.stage(), CheckoutStage::Cart);

        Ok(())
    }

    #[test]
    fn start_payment_refuses_missing_fields() -> TestResult {
        let cart = cart_with_rose()?;
        let mut checkout = Checkout::new();
        let mut details = details();

        details.phone = String::new();

        checkout.begin(&cart)?;

        let result = checkout.start_payment(&cart, Some(&details), TODAY);

        assert!(
            matches!(
                &result,
                Err(CheckoutError::Validation(ValidationError::MissingFields(missing)))
                    if missing.fields() == [crate::pickup::RequiredField::Phone]
            ),
            "expected missing phone, got {result:?}"
        );
        assert_eq!(checkout.stage(), CheckoutStage::Details);

        Ok(())
    }

    #[test]
    fn start_payment_without_details_reports_every_field() -> TestResult {
        let cart = cart_with_rose()?;
        let mut checkout = Checkout::new();

        checkout.begin(&cart)?;

        assert_eq!(
            checkout.start_payment(&cart, None, TODAY),
            Err(CheckoutError::Validation(ValidationError::MissingFields(
                all_fields_missing()
            )))
        );

        Ok(())
    }

    #[test]
    fn start_payment_requires_details_stage() -> TestResult {
        let cart = cart_with_rose()?;
        let mut checkout = Checkout::new();

        assert_eq!(
            checkout.start_payment(&cart, Some(&details()), TODAY),
            Err(CheckoutError::InvalidStage {
                expected: CheckoutStage::Details,
                actual: CheckoutStage::Cart,
            })
        );

        Ok(())
    }

    #[test]
    fn start_payment_with_emptied_cart_falls_back_to_cart() -> TestResult {
        let mut cart = cart_with_rose()?;
        let mut checkout = Checkout::new();

        checkout.begin(&cart)?;
        cart.clear();

        assert_eq!(
            checkout.start_payment(&cart, Some(&details()), TODAY),
            Err(CheckoutError::EmptyCart)
        );
        assert_eq!(checkout.stage(), CheckoutStage::Cart);

        Ok(())
    }

    #[test]
    fn start_payment_snapshots_the_cart() -> TestResult {
        let cart = cart_with_rose()?;
        let (checkout, request) = pending(&cart)?;

        assert_eq!(checkout.stage(), CheckoutStage::PaymentPending);
        assert_eq!(checkout.attempt(), Some(request.attempt));
        assert_eq!(request.total, 9_98);
        assert_eq!(
            request.lines.as_slice(),
            [PaymentLine {
                product_id: "rose-red".to_string(),
                quantity: 2
            }]
        );
        assert_eq!(checkout.pending_items(), Some(cart.items()));

        Ok(())
    }

    #[test]
    fn second_attempt_while_pending_is_refused() -> TestResult {
        let cart = cart_with_rose()?;
        let (mut checkout, _request) = pending(&cart)?;

        assert_eq!(
            checkout.start_payment(&cart, Some(&details()), TODAY),
            Err(CheckoutError::PaymentInFlight)
        );
        assert_eq!(checkout.begin(&cart), Err(CheckoutError::PaymentInFlight));

        Ok(())
    }

    #[test]
    fn failed_session_returns_to_details_with_error() -> TestResult {
        let cart = cart_with_rose()?;
        let (mut checkout, request) = pending(&cart)?;

        assert!(checkout.payment_failed(request.attempt, "card processor unavailable"));
        assert_eq!(checkout.stage(), CheckoutStage::Details);
        assert_eq!(checkout.last_error(), Some("card processor unavailable"));

        Ok(())
    }

    #[test]
    fn late_answers_for_abandoned_attempts_are_ignored() -> TestResult {
        let cart = cart_with_rose()?;
        let (mut checkout, request) = pending(&cart)?;

        checkout.cancel_payment()?;

        assert_eq!(
            checkout.attach_session(request.attempt, session("cs_1")),
            Err(CheckoutError::StaleAttempt(request.attempt))
        );
        assert!(!checkout.payment_failed(request.attempt, "late"));
        assert_eq!(checkout.last_error(), None);
        assert_eq!(checkout.stage(), CheckoutStage::Details);

        Ok(())
    }

    #[test]
    fn new_details_supersede_the_pending_attempt() -> TestResult {
        let cart = cart_with_rose()?;
        let (mut checkout, request) = pending(&cart)?;

        assert_eq!(checkout.accept_details()?, Some(request.attempt));
        assert_eq!(checkout.stage(), CheckoutStage::Details);
        assert_eq!(checkout.accept_details()?, None);

        Ok(())
    }

    #[test]
    fn details_cannot_be_accepted_before_checkout_begins() {
        let mut checkout = Checkout::new();

        assert!(matches!(
            checkout.accept_details(),
            Err(CheckoutError::InvalidStage { .. })
        ));
    }

    #[test]
    fn complete_requires_the_attached_session() -> TestResult {
        let cart = cart_with_rose()?;
        let (mut checkout, request) = pending(&cart)?;

        assert_eq!(
            checkout
                .complete("cs_1", OrderNumber::generate(), Timestamp::UNIX_EPOCH)
                .map(|order| order.total),
            Err(CheckoutError::NoPaymentSession)
        );

        checkout.attach_session(request.attempt, session("cs_1"))?;

        assert_eq!(
            checkout
                .complete("cs_2", OrderNumber::generate(), Timestamp::UNIX_EPOCH)
                .map(|order| order.total),
            Err(CheckoutError::SessionMismatch)
        );
        assert_eq!(checkout.stage(), CheckoutStage::PaymentPending);

        Ok(())
    }

    #[test]
    fn cart_is_frozen_only_while_payment_is_pending() -> TestResult {
        let cart = cart_with_rose()?;
        let mut checkout = Checkout::new();

        assert_eq!(checkout.ensure_cart_editable(), Ok(()));

        checkout.begin(&cart)?;

        assert_eq!(checkout.ensure_cart_editable(), Ok(()));

        checkout.start_payment(&cart, Some(&details()), TODAY)?;

        assert_eq!(
            checkout.ensure_cart_editable(),
            Err(CheckoutError::PaymentInFlight)
        );

        checkout.cancel_payment()?;

        assert_eq!(checkout.ensure_cart_editable(), Ok(()));

        Ok(())
    }

    #[test]
    fn complete_builds_the_order_from_the_snapshot() -> TestResult {
        let mut cart = cart_with_rose()?;
        let (mut checkout, request) = pending(&cart)?;

        checkout.attach_session(request.attempt, session("cs_1"))?;

        cart.add_item(rose(5))?;

        let number = OrderNumber::new("LF-TEST");
        let order = checkout.complete("cs_1", number.clone(), Timestamp::UNIX_EPOCH)?;

        assert_eq!(order.order_number, number);
        assert_eq!(order.total, 9_98);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.pickup.details, details());
        assert_eq!(checkout.stage(), CheckoutStage::Completed);
        assert!(!checkout.confirmation_sent());

        checkout.record_confirmation(true);

        assert!(checkout.confirmation_sent());

        Ok(())
    }

    #[test]
    fn completed_checkout_can_begin_again() -> TestResult {
        let cart = cart_with_rose()?;
        let (mut checkout, request) = pending(&cart)?;

        checkout.attach_session(request.attempt, session("cs_1"))?;
        checkout.complete("cs_1", OrderNumber::generate(), Timestamp::UNIX_EPOCH)?;

        checkout.begin(&cart)?;

        assert_eq!(checkout.stage(), CheckoutStage::Details);
        assert!(checkout.order().is_none());

        Ok(())
    }

    #[test]
    fn cancel_requires_a_pending_payment() {
        let mut checkout = Checkout::new();

        assert_eq!(
            checkout.cancel_payment(),
            Err(CheckoutError::InvalidStage {
                expected: CheckoutStage::PaymentPending,
                actual: CheckoutStage::Cart,
            })
        );
    }

    #[test]
    fn custom_bouquets_are_charged_as_their_stems() -> TestResult {
        let mut cart = Cart::new();

        cart.add_item(rose(1))?;
        cart.add_item(custom())?;

        let lines = payment_lines(cart.items());

        assert_eq!(
            lines.as_slice(),
            [
                PaymentLine {
                    product_id: "rose-red".to_string(),
                    quantity: 3
                },
                PaymentLine {
                    product_id: "tulip-red".to_string(),
                    quantity: 4
                },
            ]
        );

        Ok(())
    }
}
