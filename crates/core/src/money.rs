//! Money

use rusty_money::{Money, iso};

/// Currency every price in the store is quoted in.
pub const STORE_CURRENCY: &iso::Currency = iso::USD;

/// Amount in minor units (cents) of [`STORE_CURRENCY`].
pub type MinorUnits = u64;

/// Wraps an amount of minor units as store-currency [`Money`].
///
/// Amounts beyond `i64::MAX` cents are clamped; no catalog price gets close.
pub fn to_money(amount: MinorUnits) -> Money<'static, iso::Currency> {
    Money::from_minor(i64::try_from(amount).unwrap_or(i64::MAX), STORE_CURRENCY)
}

/// Formats an amount of minor units for display, e.g. `$9.98`.
pub fn format_price(amount: MinorUnits) -> String {
    to_money(amount).to_string()
}

/// Price of `quantity` units at `unit_price`.
pub fn line_total(unit_price: MinorUnits, quantity: u32) -> MinorUnits {
    unit_price.saturating_mul(MinorUnits::from(quantity))
}
