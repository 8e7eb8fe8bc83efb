//! Email rendering.

use std::fmt::Write as _;

use posy::money::{format_price, line_total};

use crate::domain::notifications::models::{ContactMessage, Email, OrderConfirmation, StoreDetails};

/// Renders the order confirmation sent to the shopper.
///
/// # Errors
///
/// Returns an error if writing the body fails.
pub fn order_confirmation(
    confirmation: &OrderConfirmation,
    store: &StoreDetails,
) -> Result<Email, std::fmt::Error> {
    let mut body = String::new();

    writeln!(body, "Dear {},", confirmation.customer_name)?;
    writeln!(body)?;
    writeln!(
        body,
        "Thank you for your order! We're excited to prepare your beautiful flowers."
    )?;
    writeln!(body)?;
    writeln!(body, "Order Number: {}", confirmation.order_number)?;
    writeln!(body)?;
    writeln!(body, "Pickup Details:")?;
    writeln!(
        body,
        "- Date: {}",
        confirmation.pickup_date.strftime("%A, %B %-d, %Y")
    )?;
    writeln!(body, "- Time: {}", confirmation.pickup_time.strftime("%-I:%M %p"))?;
    writeln!(body, "- Location: {}", store.address)?;
    writeln!(body)?;
    writeln!(body, "Order Summary:")?;

    for line in &confirmation.items {
        writeln!(
            body,
            "- {} × {}: {}",
            line.name,
            line.quantity,
            format_price(line_total(line.unit_price, line.quantity))
        )?;
    }

    writeln!(body)?;
    writeln!(body, "Total: {}", format_price(confirmation.total))?;
    writeln!(body)?;
    writeln!(
        body,
        "We'll have your order ready for pickup at the scheduled time. If you need to make any \
         changes, please contact us at {} or {}.",
        store.phone, store.email
    )?;
    writeln!(body)?;
    writeln!(body, "With love and fresh blooms,")?;
    write!(body, "The {} Team", store.name)?;

    Ok(Email {
        to: confirmation.customer_email.clone(),
        reply_to: Some(store.email.to_string()),
        subject: format!("Your {} Order Confirmation", store.name),
        body,
    })
}

/// Renders a contact form message addressed to the shop.
///
/// # Errors
///
/// Returns an error if writing the body fails.
pub fn contact_message(message: &ContactMessage, store: &StoreDetails) -> Result<Email, std::fmt::Error> {
    let mut body = String::new();

    writeln!(body, "From: {} <{}>", message.name, message.email)?;

    if let Some(phone) = message.phone.as_deref().filter(|phone| !phone.trim().is_empty()) {
        writeln!(body, "Phone: {phone}")?;
    }

    writeln!(body)?;
    write!(body, "{}", message.message)?;

    Ok(Email {
        to: store.email.to_string(),
        reply_to: Some(message.email.clone()),
        subject: format!("[Contact] {}", message.subject),
        body,
    })
}
