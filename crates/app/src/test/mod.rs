//! Test support shared by the service tests.


pub(crate) use context::TestContext;

use posy::pickup::PickupDetails;

/// Complete pickup details for a date far enough ahead to always validate.
pub(crate) fn pickup_details() -> PickupDetails {
    PickupDetails {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        pickup_date: "2099-06-01".to_string(),
        pickup_time: "10:30".to_string(),
        special_instructions: Some("Wrap in brown paper".to_string()),
    }
}
