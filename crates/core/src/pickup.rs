//! Pickup Details
//!
//! Contact and scheduling information captured at checkout. Details are kept as the shopper typed
//! them and validated only when checkout tries to move on to payment.

use std::fmt;

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Store opening time; the earliest bookable pickup.
pub const STORE_OPENS: Time = Time::constant(9, 0, 0, 0);

/// Store closing time; the latest bookable pickup.
pub const STORE_CLOSES: Time = Time::constant(18, 0, 0, 0);

/// Fields a shopper must fill in before paying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// Full name
    Name,

    /// Email address
    Email,

    /// Phone number
    Phone,

    /// Pickup date
    PickupDate,

    /// Pickup time
    PickupTime,
}

impl RequiredField {
    /// Field name as it appears in payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::PickupDate => "pickup_date",
            RequiredField::PickupTime => "pickup_time",
        }
    }
}

/// Required fields left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingFields(pub SmallVec<[RequiredField; 5]>);

impl MissingFields {
    /// The blank fields, in form order.
    pub fn fields(&self) -> &[RequiredField] {
        &self.0
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            f.write_str(field.as_str())?;
        }

        Ok(())
    }
}

/// Reasons pickup details cannot be used for payment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are blank.
    #[error("missing required fields: {0}")]
    MissingFields(MissingFields),

    /// The email address is not plausible.
    #[error("email address {0:?} is invalid")]
    InvalidEmail(String),

    /// The pickup date is not a calendar date.
    #[error("pickup date {0:?} is not a valid date")]
    InvalidPickupDate(String),

    /// The pickup date is before today.
    #[error("pickup date {date} is in the past (today is {today})")]
    PickupDateInPast {
        /// Requested date
        date: Date,

        /// Date validation ran on
        today: Date,
    },

    /// The pickup time is not `HH:MM`.
    #[error("pickup time {0:?} is not a valid time")]
    InvalidPickupTime(String),

    /// The pickup time falls outside opening hours.
    #[error("pickup time {0} is outside store hours ({STORE_OPENS} - {STORE_CLOSES})")]
    OutsideStoreHours(Time),
}

/// Pickup details as submitted by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupDetails {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Pickup date, `YYYY-MM-DD`
    pub pickup_date: String,

    /// Pickup time, `HH:MM`
    pub pickup_time: String,

    /// Optional notes for the florist
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Pickup details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedPickup {
    /// The details as submitted
    pub details: PickupDetails,

    /// Parsed pickup date
    pub date: Date,

    /// Parsed pickup time
    pub time: Time,
}

impl PickupDetails {
    /// Required fields that are blank, in form order.
    pub fn missing_fields(&self) -> MissingFields {
        let fields = [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Phone, &self.phone),
            (RequiredField::PickupDate, &self.pickup_date),
            (RequiredField::PickupTime, &self.pickup_time),
        ];

        MissingFields(
            fields
                .into_iter()
                .filter(|(_, value)| value.trim().is_empty())
                .map(|(field, _)| field)
                .collect(),
        )
    }

    /// Checks the details can be used to book a pickup on or after `today`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: blank required fields are reported together
    /// before any format checks run.
    pub fn validate(&self, today: Date) -> Result<ConfirmedPickup, ValidationError> {
        let missing = self.missing_fields();

        if !missing.0.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }

        let date: Date = self
            .pickup_date
            .trim()
            .parse()
            .map_err(|_source| ValidationError::InvalidPickupDate(self.pickup_date.clone()))?;

        if date < today {
            return Err(ValidationError::PickupDateInPast { date, today });
        }

        let time: Time = self
            .pickup_time
            .trim()
            .parse()
            .map_err(|_source| ValidationError::InvalidPickupTime(self.pickup_time.clone()))?;

        if time < STORE_OPENS || time > STORE_CLOSES {
            return Err(ValidationError::OutsideStoreHours(time));
        }

        Ok(ConfirmedPickup {
            details: self.clone(),
            date,
            time,
        })
    }
}
