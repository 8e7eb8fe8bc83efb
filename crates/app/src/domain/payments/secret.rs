//! Payment provider secret key.

use std::fmt;

use zeroize::Zeroize;

/// Secret API key for the payment provider. Never printed; wiped on drop.
#[derive(Clone)]
pub struct PaymentsSecretKey(String);

impl PaymentsSecretKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PaymentsSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PaymentsSecretKey(**redacted**)")?;
        Ok(())
    }
}

impl Drop for PaymentsSecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
