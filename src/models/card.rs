use serde::{Deserialize, Serialize};

/// Fields needed to create a new debit card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    first_name: String,
    last_name: String,
    currency: String,
    pin: String,
}

impl CardDto {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        currency: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            currency: currency.into(),
            pin: pin.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }
}
