//! Address Models

use serde::{Deserialize, Serialize};

use crate::uuids::AddressUuid;

/// What kind of place an address points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// A home address.
    Home,

    /// A work address.
    Work,

    /// Anything else.
    Other,
}

/// A shipping address as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Server-issued identifier.
    pub id: AddressUuid,

    /// Recipient name.
    pub name: String,

    /// Contact phone number.
    #[serde(default)]
    pub phone_number: Option<String>,

    /// First address line.
    pub address_line1: String,

    /// Second address line.
    #[serde(default)]
    pub address_line2: Option<String>,

    /// City.
    pub city: String,

    /// State or region.
    pub state: String,

    /// Postal code, where the region uses one.
    #[serde(default)]
    pub postal_code: Option<String>,

    /// Kind of address.
    pub address_type: AddressKind,

    /// Whether this is the shopper's default address.
    #[serde(default)]
    pub is_default: bool,
}

/// Payload for creating an address.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddress {
    /// Recipient name.
    pub name: String,

    /// Contact phone number.
    pub phone_number: Option<String>,

    /// First address line.
    pub address_line1: String,

    /// Second address line.
    pub address_line2: Option<String>,

    /// City.
    pub city: String,

    /// State or region.
    pub state: String,

    /// Postal code.
    pub postal_code: Option<String>,

    /// Kind of address.
    pub address_type: AddressKind,
}

impl NewAddress {
    /// The fields an address cannot ship without, reported for user-facing
    /// validation messages.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.address_line1.trim().is_empty() {
            missing.push("addressLine1");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.state.trim().is_empty() {
            missing.push("state");
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewAddress {
        NewAddress {
            name: "Ada".to_string(),
            phone_number: None,
            address_line1: "1 Main St".to_string(),
            address_line2: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: Some("62701".to_string()),
            address_type: AddressKind::Home,
        }
    }

    #[test]
    fn complete_address_has_no_missing_fields() {
        assert!(complete().missing_fields().is_empty());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let mut address = complete();
        address.city = "  ".to_string();
        address.name = String::new();

        assert_eq!(address.missing_fields(), vec!["name", "city"]);
    }
}
