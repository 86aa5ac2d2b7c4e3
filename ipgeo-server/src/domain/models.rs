use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The five required fields of a resolved address, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Country,
    StreetAddress,
    City,
    StateProvince,
    PostalCode,
}

impl AddressField {
    pub const ALL: [AddressField; 5] = [
        AddressField::Country,
        AddressField::StreetAddress,
        AddressField::City,
        AddressField::StateProvince,
        AddressField::PostalCode,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AddressField::Country => "Country",
            AddressField::StreetAddress => "Street Address",
            AddressField::City => "City",
            AddressField::StateProvince => "State/Province",
            AddressField::PostalCode => "Código Postal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Street Address")]
    pub street_address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State/Province")]
    pub state_province: String,
    #[serde(rename = "Código Postal")]
    pub postal_code: String,
}

impl AddressRecord {
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Country => &self.country,
            AddressField::StreetAddress => &self.street_address,
            AddressField::City => &self.city,
            AddressField::StateProvince => &self.state_province,
            AddressField::PostalCode => &self.postal_code,
        }
    }

    pub fn missing_fields(&self) -> Vec<AddressField> {
        AddressField::ALL
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }
}

/// Street name, followed by `", <number>"` when a house number is known.
pub fn street_address(street: &str, house_number: &str) -> String {
    if house_number.is_empty() {
        street.to_string()
    } else {
        format!("{street}, {house_number}")
    }
}
