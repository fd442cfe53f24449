use serde::Deserialize;

use super::error::ParseError;
use crate::domain::{DeliveryRecord, ValidationError};

/// Raw JSON record as read from input, before validation
#[derive(Debug, Default, Deserialize)]
pub struct RawDeliveryRecord {
    #[serde(default, alias = "Recipe")]
    pub recipe: String,
    #[serde(default, alias = "Postcode")]
    pub postcode: String,
    #[serde(default, alias = "Delivery")]
    pub delivery: String,
}

impl RawDeliveryRecord {
    /// Decode one array element and validate it
    pub fn decode(value: serde_json::Value, index: usize) -> Result<DeliveryRecord, ParseError> {
        let raw: Self =
            serde_json::from_value(value).map_err(|source| ParseError::Decode { index, source })?;
        raw.validate()
            .map_err(|source| ParseError::Validation { index, source })
    }

    pub fn validate(self) -> Result<DeliveryRecord, ValidationError> {
        DeliveryRecord::new(self.recipe, self.postcode, self.delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_valid_element() {
        let value = json!({"postcode": "10224", "recipe": "Creamy Dill Chicken", "delivery": "Wednesday 1AM - 7PM"});
        let record = RawDeliveryRecord::decode(value, 0).unwrap();
        assert_eq!(record.recipe(), "Creamy Dill Chicken");
        assert_eq!(record.postcode(), "10224");
        assert_eq!(record.delivery().as_str(), "Wednesday 1AM - 7PM");
    }

    #[test]
    fn accepts_capitalized_field_names() {
        let value = json!({"Postcode": "12345", "Delivery": "Monday 9AM - 5PM", "Recipe": "RecipeA"});
        let record = RawDeliveryRecord::decode(value, 0).unwrap();
        assert_eq!(record.recipe(), "RecipeA");
    }

    #[test]
    fn ignores_unknown_fields() {
        let value = json!({"postcode": "1", "recipe": "A", "delivery": "Monday 9AM - 5PM", "extra": 1});
        assert!(RawDeliveryRecord::decode(value, 0).is_ok());
    }

    #[test]
    fn missing_field_fails_validation() {
        let value = json!({"recipe": "A", "delivery": "Monday 9AM - 5PM"});
        let result = RawDeliveryRecord::decode(value, 4);
        assert!(matches!(
            result,
            Err(ParseError::Validation {
                index: 4,
                source: ValidationError::InvalidPostcode(_)
            })
        ));
    }

    #[test]
    fn non_string_field_is_decode_error() {
        let value = json!({"postcode": 10224, "recipe": "A", "delivery": "Monday 9AM - 5PM"});
        let result = RawDeliveryRecord::decode(value, 1);
        assert!(matches!(result, Err(ParseError::Decode { index: 1, .. })));
    }

    #[test]
    fn non_object_element_is_decode_error() {
        let result = RawDeliveryRecord::decode(json!(42), 0);
        assert!(matches!(result, Err(ParseError::Decode { index: 0, .. })));
    }

    #[test]
    fn invalid_delivery_is_validation_error() {
        let value = json!({"postcode": "12345", "recipe": "RecipeA", "delivery": "InvalidTimeFormat"});
        let result = RawDeliveryRecord::decode(value, 0);
        assert!(matches!(
            result,
            Err(ParseError::Validation {
                source: ValidationError::InvalidDeliveryFormat(_),
                ..
            })
        ));
    }
}
