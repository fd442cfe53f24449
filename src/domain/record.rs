use super::delivery::DeliveryWindow;
use super::error::ValidationError;

pub const MAX_POSTCODE_LEN: usize = 10;
pub const MAX_RECIPE_LEN: usize = 100;

/// Validated delivery record; immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    recipe: String,
    postcode: String,
    delivery: DeliveryWindow,
}

impl DeliveryRecord {
    /// Validate raw fields in order: postcode, delivery window, recipe name.
    /// The first failing check wins.
    pub fn new(
        recipe: impl Into<String>,
        postcode: impl Into<String>,
        delivery: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let recipe = recipe.into();
        let postcode = postcode.into();

        validate_postcode(&postcode)?;
        let delivery = DeliveryWindow::parse(delivery)?;

        let recipe_len = recipe.chars().count();
        if recipe_len == 0 || recipe_len > MAX_RECIPE_LEN {
            return Err(ValidationError::InvalidItemName(recipe_len));
        }

        Ok(Self {
            recipe,
            postcode,
            delivery,
        })
    }

    pub fn recipe(&self) -> &str {
        &self.recipe
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    pub fn delivery(&self) -> &DeliveryWindow {
        &self.delivery
    }

    /// Split into `(recipe, postcode, delivery)`
    pub fn into_parts(self) -> (String, String, DeliveryWindow) {
        (self.recipe, self.postcode, self.delivery)
    }
}

/// Non-empty and at most ten characters
pub fn validate_postcode(postcode: &str) -> Result<(), ValidationError> {
    let len = postcode.chars().count();
    if len == 0 || len > MAX_POSTCODE_LEN {
        return Err(ValidationError::InvalidPostcode(postcode.to_string()));
    }
    Ok(())
}
