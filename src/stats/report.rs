use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCount {
    pub recipe: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusiestPostcode {
    pub postcode: String,
    pub delivery_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountPerPostcodeAndTime {
    pub postcode: String,
    pub from: String,
    pub to: String,
    pub delivery_count: usize,
}

/// Final statistics for one run.
///
/// Field names and order are the JSON output contract. Both lists are sorted
/// by name in byte order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    unique_recipe_count: usize,
    count_per_recipe: Vec<RecipeCount>,
    busiest_postcode: BusiestPostcode,
    count_per_postcode_and_time: CountPerPostcodeAndTime,
    match_by_name: Vec<String>,
}

impl Report {
    pub(crate) fn new(
        count_per_recipe: Vec<RecipeCount>,
        busiest_postcode: BusiestPostcode,
        count_per_postcode_and_time: CountPerPostcodeAndTime,
        match_by_name: Vec<String>,
    ) -> Self {
        Self {
            unique_recipe_count: count_per_recipe.len(),
            count_per_recipe,
            busiest_postcode,
            count_per_postcode_and_time,
            match_by_name,
        }
    }

    pub fn unique_recipe_count(&self) -> usize {
        self.unique_recipe_count
    }

    pub fn count_per_recipe(&self) -> &[RecipeCount] {
        &self.count_per_recipe
    }

    pub fn busiest_postcode(&self) -> &BusiestPostcode {
        &self.busiest_postcode
    }

    pub fn count_per_postcode_and_time(&self) -> &CountPerPostcodeAndTime {
        &self.count_per_postcode_and_time
    }

    pub fn match_by_name(&self) -> &[String] {
        &self.match_by_name
    }
}
