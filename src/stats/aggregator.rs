use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use super::query::StatsQuery;
use super::report::{BusiestPostcode, CountPerPostcodeAndTime, RecipeCount, Report};
use crate::domain::DeliveryRecord;

/// Running statistics folded over validated records, one at a time.
///
/// Recipe maps are ordered so the report lists come out sorted without a
/// separate pass. Postcodes can be numerous, so they live in a hash map and
/// only the current leader is tracked.
#[derive(Debug)]
pub struct StatsAggregator {
    query: StatsQuery,
    recipe_counts: BTreeMap<String, usize>,
    postcode_counts: HashMap<String, usize>,
    busiest_postcode: String,
    busiest_count: usize,
    matched_recipes: BTreeMap<String, usize>,
    target_deliveries: usize,
    records: usize,
}

impl StatsAggregator {
    pub fn new(query: StatsQuery) -> Self {
        Self {
            query,
            recipe_counts: BTreeMap::new(),
            postcode_counts: HashMap::new(),
            busiest_postcode: String::new(),
            busiest_count: 0,
            matched_recipes: BTreeMap::new(),
            target_deliveries: 0,
            records: 0,
        }
    }

    /// Fold one record into every running statistic
    pub fn record(&mut self, record: DeliveryRecord) {
        let (recipe, postcode, delivery) = record.into_parts();
        self.records += 1;

        if postcode == self.query.postcode()
            && delivery.encloses(self.query.from_hour(), self.query.to_hour())
        {
            self.target_deliveries += 1;
            trace!(postcode = %postcode, delivery = %delivery, "Delivery inside query window");
        }

        if self.query.keywords().matches(&recipe) {
            *self.matched_recipes.entry(recipe.clone()).or_default() += 1;
        }
        *self.recipe_counts.entry(recipe).or_default() += 1;

        let count = match self.postcode_counts.get_mut(&postcode) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                self.postcode_counts.insert(postcode.clone(), 1);
                1
            }
        };

        // Strictly greater: on a tie the postcode that got there first stays.
        if count > self.busiest_count {
            self.busiest_count = count;
            self.busiest_postcode = postcode;
        }
    }

    /// Number of records folded so far
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn query(&self) -> &StatsQuery {
        &self.query
    }

    /// Consume the running state and assemble the report
    pub fn finish(self) -> Report {
        let count_per_recipe = self
            .recipe_counts
            .into_iter()
            .map(|(recipe, count)| RecipeCount { recipe, count })
            .collect();

        let match_by_name = self.matched_recipes.into_keys().collect();

        Report::new(
            count_per_recipe,
            BusiestPostcode {
                postcode: self.busiest_postcode,
                delivery_count: self.busiest_count,
            },
            CountPerPostcodeAndTime {
                postcode: self.query.postcode().to_string(),
                from: self.query.from_time().to_string(),
                to: self.query.to_time().to_string(),
                delivery_count: self.target_deliveries,
            },
            match_by_name,
        )
    }
}
