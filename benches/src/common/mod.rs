use recipe_stats::prelude::*;

const RECIPES: &[&str] = &[
    "Creamy Dill Chicken",
    "Mushroom Risotto",
    "Grilled Cheese and Veggie Jumble",
    "Speedy Steak Fajitas",
    "Korean-Style Chicken Potato Thighs",
    "Hot Honey Barbecue Chicken Legs",
    "Melty Monterey Jack Burgers",
    "Tex-Mex Tilapia",
];

const DAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Generate a JSON delivery array.
///
/// Every `invalid_every`-th record carries an unparseable delivery window
/// (0 disables invalid records).
pub fn generate_json_dataset(num_records: usize, num_postcodes: usize, invalid_every: usize) -> String {
    let mut json = String::from("[");

    for i in 0..num_records {
        if i > 0 {
            json.push(',');
        }
        let recipe = RECIPES[i % RECIPES.len()];
        let postcode = 10_000 + (i % num_postcodes.max(1));
        let delivery = if invalid_every > 0 && i % invalid_every == 0 {
            "InvalidTimeFormat".to_string()
        } else {
            format!(
                "{} {}AM - {}PM",
                DAYS[i % DAYS.len()],
                (i % 12) + 1,
                ((i / 12) % 12) + 1
            )
        };
        json.push_str(&format!(
            r#"{{"postcode":"{postcode}","recipe":"{recipe}","delivery":"{delivery}"}}"#
        ));
    }

    json.push(']');
    json
}

/// Pre-validated records for benchmarking aggregation alone
pub fn generate_records(num_records: usize, num_postcodes: usize) -> Vec<DeliveryRecord> {
    (0..num_records)
        .filter_map(|i| {
            DeliveryRecord::new(
                RECIPES[i % RECIPES.len()],
                (10_000 + (i % num_postcodes.max(1))).to_string(),
                format!("{} {}AM - {}PM", DAYS[i % DAYS.len()], (i % 12) + 1, (i % 7) + 1),
            )
            .ok()
        })
        .collect()
}
