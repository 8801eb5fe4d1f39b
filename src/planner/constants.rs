/// Days in a generated plan.
pub const PLAN_DAYS: u32 = 7;

/// Foods with strictly more protein per 100 g than this count as protein-rich.
pub const PROTEIN_RICH_THRESHOLD: f64 = 15.0;

/// Catalog category label for vegetables.
pub const VEGETABLE_CATEGORY: &str = "Vegetable";

/// Catalog category label for grains.
pub const GRAIN_CATEGORY: &str = "Grain";
