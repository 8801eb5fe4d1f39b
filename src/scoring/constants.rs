/// Lower bound of every reported score.
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of every reported score.
pub const SCORE_MAX: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition score
// ─────────────────────────────────────────────────────────────────────────────

/// Nutrient weights in the nutrition score. Must sum to 1.0.
pub const CALORIES_WEIGHT: f64 = 0.2;
pub const PROTEIN_WEIGHT: f64 = 0.3;
pub const OMEGA3_WEIGHT: f64 = 0.3;
pub const MAGNESIUM_WEIGHT: f64 = 0.2;

/// Ceiling on credit for exceeding a target, as a multiple of the target.
pub const CALORIES_CAP: f64 = 1.2;
pub const PROTEIN_CAP: f64 = 1.5;
pub const OMEGA3_CAP: f64 = 2.0;
pub const MAGNESIUM_CAP: f64 = 1.5;

/// Calorie intake above this multiple of the target triggers the penalty.
pub const CALORIE_EXCESS_RATIO: f64 = 1.2;

/// Flat deduction applied once when calories exceed the excess ratio.
pub const CALORIE_EXCESS_PENALTY: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// Daily score
// ─────────────────────────────────────────────────────────────────────────────

/// Component weights in the daily score. Must sum to 1.0.
pub const ADHERENCE_WEIGHT: f64 = 0.4;
pub const NUTRITION_WEIGHT: f64 = 0.4;
pub const COGNITIVE_WEIGHT: f64 = 0.2;

/// Cognitive feedback used when the user gives none.
pub const DEFAULT_COGNITIVE_FEEDBACK: i32 = 5;

/// Self-reported cognitive feedback scale.
pub const COGNITIVE_FEEDBACK_MIN: i32 = 1;
pub const COGNITIVE_FEEDBACK_MAX: i32 = 10;

/// Allowed deviation of a weight set from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

// ─────────────────────────────────────────────────────────────────────────────
// Trend
// ─────────────────────────────────────────────────────────────────────────────

/// Entries in each of the recent and prior trend windows.
pub const TREND_WINDOW: usize = 7;

/// Mean difference (points) beyond which a trend is not "stable".
pub const TREND_THRESHOLD: f64 = 5.0;
