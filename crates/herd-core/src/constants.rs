/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum number of records for hierarchical clustering to be defined.
pub const MIN_RECORDS: usize = 2;

/// Tokens (lowercased, trimmed) that coerce a boolean-like cell to 1.
pub const TRUTHY_TOKENS: [&str; 5] = ["1", "true", "yes", "y", "t"];

/// Category assigned to a categorical cell with no value.
pub const MISSING_CATEGORY: &str = "unknown";

/// Relative tolerance for a merge height that dips below its predecessor.
pub const MERGE_HEIGHT_TOLERANCE: f64 = 1e-9;

/// Field names of the default herd schema.
pub mod fields {
    pub const ID: &str = "ID";
    pub const BREED: &str = "Breed";
    pub const AGE: &str = "Age";
    pub const WEIGHT_KG: &str = "Weight_kg";
    pub const MILK_YIELD: &str = "Milk_Yield";
    pub const FERTILITY_SCORE: &str = "Fertility_Score";
    pub const RUMINATION_MINUTES: &str = "Rumination_Minutes_Per_Day";
    pub const EAR_TEMPERATURE_C: &str = "Ear_Temperature_C";
    pub const PARASITE_LOAD_INDEX: &str = "Parasite_Load_Index";
    pub const FECAL_EGG_COUNT: &str = "Fecal_Egg_Count";
    pub const RESPIRATION_RATE_BPM: &str = "Respiration_Rate_BPM";
    pub const FORAGE_QUALITY_INDEX: &str = "Forage_Quality_Index";
    pub const VACCINATION_UP_TO_DATE: &str = "Vaccination_Up_To_Date";
    pub const MOVEMENT_SCORE: &str = "Movement_Score";
    pub const REMAINING_MONTHS: &str = "Remaining_Months";
}
