use serde::{Deserialize, Serialize};

/// Macro ratios for one record. A ratio is `None` when either operand is
/// missing, and `0.0` when the divisor is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroRatios {
    #[serde(rename = "Diet_type")]
    pub diet_type: Option<String>,
    #[serde(rename = "Protein_to_Carbs_ratio")]
    pub protein_to_carbs: Option<f64>,
    #[serde(rename = "Carbs_to_Fat_ratio")]
    pub carbs_to_fat: Option<f64>,
}
