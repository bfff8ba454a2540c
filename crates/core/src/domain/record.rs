use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FIELD_DIET_TYPE: &str = "Diet_type";
pub const FIELD_PROTEIN: &str = "Protein(g)";
pub const FIELD_CARBS: &str = "Carbs(g)";
pub const FIELD_FAT: &str = "Fat(g)";

/// One row of per-diet macro-nutrient data, kept exactly as the endpoint sent it.
///
/// Nothing is validated on the way in. Accessors return `None` when a field is
/// absent or carries the wrong JSON type, so a malformed row degrades to empty
/// slots downstream instead of failing the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(diet_type: &str, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self(serde_json::json!({
            FIELD_DIET_TYPE: diet_type,
            FIELD_PROTEIN: protein_g,
            FIELD_CARBS: carbs_g,
            FIELD_FAT: fat_g,
        }))
    }

    pub fn diet_type(&self) -> Option<&str> {
        self.0.get(FIELD_DIET_TYPE).and_then(Value::as_str)
    }

    pub fn protein_g(&self) -> Option<f64> {
        self.number(FIELD_PROTEIN)
    }

    pub fn carbs_g(&self) -> Option<f64> {
        self.number(FIELD_CARBS)
    }

    pub fn fat_g(&self) -> Option<f64> {
        self.number(FIELD_FAT)
    }

    /// The field as sent, whatever its JSON type. Only an absent key reads as `null`.
    pub fn field(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or(Value::Null)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_fields_by_their_wire_names() {
        let record: Record = serde_json::from_value(json!({
            "Diet_type": "paleo",
            "Protein(g)": 88.5,
            "Carbs(g)": 40,
            "Fat(g)": 61.25,
            "Cuisine_type": "american",
        }))
        .unwrap();

        assert_eq!(record.diet_type(), Some("paleo"));
        assert_eq!(record.protein_g(), Some(88.5));
        assert_eq!(record.carbs_g(), Some(40.0));
        assert_eq!(record.fat_g(), Some(61.25));
    }

    #[test]
    fn missing_or_mistyped_fields_read_as_none() {
        let record = Record::from(json!({"Diet_type": 7, "Protein(g)": "lots"}));
        assert_eq!(record.diet_type(), None);
        assert_eq!(record.protein_g(), None);
        assert_eq!(record.carbs_g(), None);

        let not_an_object = Record::from(json!([1, 2, 3]));
        assert_eq!(not_an_object.diet_type(), None);
        assert_eq!(not_an_object.fat_g(), None);
    }

    #[test]
    fn raw_field_keeps_unexpected_types() {
        let record = Record::from(json!({"Diet_type": 3, "Protein(g)": "30"}));
        assert_eq!(record.field(FIELD_DIET_TYPE), json!(3));
        assert_eq!(record.field(FIELD_PROTEIN), json!("30"));
        assert_eq!(record.field(FIELD_FAT), Value::Null);
    }

    #[test]
    fn serializes_back_unchanged() {
        let raw = json!({"Diet_type": "vegan", "Protein(g)": 10, "extra": [true]});
        let record = Record::from(raw.clone());
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }
}
