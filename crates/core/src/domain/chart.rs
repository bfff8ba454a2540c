use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parallel arrays ready for a grouped bar chart. Index `i` of every vector
/// comes from the same source record. Slots hold the record's field verbatim,
/// `null` where the record has no such key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<Value>,
    pub protein: Vec<Value>,
    pub carbs: Vec<Value>,
    pub fat: Vec<Value>,
}

impl ChartSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            labels: Vec::with_capacity(n),
            protein: Vec::with_capacity(n),
            carbs: Vec::with_capacity(n),
            fat: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
