// Output contract handed to the presentation layer: an ordered list of
// labelled rows of seven cells, plus a title and column headers. Row order
// and cell text are fixed here; alignment and borders are the renderer's job.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelRow {
    pub label: String,
    pub cells: [String; 7],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelTable {
    pub title: String,
    pub columns: [String; 7],
    pub rows: Vec<LabelRow>,
}

impl LabelTable {
    pub fn row(&self, label: &str) -> Option<&LabelRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// Column headers `1` through `7`.
pub fn degree_columns() -> [String; 7] {
    std::array::from_fn(|i| (i + 1).to_string())
}
