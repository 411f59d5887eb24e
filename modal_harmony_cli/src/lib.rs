// modal_harmony_cli — presentation layer for the modal_harmony tables.
//
// Module overview:
// - `config.rs`: `RenderConfig`, loaded from an optional JSON file.
// - `render.rs`: `TableRenderer` trait with text and JSON implementations.
//
// `tables_for` maps the configured table kinds onto the core builders so
// the binary and the integration tests go through the same path.

pub mod config;
pub mod render;

pub use config::{Border, OutputFormat, RenderConfig, TableKind};
pub use render::{JsonRenderer, TableRenderer, TextRenderer, renderer_for};

use modal_harmony::{LabelTable, borrowed_chord_table, secondary_chord_table};

pub fn build_table(kind: TableKind) -> modal_harmony::Result<LabelTable> {
    match kind {
        TableKind::Borrowed => borrowed_chord_table(),
        TableKind::Secondary => secondary_chord_table(),
    }
}

/// Build every table in `kinds`, stopping at the first failure.
pub fn tables_for(kinds: &[TableKind]) -> modal_harmony::Result<Vec<LabelTable>> {
    kinds.iter().map(|&kind| build_table(kind)).collect()
}
