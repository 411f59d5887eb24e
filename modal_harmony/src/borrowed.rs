// Borrowed-chord table: one row per generated mode, labelled with its key
// name and the degree change that produced it. Reading down a column shows
// every version of that degree's chord available from a parallel mode.

use crate::error::{Result, TheoryError};
use crate::key_names::{format_key_name, key_name, validate_key_names};
use crate::mode::{ACCIDENTAL_ORDER, Mode, generate_all_modes};
use crate::table::{LabelRow, LabelTable, degree_columns};
use tracing::debug;

/// A generated mode together with its place in the traversal.
#[derive(Debug, Clone)]
pub struct ModeEntry {
    pub position: usize,
    pub degree_change: i8,
    pub name: &'static str,
    pub mode: Mode,
}

impl ModeEntry {
    pub fn label(&self) -> String {
        format_key_name(self.name, self.degree_change)
    }

    fn to_row(&self) -> Result<LabelRow> {
        Ok(LabelRow {
            label: self.label(),
            cells: self.mode.numerals()?,
        })
    }
}

/// Generate every mode and attach its key name. Fails before returning
/// anything if a name is missing.
pub fn named_modes() -> Result<Vec<ModeEntry>> {
    validate_key_names()?;
    let modes = generate_all_modes()?;
    ACCIDENTAL_ORDER
        .iter()
        .zip(modes)
        .enumerate()
        .map(|(position, (&degree_change, mode))| {
            Ok(ModeEntry {
                position,
                degree_change,
                name: key_name(position)?,
                mode,
            })
        })
        .collect()
}

fn build(title: String, entries: &[ModeEntry]) -> Result<LabelTable> {
    let rows = entries
        .iter()
        .map(ModeEntry::to_row)
        .collect::<Result<Vec<_>>>()?;
    debug!(%title, rows = rows.len(), "built borrowed-chord table");
    Ok(LabelTable {
        title,
        columns: degree_columns(),
        rows,
    })
}

pub fn borrowed_chord_table() -> Result<LabelTable> {
    build("Borrowed chords".to_string(), &named_modes()?)
}

/// Only the modes whose key signature has `signature` sharps (positive) or
/// flats (negative).
pub fn borrowed_chords_with_signature(signature: i32) -> Result<LabelTable> {
    if !(-7..=7).contains(&signature) {
        return Err(TheoryError::InvalidArgument(format!(
            "key signature must be in -7..=7 (got {signature})"
        )));
    }
    let entries: Vec<ModeEntry> = named_modes()?
        .into_iter()
        .filter(|e| e.mode.key_signature() == signature)
        .collect();
    let count = signature.unsigned_abs();
    let title = match signature.signum() {
        0 => "Borrowed chords (no sharps or flats)".to_string(),
        s => {
            let kind = if s > 0 { "sharp" } else { "flat" };
            let plural = if count == 1 { "" } else { "s" };
            format!("Borrowed chords ({count} {kind}{plural})")
        }
    };
    build(title, &entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_position() {
        let table = borrowed_chord_table().unwrap();
        assert_eq!(table.rows.len(), ACCIDENTAL_ORDER.len());
        for row in &table.rows {
            assert!(!row.label.is_empty());
            assert!(!row.label.contains("Unknown"));
        }
    }

    #[test]
    fn test_labels_and_order() {
        let table = borrowed_chord_table().unwrap();
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels[0], "Sharp Ionian (#7)");
        assert_eq!(labels[6], "Lydian");
        assert_eq!(labels[7], "Ionian (b4)");
        assert_eq!(labels[8], "Mixolydian (b7)");
        assert_eq!(labels[14], "Flat Ionian (b4)");
    }

    #[test]
    fn test_row_cells_match_mode() {
        let table = borrowed_chord_table().unwrap();
        let dorian = table.row("Dorian (b3)").unwrap();
        assert_eq!(dorian.cells, ["i", "ii", "bIII", "IV", "v", "vi°", "bVII"].map(String::from));
        assert_eq!(table.columns[0], "1");
        assert_eq!(table.columns[6], "7");
    }

    #[test]
    fn test_filter_by_signature() {
        let table = borrowed_chords_with_signature(-1).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].label, "Mixolydian (b7)");
        assert_eq!(table.title, "Borrowed chords (1 flat)");

        let table = borrowed_chords_with_signature(0).unwrap();
        assert_eq!(table.rows[0].label, "Ionian (b4)");
    }

    #[test]
    fn test_filter_rejects_out_of_range() {
        assert!(matches!(
            borrowed_chords_with_signature(8),
            Err(TheoryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_entries_carry_positions() {
        let entries = named_modes().unwrap();
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.position, i);
            assert_eq!(entry.degree_change, ACCIDENTAL_ORDER[i]);
        }
    }
}
