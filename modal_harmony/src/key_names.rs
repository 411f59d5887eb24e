// Display names for each position of `ACCIDENTAL_ORDER`.
//
// The table is an explicit list of (position, name) pairs rather than an
// implicit index so that a gap is detectable. Every table builder calls
// `validate_key_names` before producing rows; a missing entry is a
// configuration defect and aborts the whole table.

use crate::error::{Result, TheoryError};
use crate::mode::ACCIDENTAL_ORDER;

pub const KEY_NAMES: [(usize, &str); 15] = [
    (0, "Sharp Ionian"),
    (1, "Sharp Mixolydian"),
    (2, "Sharp Dorian"),
    (3, "Sharp Aeolian"),
    (4, "Sharp Phrygian"),
    (5, "Sharp Locrian"),
    (6, "Lydian"),
    (7, "Ionian"),
    (8, "Mixolydian"),
    (9, "Dorian"),
    (10, "Aeolian"),
    (11, "Phrygian"),
    (12, "Locrian"),
    (13, "Flat Lydian"),
    (14, "Flat Ionian"),
];

/// Name for a position, looked up in an arbitrary table.
pub fn lookup(table: &[(usize, &'static str)], position: usize) -> Result<&'static str> {
    table
        .iter()
        .find(|&&(p, _)| p == position)
        .map(|&(_, name)| name)
        .ok_or(TheoryError::MissingKeyName { position })
}

pub fn key_name(position: usize) -> Result<&'static str> {
    lookup(&KEY_NAMES, position)
}

/// Check that `table` names every position of `ACCIDENTAL_ORDER` exactly
/// once, in ascending order.
pub fn validate(table: &[(usize, &'static str)]) -> Result<()> {
    for (position, _) in ACCIDENTAL_ORDER.iter().enumerate() {
        lookup(table, position)?;
    }
    for pair in table.windows(2) {
        if pair[0].0 >= pair[1].0 {
            return Err(TheoryError::InvalidArgument(format!(
                "key-name positions must be strictly ascending ({} then {})",
                pair[0].0, pair[1].0
            )));
        }
    }
    if table.len() != ACCIDENTAL_ORDER.len() {
        return Err(TheoryError::InvalidArgument(format!(
            "key-name table has {} entries for {} positions",
            table.len(),
            ACCIDENTAL_ORDER.len()
        )));
    }
    Ok(())
}

pub fn validate_key_names() -> Result<()> {
    validate(&KEY_NAMES)
}

/// `Ionian (b4)`, `Sharp Locrian (#1)`, or just `Lydian` for a zero value.
pub fn format_key_name(name: &str, degree_change: i8) -> String {
    match degree_change.signum() {
        1 => format!("{name} (#{})", degree_change.unsigned_abs()),
        -1 => format!("{name} (b{})", degree_change.unsigned_abs()),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_table_is_complete() {
        validate_key_names().unwrap();
        assert_eq!(key_name(6).unwrap(), "Lydian");
        assert_eq!(key_name(7).unwrap(), "Ionian");
    }

    #[test]
    fn test_missing_position() {
        assert_eq!(
            key_name(15),
            Err(TheoryError::MissingKeyName { position: 15 })
        );

        let mut gappy: Vec<(usize, &'static str)> = KEY_NAMES.to_vec();
        gappy.remove(3);
        assert_eq!(
            validate(&gappy),
            Err(TheoryError::MissingKeyName { position: 3 })
        );
    }

    #[test]
    fn test_rejects_duplicates_and_disorder() {
        let mut swapped: Vec<(usize, &'static str)> = KEY_NAMES.to_vec();
        swapped.swap(0, 1);
        assert!(matches!(
            validate(&swapped),
            Err(TheoryError::InvalidArgument(_))
        ));

        let mut extra: Vec<(usize, &'static str)> = KEY_NAMES.to_vec();
        extra.push((14, "Doubled"));
        assert!(validate(&extra).is_err());
    }

    #[test]
    fn test_format_key_name() {
        assert_eq!(format_key_name("Lydian", 0), "Lydian");
        assert_eq!(format_key_name("Ionian", -4), "Ionian (b4)");
        assert_eq!(format_key_name("Sharp Ionian", 7), "Sharp Ionian (#7)");
    }
}
