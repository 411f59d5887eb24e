// Secondary-chord table: the chords of the major key built on each degree
// of the Ionian base, spelled relative to the home tonic.
//
// Row `r` tonicizes degree `r`. Its accidentals come from the key signature
// of that major key, reached by walking `ACCIDENTAL_ORDER` outward from the
// Lydian pivot one degree change at a time. Column `c` is the `c`-th chord
// of that key, which sits on home degree `(r + c - 2) mod 7 + 1`. So the
// cell at row V, column V reads `II` (V/V).

use crate::error::{Result, TheoryError};
use crate::mode::{
    ACCIDENTAL_ORDER, FLATWARD_ROTATION, IONIAN_POSITION, LYDIAN_ACCIDENTALS, LYDIAN_POSITION,
    Mode, ModeState, apply_degree_change,
};
use crate::numeral::to_roman_numeral;
use crate::table::{LabelRow, LabelTable};
use tracing::debug;

/// Sharps (positive) or flats (negative) of the major key on each degree
/// of the home major scale: C, D, E, F, G, A, B major.
pub const SECONDARY_KEY_SIGNATURES: [i32; 7] = [0, 2, 4, -1, 1, 3, 5];

/// Accidental vector of the key signature with `signature` sharps (positive)
/// or flats (negative), relative to the home major scale.
pub fn key_signature_accidentals(signature: i32) -> Result<[i8; 7]> {
    if !(-7..=7).contains(&signature) {
        return Err(TheoryError::InvalidArgument(format!(
            "key signature must be in -7..=7 (got {signature})"
        )));
    }

    let pivot: i32 = LYDIAN_ACCIDENTALS.iter().map(|&a| i32::from(a)).sum();
    let steps = (signature - pivot).unsigned_abs() as usize;
    let side: Vec<i8> = if signature > pivot {
        ACCIDENTAL_ORDER[..LYDIAN_POSITION].iter().rev().copied().collect()
    } else {
        ACCIDENTAL_ORDER[LYDIAN_POSITION + 1..].to_vec()
    };

    side.into_iter()
        .take(steps)
        .try_fold(LYDIAN_ACCIDENTALS, apply_degree_change)
}

/// The Ionian base mode the table is built against.
fn ionian_state() -> Result<ModeState> {
    ModeState::lydian().step(ACCIDENTAL_ORDER[IONIAN_POSITION], FLATWARD_ROTATION)
}

pub fn secondary_chord_table() -> Result<LabelTable> {
    let ionian = ionian_state()?;
    let qualities = ionian.qualities();
    let base = Mode::from(&ionian).numerals()?;

    let columns = base.clone().map(|numeral| format!("{numeral}/x"));

    let mut rows = Vec::with_capacity(7);
    for (row, &signature) in SECONDARY_KEY_SIGNATURES.iter().enumerate() {
        let accidentals = key_signature_accidentals(signature)?;
        let mut cells: [String; 7] = Default::default();
        for (column, cell) in cells.iter_mut().enumerate() {
            let home = (row + column) % 7;
            *cell = to_roman_numeral(
                home as i32 + 1,
                i32::from(accidentals[home]),
                qualities[column],
            )?;
        }
        debug!(row = row + 1, signature, "built secondary-chord row");
        rows.push(LabelRow {
            label: format!("x/{}", base[row]),
            cells,
        });
    }

    Ok(LabelTable {
        title: "Secondary chords".to_string(),
        columns,
        rows,
    })
}
