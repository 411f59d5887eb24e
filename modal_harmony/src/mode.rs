// Mode generation along the circle of fifths.
//
// Every mode is described relative to a fixed tonic: seven triad qualities
// plus a per-degree accidental vector (how far each degree's root sits from
// the major scale of that tonic). Lydian is the pivot. Moving one fifth
// flatward rotates the qualities by +4 degrees and lowers one degree by a
// semitone; moving sharpward rotates by -4 and raises one. Which degree is
// altered at each step is given by `ACCIDENTAL_ORDER`.
//
// Traversal state is an immutable `ModeState`; each step returns a new one.
// The sharp and flat chains start from their own copy of the Lydian state
// and never share anything, so they run on separate rayon tasks.
//
// See `numeral.rs` for label formatting and `borrowed.rs`/`secondary.rs`
// for the tables built on top of the generated modes.

use crate::error::{Result, TheoryError};
use crate::numeral::{MAX_ACCIDENTAL, MIN_ACCIDENTAL, to_roman_numeral};
use crate::quality::Quality;
use serde::Serialize;
use tracing::debug;

/// Triad qualities of the Lydian mode, degree 1 first.
pub const LYDIAN_QUALITIES: [Quality; 7] = [
    Quality::Major,
    Quality::Major,
    Quality::Minor,
    Quality::Diminished,
    Quality::Major,
    Quality::Minor,
    Quality::Minor,
];

/// Lydian's raised fourth; every other degree is natural.
pub const LYDIAN_ACCIDENTALS: [i8; 7] = [0, 0, 0, 1, 0, 0, 0];

/// Signed degree changes from the sharpest mode to the flattest. A value
/// `+n` raises degree `n` by a semitone, `-n` lowers it; `0` is Lydian.
pub const ACCIDENTAL_ORDER: [i8; 15] = [
    7, 3, 6, 2, 5, 1, // sharp side, read right to left from the pivot
    0, // Lydian
    -4, // Ionian
    -7, // Mixolydian
    -3, // Dorian
    -6, // Aeolian
    -2, // Phrygian
    -5, // Locrian
    -1, -4,
];

/// Index of the Lydian pivot in `ACCIDENTAL_ORDER`.
pub const LYDIAN_POSITION: usize = find_pivot(&ACCIDENTAL_ORDER);

/// Index of the Ionian mode (one step flatward of Lydian).
pub const IONIAN_POSITION: usize = LYDIAN_POSITION + 1;

/// Quality rotation applied per flatward step.
pub const FLATWARD_ROTATION: isize = 4;

/// Quality rotation applied per sharpward step.
pub const SHARPWARD_ROTATION: isize = -4;

const fn find_pivot(order: &[i8]) -> usize {
    let mut i = 0;
    while i < order.len() {
        if order[i] == 0 {
            return i;
        }
        i += 1;
    }
    panic!("ACCIDENTAL_ORDER has no Lydian pivot");
}

/// Rotate a quality sequence left by `rotation` degrees (negative rotates right).
pub fn rotate_qualities(qualities: [Quality; 7], rotation: isize) -> [Quality; 7] {
    let mut rotated = qualities;
    rotated.rotate_left(rotation.rem_euclid(7) as usize);
    rotated
}

/// Qualities of the Ionian mode: Lydian moved one fifth flatward.
pub fn ionian_qualities() -> [Quality; 7] {
    rotate_qualities(LYDIAN_QUALITIES, FLATWARD_ROTATION)
}

/// Apply a signed degree change to an accidental vector, returning the
/// updated vector. `degree_change` must be in `-7..=7`; zero is a no-op.
pub fn apply_degree_change(accidentals: [i8; 7], degree_change: i8) -> Result<[i8; 7]> {
    if !(-7..=7).contains(&degree_change) {
        return Err(TheoryError::InvalidArgument(format!(
            "degree change must be in -7..=7 (got {degree_change})"
        )));
    }
    if degree_change == 0 {
        return Ok(accidentals);
    }

    let index = usize::from(degree_change.unsigned_abs()) - 1;
    let mut updated = accidentals;
    updated[index] += degree_change.signum();
    if !(MIN_ACCIDENTAL..=MAX_ACCIDENTAL).contains(&updated[index]) {
        return Err(TheoryError::AccidentalOutOfRange {
            degree: index + 1,
            value: updated[index],
        });
    }
    Ok(updated)
}

/// Running state of a traversal: qualities and accidentals, index-aligned
/// so that entry `i` of both always describes degree `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    qualities: [Quality; 7],
    accidentals: [i8; 7],
}

impl ModeState {
    pub fn lydian() -> Self {
        ModeState {
            qualities: LYDIAN_QUALITIES,
            accidentals: LYDIAN_ACCIDENTALS,
        }
    }

    pub fn qualities(&self) -> [Quality; 7] {
        self.qualities
    }

    pub fn accidentals(&self) -> [i8; 7] {
        self.accidentals
    }

    /// Move one step: rotate the qualities, then apply the degree change.
    pub fn step(&self, degree_change: i8, rotation: isize) -> Result<ModeState> {
        Ok(ModeState {
            qualities: rotate_qualities(self.qualities, rotation),
            accidentals: apply_degree_change(self.accidentals, degree_change)?,
        })
    }
}

/// One derived mode: a quality and accidental for each degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mode {
    degrees: [(Quality, i8); 7],
}

impl Mode {
    pub fn quality(&self, degree: usize) -> Option<Quality> {
        degree
            .checked_sub(1)
            .and_then(|i| self.degrees.get(i))
            .map(|&(q, _)| q)
    }

    pub fn accidental(&self, degree: usize) -> Option<i8> {
        degree
            .checked_sub(1)
            .and_then(|i| self.degrees.get(i))
            .map(|&(_, a)| a)
    }

    /// Number of sharps (positive) or flats (negative) in the key signature
    /// of this mode on a natural tonic.
    pub fn key_signature(&self) -> i32 {
        self.degrees.iter().map(|&(_, a)| i32::from(a)).sum()
    }

    /// The seven roman-numeral labels, degree 1 first.
    pub fn numerals(&self) -> Result<[String; 7]> {
        let mut labels: [String; 7] = Default::default();
        for (degree, (slot, &(quality, accidental))) in
            (1..).zip(labels.iter_mut().zip(&self.degrees))
        {
            *slot = to_roman_numeral(degree, i32::from(accidental), quality)?;
        }
        Ok(labels)
    }
}

impl From<&ModeState> for Mode {
    fn from(state: &ModeState) -> Self {
        let mut degrees = [(Quality::Major, 0); 7];
        for (slot, (&q, &a)) in degrees
            .iter_mut()
            .zip(state.qualities.iter().zip(&state.accidentals))
        {
            *slot = (q, a);
        }
        Mode { degrees }
    }
}

/// Walk from Lydian, applying `changes` in order with a fixed rotation and
/// emitting the mode reached after each step.
fn walk(changes: impl Iterator<Item = i8>, rotation: isize) -> Result<Vec<Mode>> {
    let mut state = ModeState::lydian();
    let mut modes = Vec::new();
    for degree_change in changes {
        state = state.step(degree_change, rotation)?;
        let mode = Mode::from(&state);
        debug!(
            degree_change,
            rotation,
            key_signature = mode.key_signature(),
            "derived mode"
        );
        modes.push(mode);
    }
    Ok(modes)
}

/// Every mode in `ACCIDENTAL_ORDER`, index-aligned with it.
pub fn generate_all_modes() -> Result<Vec<Mode>> {
    let (sharp, flat) = rayon::join(
        || {
            walk(
                ACCIDENTAL_ORDER[..LYDIAN_POSITION].iter().rev().copied(),
                SHARPWARD_ROTATION,
            )
        },
        || {
            walk(
                ACCIDENTAL_ORDER[LYDIAN_POSITION + 1..].iter().copied(),
                FLATWARD_ROTATION,
            )
        },
    );

    let mut modes = sharp?;
    modes.reverse();
    modes.push(Mode::from(&ModeState::lydian().step(0, 0)?));
    modes.extend(flat?);
    debug!(count = modes.len(), "generated all modes");
    Ok(modes)
}
