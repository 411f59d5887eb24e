// Modal Harmony
//
// Computes the seven roman-numeral chord labels for every diatonic mode
// reachable from Lydian by a chain of key-signature shifts (Sharp Ionian
// through Flat Ionian), plus two auxiliary tables: secondary chords (each
// degree tonicized as a temporary major key) and borrowed chords (the same
// degree across parallel modes).
//
// Architecture:
// - quality.rs: Major/minor/diminished triad quality
// - numeral.rs: (degree, accidental, quality) -> roman numeral label
// - mode.rs: Lydian constants, `ACCIDENTAL_ORDER`, degree-change guard and the
//   circle-of-fifths mode generator
// - key_names.rs: Explicit position -> name table, validated before use
// - borrowed.rs: Borrowed-chord table (one row per generated mode)
// - secondary.rs: Secondary-chord table (7x7)
// - table.rs: `LabelTable`/`LabelRow`, the hand-off to any renderer
// - error.rs: `TheoryError`
//
// Everything is a pure, deterministic computation over constant data.
// Rendering lives in `modal_harmony_cli`.

pub mod borrowed;
pub mod error;
pub mod key_names;
pub mod mode;
pub mod numeral;
pub mod quality;
pub mod secondary;
pub mod table;

pub use borrowed::{borrowed_chord_table, borrowed_chords_with_signature};
pub use error::{Result, TheoryError};
pub use mode::{Mode, generate_all_modes};
pub use numeral::to_roman_numeral;
pub use quality::Quality;
pub use secondary::secondary_chord_table;
pub use table::{LabelRow, LabelTable};
