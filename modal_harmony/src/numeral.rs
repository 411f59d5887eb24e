// Roman-numeral formatting for a single scale-degree triad.
//
// A label is built in three layers: the lowercase numeral for the degree,
// then the quality (uppercase for major, lowercase for minor, lowercase plus
// a superscript circle for diminished), then the accidental prefix
// (`bb`, `b`, none, `#`, `x`).
//
// The domain is finite (7 degrees x 5 accidentals x 3 qualities) and the
// function is pure, so callers may cache results freely.

use crate::error::{Result, TheoryError};
use crate::quality::Quality;
use tracing::trace;

/// Marker appended to diminished triads.
pub const DIMINISHED_MARKER: char = '°';

/// Lowest and highest accidental a numeral can carry (double flat, double sharp).
pub const MIN_ACCIDENTAL: i8 = -2;
pub const MAX_ACCIDENTAL: i8 = 2;

const BASE_NUMERALS: [&str; 7] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// Lowercase numeral for a 1-based scale degree.
fn base_numeral(degree: i32) -> Result<&'static str> {
    usize::try_from(degree)
        .ok()
        .and_then(|d| d.checked_sub(1))
        .and_then(|i| BASE_NUMERALS.get(i).copied())
        .ok_or_else(|| {
            TheoryError::InvalidArgument(format!("degree must be 1..7 (got {degree})"))
        })
}

/// Prefix spelling an accidental.
pub fn accidental_prefix(accidental: i32) -> Result<&'static str> {
    match accidental {
        -2 => Ok("bb"),
        -1 => Ok("b"),
        0 => Ok(""),
        1 => Ok("#"),
        2 => Ok("x"),
        _ => Err(TheoryError::InvalidArgument(format!(
            "accidental must be between -2 and 2 inclusive (got {accidental})"
        ))),
    }
}

/// Format the chord on `degree` (1..=7) with the given accidental and quality.
///
/// ```
/// use modal_harmony::numeral::to_roman_numeral;
/// use modal_harmony::quality::Quality;
///
/// assert_eq!(to_roman_numeral(4, 1, Quality::Diminished).unwrap(), "#iv°");
/// assert_eq!(to_roman_numeral(7, -1, Quality::Major).unwrap(), "bVII");
/// ```
pub fn to_roman_numeral(degree: i32, accidental: i32, quality: Quality) -> Result<String> {
    let base = base_numeral(degree)?;
    let prefix = accidental_prefix(accidental)?;

    let mut label = String::with_capacity(prefix.len() + base.len() + 2);
    label.push_str(prefix);
    match quality {
        Quality::Major => label.push_str(&base.to_ascii_uppercase()),
        Quality::Minor => label.push_str(base),
        Quality::Diminished => {
            label.push_str(base);
            label.push(DIMINISHED_MARKER);
        }
    }
    trace!(degree, accidental, %quality, %label, "formatted numeral");
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_casing() {
        assert_eq!(to_roman_numeral(1, 0, Quality::Major).unwrap(), "I");
        assert_eq!(to_roman_numeral(2, 0, Quality::Minor).unwrap(), "ii");
        assert_eq!(to_roman_numeral(7, 0, Quality::Diminished).unwrap(), "vii°");
    }

    #[test]
    fn test_accidental_prefixes() {
        assert_eq!(to_roman_numeral(3, -2, Quality::Major).unwrap(), "bbIII");
        assert_eq!(to_roman_numeral(3, -1, Quality::Minor).unwrap(), "biii");
        assert_eq!(to_roman_numeral(4, 1, Quality::Major).unwrap(), "#IV");
        assert_eq!(to_roman_numeral(5, 2, Quality::Diminished).unwrap(), "xv°");
    }

    #[test]
    fn test_total_over_valid_domain() {
        let mut seen = std::collections::HashSet::new();
        for degree in 1..=7 {
            for accidental in -2..=2 {
                for quality in Quality::ALL {
                    let first = to_roman_numeral(degree, accidental, quality).unwrap();
                    let second = to_roman_numeral(degree, accidental, quality).unwrap();
                    assert_eq!(first, second);
                    seen.insert(first);
                }
            }
        }
        // Every combination spells differently.
        assert_eq!(seen.len(), 105);
    }

    #[test]
    fn test_rejects_bad_degree() {
        for degree in [0, 8, -1, 100] {
            let err = to_roman_numeral(degree, 0, Quality::Major).unwrap_err();
            assert!(matches!(err, TheoryError::InvalidArgument(ref msg) if msg.contains("1..7")));
        }
    }

    #[test]
    fn test_rejects_bad_accidental() {
        for accidental in [-3, 3, 7] {
            assert!(matches!(
                to_roman_numeral(1, accidental, Quality::Minor),
                Err(TheoryError::InvalidArgument(_))
            ));
        }
    }
}
