//! Backward scanner that segments an encoded name.
//!
//! The scan walks the string from the end towards the side prefix through
//! four states:
//!
//! ```text
//! Instance ──> Category ──> Iterator ──> Descriptor ──> Done
//!  trailing     last         digits       whatever is
//!  digits       uppercase    before the   left after
//!               letter       category     the side
//! ```
//!
//! Each transition checks what the next state relies on and stops with a
//! [`MalformedReason`] the moment the layout cannot hold. The cursor never
//! enters the two-character side prefix.

use std::ops::Range;

use crate::errors::MalformedReason;
use crate::side::SIDE_LEN;

/// Minimum viable name: side, one descriptor character, one category character.
pub const MIN_NAME_LEN: usize = SIDE_LEN + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Instance,
    Category,
    Iterator,
    Descriptor,
    Done,
}

/// Character-index ranges of each field within the scanned name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segments {
    pub side: Range<usize>,
    pub descriptor: Range<usize>,
    pub iterator: Range<usize>,
    pub category: Range<usize>,
    pub instance: Range<usize>,
}

pub(crate) fn scan(chars: &[char]) -> Result<Segments, MalformedReason> {
    if chars.is_empty() {
        return Err(MalformedReason::EmptyName);
    }
    if chars.len() < MIN_NAME_LEN {
        return Err(MalformedReason::TooShort);
    }

    let end = chars.len();
    let mut cursor = end;
    let mut instance = end..end;
    let mut category = end..end;
    let mut iterator = end..end;
    let mut descriptor = SIDE_LEN..SIDE_LEN;

    let mut state = ScanState::Instance;
    while state != ScanState::Done {
        state = match state {
            ScanState::Instance => {
                cursor = skip_digits(chars, cursor);
                instance = cursor..end;
                ScanState::Category
            }
            ScanState::Category => {
                let category_end = cursor;
                let start = chars[SIDE_LEN..category_end]
                    .iter()
                    .rposition(|c| c.is_uppercase())
                    .map(|i| i + SIDE_LEN)
                    .ok_or(MalformedReason::MissingCategory)?;
                cursor = start;
                category = start..category_end;
                ScanState::Iterator
            }
            ScanState::Iterator => {
                let iterator_end = cursor;
                cursor = skip_digits(chars, cursor);
                iterator = cursor..iterator_end;
                ScanState::Descriptor
            }
            ScanState::Descriptor => {
                if cursor == SIDE_LEN {
                    return Err(MalformedReason::EmptyDescriptor);
                }
                descriptor = SIDE_LEN..cursor;
                ScanState::Done
            }
            ScanState::Done => ScanState::Done,
        };
        log::trace!("name scan -> {state:?} (cursor {cursor})");
    }

    Ok(Segments {
        side: 0..SIDE_LEN,
        descriptor,
        iterator,
        category,
        instance,
    })
}

/// Moves `cursor` left over ASCII digits, stopping at the side prefix.
fn skip_digits(chars: &[char], mut cursor: usize) -> usize {
    while cursor > SIDE_LEN && chars[cursor - 1].is_ascii_digit() {
        cursor -= 1;
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(s: &str) -> Result<Segments, MalformedReason> {
        let chars: Vec<char> = s.chars().collect();
        scan(&chars)
    }

    #[test]
    fn full_layout() {
        let seg = segments("LfElbowFk2Ctrl3").unwrap();
        assert_eq!(seg.side, 0..2);
        assert_eq!(seg.descriptor, 2..9);
        assert_eq!(seg.iterator, 9..10);
        assert_eq!(seg.category, 10..14);
        assert_eq!(seg.instance, 14..15);
    }

    #[test]
    fn optional_fields_are_empty_ranges() {
        let seg = segments("CnSpineJnt").unwrap();
        assert!(seg.iterator.is_empty());
        assert!(seg.instance.is_empty());
        assert_eq!(seg.category, 7..10);
    }

    #[test]
    fn rejects_short_and_empty() {
        assert_eq!(segments(""), Err(MalformedReason::EmptyName));
        assert_eq!(segments("Lf"), Err(MalformedReason::TooShort));
        assert_eq!(segments("LfA"), Err(MalformedReason::TooShort));
    }

    #[test]
    fn rejects_missing_category() {
        assert_eq!(segments("Lfelbow"), Err(MalformedReason::MissingCategory));
        assert_eq!(segments("Lf1234"), Err(MalformedReason::MissingCategory));
    }

    #[test]
    fn rejects_empty_descriptor() {
        assert_eq!(segments("LfCtrl"), Err(MalformedReason::EmptyDescriptor));
        assert_eq!(segments("Lf12Ctrl"), Err(MalformedReason::EmptyDescriptor));
    }
}
