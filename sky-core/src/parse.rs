//! Parser for the point-record input format.
//!
//! One record per line:
//!
//! ```text
//! position=< 9,  1> velocity=< 0,  2>
//! ```
//!
//! Integers may be negative and carry arbitrary spaces around them. The
//! delimiter discipline is split-on-`<`, then everything up to the next
//! `>` per angle group, then split-on-`,` inside the group.

use glam::IVec2;

use crate::error::{Error, Result};
use crate::point::Point;

/// Parses a whole input file into points, one per non-blank line.
///
/// ### Errors
/// [`Error::MalformedRecord`] naming the 1-based line number if a line is
/// missing an angle group, has the wrong number of components, or holds a
/// non-numeric component. A bad number is reported as a malformed record,
/// never surfaced as a raw integer-parse failure.
pub fn parse_records(input: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_record(line).ok_or_else(|| Error::MalformedRecord {
            line: idx + 1,
            content: line.to_string(),
        })?);
    }
    Ok(points)
}

/// Parses one `position=<X, Y> velocity=<DX, DY>` record.
fn parse_record(line: &str) -> Option<Point> {
    let mut groups = line.split('<');
    groups.next()?; // leading "position=" prefix
    let pos = parse_pair(groups.next()?)?;
    let vel = parse_pair(groups.next()?)?;
    Some(Point::new(pos, vel))
}

/// Parses the `X, Y>` remainder of one angle group.
fn parse_pair(group: &str) -> Option<IVec2> {
    let inner = group.split_once('>')?.0;
    let (x, y) = inner.split_once(',')?;
    if y.contains(',') {
        return None;
    }
    Some(IVec2::new(
        x.trim().parse().ok()?,
        y.trim().parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn parses_a_padded_record() {
        let pts = parse_records("position=< 9,  1> velocity=< 0,  2>\n").unwrap();
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].pos, IVec2::new(9, 1));
        assert_eq!(pts[0].vel, IVec2::new(0, 2));
    }

    #[test]
    fn parses_negative_components() {
        let pts = parse_records("position=<-3, -42> velocity=<-1,  5>").unwrap();
        assert_eq!(pts[0].pos, IVec2::new(-3, -42));
        assert_eq!(pts[0].vel, IVec2::new(-1, 5));
    }

    #[test]
    fn skips_blank_lines_and_keeps_record_order() {
        let input = "position=<1, 2> velocity=<0, 0>\n\nposition=<3, 4> velocity=<1, 1>\n";
        let pts = parse_records(input).unwrap();
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[1].pos, IVec2::new(3, 4));
    }

    #[test]
    fn missing_closing_bracket_is_a_malformed_record() {
        let err = parse_records("position=<1, 2 velocity=<0, 0>").unwrap_err();
        match err {
            Error::MalformedRecord { line, content } => {
                assert_eq!(line, 1);
                assert!(content.contains("position"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_component_is_a_malformed_record_not_a_panic() {
        let err = parse_records("position=<a, 2> velocity=<0, 0>").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn malformed_line_number_is_one_based_and_counts_blanks() {
        let input = "position=<1, 1> velocity=<0, 0>\n\nposition=<oops>\n";
        let err = parse_records(input).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn empty_input_parses_to_an_empty_list() {
        assert!(parse_records("").unwrap().is_empty());
    }
}
