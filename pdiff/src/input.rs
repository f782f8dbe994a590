use log::trace;
use std::ops::Range;
use super::error::{Error, InvalidCoordinate, MissingCoordinate, TrailingInput};

/// Returns the whitespace-separated words of the input, along with their spans.
fn words(input: &str) -> Vec<(Range<usize>, &str)> {
    let mut words = Vec::new();
    let mut start = None;

    for (i, c) in input.char_indices() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                words.push((s..i, &input[s..i]));
                start = None;
            },
            _ => (),
        }
    }

    if let Some(s) = start {
        words.push((s..input.len(), &input[s..]));
    }

    words
}

/// Reads a point from two whitespace-separated finite numbers, such as `3 4` or `-1.5 2e3`.
pub fn parse_point(input: &str) -> Result<(f64, f64), Error> {
    let to_error = |kind| Error::input("point", input, kind);
    let words = words(input);

    let mut coords = [0.0; 2];
    for (i, name) in ["x", "y"].into_iter().enumerate() {
        let Some((span, word)) = words.get(i) else {
            let end = input.trim_end().len();
            return Err(to_error(pdiff_error::Error::new(vec![end..end], MissingCoordinate { name })));
        };

        coords[i] = word
            .parse::<f64>()
            .ok()
            .filter(|coord| coord.is_finite())
            .ok_or_else(|| to_error(pdiff_error::Error::new(vec![span.clone()], InvalidCoordinate { name })))?;
    }

    if let Some((span, _)) = words.get(2) {
        let end = words.last().map_or(span.end, |(last, _)| last.end);
        return Err(to_error(pdiff_error::Error::new(vec![span.start..end], TrailingInput)));
    }

    trace!("read point ({}, {}) from {:?}", coords[0], coords[1], input);
    Ok((coords[0], coords[1]))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Returns the spans of the inner error, panicking if it is not an input error.
    fn spans_of(err: Error) -> Vec<Range<usize>> {
        match err {
            Error::Input { error, .. } => error.spans,
            Error::Formula(err) => panic!("expected an input error, got {:?}", err),
        }
    }

    #[test]
    fn split_words() {
        assert_eq!(words("  3 \t-4.5\n"), vec![(2..3, "3"), (5..9, "-4.5")]);
    }

    #[test]
    fn read_point() {
        assert_eq!(parse_point("3 4").unwrap(), (3.0, 4.0));
        assert_eq!(parse_point("  -1.5\t2e3 \n").unwrap(), (-1.5, 2000.0));
    }

    #[test]
    fn invalid_coordinate() {
        let err = parse_point("3 four").unwrap_err();
        assert!(matches!(&err, Error::Input { error, .. } if error.is::<InvalidCoordinate>()));
        assert_eq!(spans_of(err), vec![2..6]);
    }

    #[test]
    fn non_finite_coordinate() {
        for input in ["NaN 1", "inf 1", "1 -infinity"] {
            let err = parse_point(input).unwrap_err();
            assert!(matches!(&err, Error::Input { error, .. } if error.is::<InvalidCoordinate>()));
        }
        assert_eq!(spans_of(parse_point("1 nan").unwrap_err()), vec![2..5]);
    }

    #[test]
    fn missing_coordinate() {
        let err = parse_point("3 ").unwrap_err();
        assert!(matches!(&err, Error::Input { error, .. } if error.is::<MissingCoordinate>()));
        assert_eq!(spans_of(err), vec![1..1]);

        let err = parse_point("").unwrap_err();
        assert!(matches!(&err, Error::Input { error, .. } if error.is::<MissingCoordinate>()));
    }

    #[test]
    fn trailing_input() {
        let err = parse_point("1 2 3 4").unwrap_err();
        assert!(matches!(&err, Error::Input { error, .. } if error.is::<TrailingInput>()));
        assert_eq!(spans_of(err), vec![4..7]);
    }

    #[test]
    fn report_names_coordinate() {
        let input = "1,2";
        let Error::Input { error, .. } = parse_point(input).unwrap_err() else {
            panic!("expected an input error");
        };
        let mut buf = Vec::new();
        error.write_report("point", input, &mut buf).unwrap();
        let rendered = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(rendered.contains("could not read the x coordinate"));
    }
}
