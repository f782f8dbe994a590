//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that associates an [`ErrorKind`] with regions of a formula.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io::{self, Write}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the error as a [`dyn Any`], so that the concrete kind can be recovered.
    ///
    /// [`dyn Any`]: Any
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<T>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the rendered report for this error to the given writer.
    pub fn write_report<W: Write>(&self, src_id: &str, input: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct Unbalanced;

    impl ErrorKind for Unbalanced {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message("unbalanced input")
                .with_labels(spans.iter().map(|span| {
                    Label::new((src_id, span.clone()))
                        .with_color(EXPR)
                        .with_message("this one")
                }))
                .finish()
        }
    }

    /// Renders the report of the given error without ANSI color codes.
    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn report_contains_message_and_label() {
        let err = Error::new(vec![0..1], Unbalanced);
        let rendered = render(&err, "(x + 1");
        assert!(rendered.contains("unbalanced input"));
        assert!(rendered.contains("this one"));
    }

    #[test]
    fn report_has_one_label_per_span() {
        let err = Error::new(vec![0..1, 5..6], Unbalanced);
        let rendered = render(&err, "(x + )");
        assert_eq!(rendered.matches("this one").count(), 2);
    }

    #[test]
    fn recover_kind() {
        let err = Error::new(vec![0..1], Unbalanced);
        assert!(err.is::<Unbalanced>());
    }
}
