//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type returned by every fallible operation in `calc-algebra`.
//!
//! Arithmetic on fractions, factors, terms and expressions happens entirely in memory, so an
//! [`Error`] usually carries no source spans. An application that built its operands from some
//! source text (a REPL, a parser) can attach the spans of the offending operands with
//! [`Error::with_spans`], and [`Error::build_report`] will then point at them.

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `calc_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that callers can recover the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The message displayed at the top of the error.
    fn message(&self) -> String;

    /// Optional help text, describing what the user can do to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds the report for this error.
    ///
    /// Labels are attached to the given spans in order. If fewer spans than labels are given, the
    /// remaining labels are dropped.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error, optionally associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. Empty if the operands were
    /// not built from source code.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given kind and no spans.
    pub fn new(kind: impl ErrorKind + 'static) -> Self {
        Self { spans: Vec::new(), kind: Box::new(kind) }
    }

    /// Attaches the given spans to this error.
    pub fn with_spans(mut self, spans: Vec<Range<usize>>) -> Self {
        self.spans = spans;
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())?;
        if let Some(help) = self.kind.help() {
            write!(f, " (help: {})", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
