use ariadne::Source;
use calc_attrs::ErrorKind;
use calc_error::{Error, ErrorKind};

/// The divisor was zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by zero",
    labels = ["this divisor"],
    help = "use a non-zero denominator",
)]
struct ZeroDivisor;

/// Two operands cannot be combined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot combine `{}` with `{}`", self.left, self.right),
    labels = [
        format!("this is a `{}`", self.left),
        String::new(),
        format!("this is a `{}`", self.right),
    ],
)]
struct Incompatible {
    left: &'static str,
    right: &'static str,
}

/// Renders the report of the error without colors.
fn render(error: &Error, src: &str) -> String {
    let mut buf = Vec::new();
    error.build_report("input")
        .write(("input", Source::from(src)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn message_and_help() {
    let error = Error::new(ZeroDivisor);
    assert_eq!(error.kind.message(), "cannot divide by zero");
    assert_eq!(error.kind.help(), Some("use a non-zero denominator".to_string()));
    assert_eq!(error.to_string(), "cannot divide by zero (help: use a non-zero denominator)");
}

#[test]
fn message_uses_fields() {
    let error = Error::new(Incompatible { left: "radical", right: "logarithm" });
    assert_eq!(error.to_string(), "cannot combine `radical` with `logarithm`");
    assert_eq!(error.kind.help(), None);
}

#[test]
fn downcast_kind() {
    let error = Error::new(Incompatible { left: "radical", right: "radical" });
    assert!(error.is::<Incompatible>());
    assert!(!error.is::<ZeroDivisor>());
    assert_eq!(
        error.downcast_ref::<Incompatible>(),
        Some(&Incompatible { left: "radical", right: "radical" }),
    );
}

#[test]
fn report_without_spans() {
    let error = Error::new(ZeroDivisor);
    let report = render(&error, "1/0");
    assert!(report.contains("cannot divide by zero"));
    assert!(report.contains("use a non-zero denominator"));
    assert!(!report.contains("this divisor"));
}

#[test]
fn report_with_spans() {
    let src = "root(2, 3) * log(2, 8)";
    let error = Error::new(Incompatible { left: "radical", right: "logarithm" })
        .with_spans(vec![0..10, 11..12, 13..22]);
    let report = render(&error, src);
    assert!(report.contains("cannot combine `radical` with `logarithm`"));
    assert!(report.contains("this is a `radical`"));
    assert!(report.contains("this is a `logarithm`"));
}
