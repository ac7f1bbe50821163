use ariadne::Source;
use symdiff_attrs::ErrorKind;
use symdiff_error::Error;

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("`{}` is not a known widget", name),
    labels = ["this widget"],
    help = "try `gear` instead",
)]
struct UnknownWidget {
    name: String,
}

#[derive(Debug, ErrorKind)]
#[error(message = "nothing here")]
struct Empty;

/// Renders the report for the error into a plain string.
fn render(err: &Error, input: &str) -> String {
    let mut buf = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(input)), &mut buf)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
}

#[test]
fn report_contains_message_label_and_help() {
    let input = "build sprocket";
    let err = Error::new(vec![6..14], UnknownWidget { name: "sprocket".to_string() });
    let report = render(&err, input);

    assert!(report.contains("`sprocket` is not a known widget"));
    assert!(report.contains("this widget"));
    assert!(report.contains("try `gear` instead"));
}

#[test]
fn display_uses_message() {
    let err = Error::new(vec![], UnknownWidget { name: "cog".to_string() });
    assert_eq!(err.to_string(), "`cog` is not a known widget");
}

#[test]
fn report_without_spans() {
    let err = Error::new(vec![], Empty);
    assert!(render(&err, "").contains("nothing here"));
}

#[test]
fn downcast_to_kind() {
    let err = Error::new(vec![0..1], UnknownWidget { name: "x".to_string() });
    assert!(err.is::<UnknownWidget>());
    assert!(!err.is::<Empty>());
    assert_eq!(err.downcast_ref::<UnknownWidget>().unwrap().name, "x");
}
