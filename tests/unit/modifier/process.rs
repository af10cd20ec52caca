use super::*;

fn run(modifier: &str, value: Arg) -> AvsResult<String> {
    run_typed(modifier, value, &[])
}

fn run_typed(modifier: &str, value: Arg, types: &[&str]) -> AvsResult<String> {
    let allowed: Vec<String> = types.iter().map(|s| (*s).to_string()).collect();
    let paths = PathResolver::new("/media");
    process(
        &Modifiers::parse(modifier),
        value,
        ProcessOptions {
            allowed_types: &allowed,
            paths: &paths,
        },
    )
}

fn mismatch_kind(r: AvsResult<String>) -> TypeMismatchKind {
    match r {
        Err(AvsError::TypeMismatch { kind, .. }) => kind,
        other => panic!("expected type mismatch, got {other:?}"),
    }
}

#[test]
fn empty_modifier_passes_values_through() {
    assert_eq!(run("", Arg::from("last")).unwrap(), "last");
    assert_eq!(run("", Arg::from(2.25)).unwrap(), "2.25");
    assert_eq!(run("r", Arg::from(false)).unwrap(), "false");
}

#[test]
fn quote_and_path_modifiers_wrap_in_quotes() {
    assert_eq!(run("q", Arg::from("Arial")).unwrap(), "\"Arial\"");
    assert_eq!(run("p", Arg::from("a.avs")).unwrap(), "\"/media/a.avs\"");
    assert_eq!(run("f", Arg::from("../x.avi")).unwrap(), "\"/x.avi\"");
}

#[test]
fn path_modifiers_require_text() {
    assert_eq!(mismatch_kind(run("f", Arg::from(3))), TypeMismatchKind::Text);
}

#[test]
fn escape_takes_precedence_over_quoting() {
    assert_eq!(
        run("qe", Arg::from("a\\b\nc")).unwrap(),
        "\"\"\"a\\\\b\\nc\"\"\""
    );
}

#[test]
fn not_path_rejects_strings() {
    assert!(matches!(
        run("n", Arg::from("a.avi")),
        Err(AvsError::PathAmbiguity { .. })
    ));
    assert_eq!(run("n", Arg::from(4)).unwrap(), "4");
}

#[test]
fn bool_number_and_integer_checks() {
    assert_eq!(run("b", Arg::from(true)).unwrap(), "true");
    assert_eq!(mismatch_kind(run("b", Arg::from(1))), TypeMismatchKind::Boolean);

    assert_eq!(run("d", Arg::from(0.5)).unwrap(), "0.5");
    assert_eq!(mismatch_kind(run("d", Arg::from("1"))), TypeMismatchKind::Number);
    assert_eq!(
        mismatch_kind(run("d", Arg::from(f64::NAN))),
        TypeMismatchKind::Number
    );

    assert_eq!(run("i", Arg::from(7)).unwrap(), "7");
    assert_eq!(mismatch_kind(run("i", Arg::from(7.5))), TypeMismatchKind::Integer);
    assert_eq!(mismatch_kind(run("i", Arg::from(true))), TypeMismatchKind::Integer);
}

#[test]
fn integer_and_number_checks_run_independently() {
    assert_eq!(run("di", Arg::from(3)).unwrap(), "3");
    assert_eq!(mismatch_kind(run("di", Arg::from(3.5))), TypeMismatchKind::Integer);
}

#[test]
fn type_modifier_matches_exactly_and_quotes() {
    let types = ["YV12", "RGB32"];
    assert_eq!(run_typed("t", Arg::from("YV12"), &types).unwrap(), "\"YV12\"");
    assert_eq!(
        mismatch_kind(run_typed("t", Arg::from("yv12"), &types)),
        TypeMismatchKind::AllowedValue(vec!["YV12".to_string(), "RGB32".to_string()])
    );
    // empty values bypass the membership check
    assert_eq!(run_typed("t", Arg::from(""), &types).unwrap(), "\"\"");
}

#[test]
fn variable_modifier_requires_bare_identifier() {
    assert_eq!(run("v", Arg::from("abc_3")).unwrap(), "abc_3");
    assert_eq!(mismatch_kind(run("v", Arg::from("3abc"))), TypeMismatchKind::Variable);
    assert_eq!(mismatch_kind(run("v", Arg::from("a b"))), TypeMismatchKind::Variable);
    assert_eq!(mismatch_kind(run("v", Arg::from(1))), TypeMismatchKind::Variable);
}

#[test]
fn color_modifier_serializes_literal() {
    assert_eq!(run("c", Arg::from("white")).unwrap(), "$FFFFFF");
    assert_eq!(mismatch_kind(run("c", Arg::from("nope"))), TypeMismatchKind::Color);
}

#[test]
fn auto_type_keeps_numbers_and_booleans_native() {
    assert_eq!(run("a", Arg::from(12)).unwrap(), "12");
    assert_eq!(run("a", Arg::from(false)).unwrap(), "false");
    assert_eq!(run("a", Arg::from("clip1")).unwrap(), "clip1");
    assert_eq!(mismatch_kind(run("a", Arg::from("a b"))), TypeMismatchKind::Variable);
}

#[test]
fn auto_type_with_companions() {
    let types = ["Blend", "Add"];
    assert_eq!(run_typed("at", Arg::from("Add"), &types).unwrap(), "\"Add\"");
    assert_eq!(run_typed("at", Arg::from("mode_var"), &types).unwrap(), "mode_var");
    assert!(run_typed("at", Arg::from("not valid"), &types).is_err());
    assert_eq!(run_typed("at", Arg::from(""), &types).unwrap(), "\"\"");
    assert_eq!(run_typed("at", Arg::from(3), &types).unwrap(), "3");

    assert_eq!(run("ap", Arg::from("x.avs")).unwrap(), "\"/media/x.avs\"");
    assert_eq!(run("ap", Arg::from(1)).unwrap(), "1");
    assert_eq!(run("aq", Arg::from("any text")).unwrap(), "\"any text\"");
}
