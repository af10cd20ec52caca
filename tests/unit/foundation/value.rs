use super::*;

#[test]
fn literals_render_natively() {
    assert_eq!(Arg::from(3).to_literal(), "3");
    assert_eq!(Arg::from(-2.0).to_literal(), "-2");
    assert_eq!(Arg::from(0.5).to_literal(), "0.5");
    assert_eq!(Arg::from(true).to_literal(), "true");
    assert_eq!(Arg::from("last").to_literal(), "last");
}

#[test]
fn option_none_is_unset() {
    assert_eq!(Arg::from(None::<i32>), Arg::Unset);
    assert_eq!(Arg::from(Some(4)), Arg::Number(4.0));
    assert!(Arg::from(None::<&str>).is_unset());
}

#[test]
fn falsy_matches_script_truthiness() {
    assert!(Arg::Bool(false).is_falsy());
    assert!(Arg::Number(0.0).is_falsy());
    assert!(Arg::Text(String::new()).is_falsy());
    assert!(!Arg::Text("0".to_string()).is_falsy());
    assert!(!Arg::Number(1.0).is_falsy());
}

#[test]
fn json_values_map_to_tags() {
    let v = serde_json::json!([null, true, 2.5, "x", [1]]);
    let items = v.as_array().unwrap();
    assert_eq!(Arg::try_from(&items[0]).unwrap(), Arg::Unset);
    assert_eq!(Arg::try_from(&items[1]).unwrap(), Arg::Bool(true));
    assert_eq!(Arg::try_from(&items[2]).unwrap(), Arg::Number(2.5));
    assert_eq!(Arg::try_from(&items[3]).unwrap(), Arg::Text("x".to_string()));
    assert!(matches!(
        Arg::try_from(&items[4]),
        Err(AvsError::Validation(_))
    ));
}

#[test]
fn kind_distinguishes_runtime_shape() {
    assert_eq!(Arg::from(1).kind(), ArgKind::Number);
    assert_eq!(Arg::from("a").kind(), ArgKind::Text);
    assert_eq!(Arg::from(false).kind(), ArgKind::Bool);
    assert_eq!(Arg::Unset.kind(), ArgKind::Unset);
}
