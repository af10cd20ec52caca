use super::*;

#[test]
fn named_colors_resolve() {
    assert_eq!(parse_color(&Arg::from("red")).unwrap(), "$FF0000");
    assert_eq!(parse_color(&Arg::from("Color_Navy")).unwrap(), "$000080");
}

#[test]
fn integers_render_as_hex_literals() {
    assert_eq!(parse_color(&Arg::from(0xFF00FF)).unwrap(), "$FF00FF");
    assert_eq!(parse_color(&Arg::from(0)).unwrap(), "$000000");
    assert_eq!(parse_color(&Arg::from(0x80FF_0000_i64)).unwrap(), "$80FF0000");
}

#[test]
fn hex_text_forms_are_accepted() {
    assert_eq!(parse_color(&Arg::from("#F0F")).unwrap(), "$FF00FF");
    assert_eq!(parse_color(&Arg::from("#FF00FF")).unwrap(), "$FF00FF");
    assert_eq!(parse_color(&Arg::from("0x123ABC")).unwrap(), "$123ABC");
    assert_eq!(parse_color(&Arg::from("$00ff00")).unwrap(), "$00FF00");
    assert_eq!(parse_color(&Arg::from("#40102030")).unwrap(), "$40102030");
}

#[test]
fn invalid_colors_are_type_mismatches() {
    for bad in [
        Arg::from("#GG0000"),
        Arg::from("#12345"),
        Arg::from("no-such-color"),
        Arg::from(-1),
        Arg::from(1.5),
        Arg::from(true),
    ] {
        assert!(matches!(
            parse_color(&bad),
            Err(AvsError::TypeMismatch {
                kind: TypeMismatchKind::Color,
                ..
            })
        ));
    }
}
