use super::*;

fn registry() -> Registry {
    Registry::new(PathResolver::new("/media"))
}

#[test]
fn register_and_invoke_signature() {
    let mut reg = registry();
    reg.register_signature(
        "Crop(ri:, ri:, ri:, ri:, b:align)",
        CommaList::default(),
        PluginSource::BuiltIn,
    )
    .unwrap();
    let out = reg
        .invoke("crop", &[Arg::from(1), Arg::from(2), Arg::from(3), Arg::from(4)])
        .unwrap();
    assert_eq!(out.as_deref(), Some("Crop(1, 2, 3, 4)"));
}

#[test]
fn duplicate_names_are_rejected_case_insensitively() {
    let mut reg = registry();
    reg.register_signature("Blur(rd:)", "", PluginSource::BuiltIn)
        .unwrap();
    let err = reg
        .register_signature("BLUR(rd:)", "", PluginSource::BuiltIn)
        .unwrap_err();
    assert!(matches!(err, AvsError::RegistryDuplicateName(name) if name == "BLUR"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn reserved_and_invalid_names_are_rejected() {
    let mut reg = registry();
    let err = reg
        .register_signature("Import(rf:)", "", PluginSource::BuiltIn)
        .unwrap_err();
    assert!(matches!(err, AvsError::RegistryReservedName(_)));

    let err = reg
        .register_signature("2Pass(ri:)", "", PluginSource::BuiltIn)
        .unwrap_err();
    assert!(matches!(err, AvsError::Validation(_)));
    assert!(reg.is_empty());
}

#[test]
fn names_follow_lowercase_key_order() {
    let mut reg = registry();
    for sig in ["Zoom(rd:)", "blur(rd:)", "Crop(ri:)"] {
        reg.register_signature(sig, "", PluginSource::BuiltIn)
            .unwrap();
    }
    assert_eq!(reg.names().collect::<Vec<_>>(), vec!["blur", "Crop", "Zoom"]);

    let core = Registry::with_core(PathResolver::new("/media")).unwrap();
    let names: Vec<&str> = core.names().collect();
    assert_eq!(names.len(), core.len());
    assert!(names.windows(2).all(|w| w[0].to_ascii_lowercase() < w[1].to_ascii_lowercase()));
    assert!(names.contains(&"ConvertToYV12"));
}

#[test]
fn casing_aliases_resolve_to_one_entry() {
    let mut reg = registry();
    reg.register_signature("FFVideoSource(rf:)", "", PluginSource::BuiltIn)
        .unwrap();
    assert_eq!(
        reg.aliases("ffvideosource"),
        vec!["FFVIDEOSOURCE", "FFVideoSource", "fFVideoSource", "ffvideosource"]
    );
    for alias in [
        "FFVideoSource",
        "ffvideosource",
        "FFVIDEOSOURCE",
        "fFVideoSource",
        "FfVideoSource",
    ] {
        assert_eq!(reg.lookup(alias).map(|e| e.name.as_str()), Some("FFVideoSource"));
    }
}

#[test]
fn custom_calls_may_emit_nothing() {
    let mut reg = registry();
    reg.register_fn("Noop", PluginSource::BuiltIn, |_args| Ok(None))
        .unwrap();
    reg.register_fn("Echo", PluginSource::BuiltIn, |args| {
        Ok(Some(format!("Echo({})", args.len())))
    })
    .unwrap();
    assert_eq!(reg.invoke("noop", &[]).unwrap(), None);
    assert_eq!(
        reg.invoke("echo", &[Arg::from(1)]).unwrap().as_deref(),
        Some("Echo(1)")
    );
    assert!(reg.lookup("noop").unwrap().signature().is_none());
}

#[test]
fn unknown_function_is_an_error() {
    let reg = registry();
    assert!(matches!(
        reg.invoke("Missing", &[]),
        Err(AvsError::UnknownFunction(name)) if name == "Missing"
    ));
}

#[test]
fn directives_resolve_paths() {
    let paths = PathResolver::new("/media");
    assert_eq!(PluginSource::BuiltIn.directive(&paths), None);
    assert_eq!(
        PluginSource::Plugin(PathBuf::from("plugins/ffms2.dll")).directive(&paths),
        Some("LoadPlugin(\"/media/plugins/ffms2.dll\")".to_string())
    );
    assert_eq!(
        PluginSource::Script(PathBuf::from("/lib/tools.avsi")).directive(&paths),
        Some("Import(\"/lib/tools.avsi\")".to_string())
    );
}

#[test]
fn core_table_registers_cleanly() {
    let reg = Registry::with_core(PathResolver::new("/media")).unwrap();
    assert_eq!(reg.len(), CORE_FUNCTIONS.len());
    assert_eq!(
        reg.invoke(
            "crop",
            &[Arg::from(0), Arg::from(0), Arg::from(320), Arg::from(240), Arg::from(true)]
        )
        .unwrap()
        .as_deref(),
        Some("Crop(0, 0, 320, 240, align=true)")
    );
    assert_eq!(
        reg.invoke("ConvertToYV12", &[Arg::from("Rec709")])
            .unwrap()
            .as_deref(),
        Some("ConvertToYV12(matrix=\"Rec709\")")
    );
}
