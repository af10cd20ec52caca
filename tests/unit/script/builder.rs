use super::*;
use crate::{foundation::path::PathResolver, registry::plugins::PluginSource};
use std::path::PathBuf;

fn registry() -> Registry {
    let mut reg = Registry::with_core(PathResolver::new("/media")).unwrap();
    reg.register_signature(
        "FFVideoSource(rf:source, i:track, b:cache)",
        "",
        PluginSource::Plugin(PathBuf::from("plugins/ffms2.dll")),
    )
    .unwrap();
    reg.register_fn("Nothing", PluginSource::BuiltIn, |_| Ok(None))
        .unwrap();
    reg
}

#[test]
fn directive_is_emitted_once_before_first_call() {
    let reg = registry();
    let mut script = Script::new(&reg);
    script
        .call("FFVideoSource", &[Arg::from("a.mkv")])
        .unwrap()
        .call("ffvideosource", &[Arg::from("b.mkv"), Arg::from(1)])
        .unwrap();
    assert_eq!(
        script.code(),
        "LoadPlugin(\"/media/plugins/ffms2.dll\")\n\
         FFVideoSource(source=\"/media/a.mkv\")\n\
         FFVideoSource(source=\"/media/b.mkv\", track=1)\n"
    );
}

#[test]
fn raw_lines_are_newline_delimited() {
    let reg = registry();
    let mut script = Script::new(&reg);
    script.raw("clip = last");
    script.call("Reverse", &[]).unwrap();
    script.raw("return clip\n");
    assert_eq!(script.into_code(), "clip = last\nReverse()\nreturn clip\n");
}

#[test]
fn no_op_calls_leave_the_buffer_untouched() {
    let reg = registry();
    let mut script = Script::new(&reg);
    script.call("Nothing", &[]).unwrap();
    assert_eq!(script.code(), "");
}

#[test]
fn failed_call_appends_nothing() {
    let reg = registry();
    let mut script = Script::new(&reg);
    let err = script.call("FFVideoSource", &[]).unwrap_err();
    assert!(matches!(err, AvsError::SignatureMissingFilename { .. }));
    assert_eq!(script.code(), "");

    assert!(matches!(
        script.call("Missing", &[]),
        Err(AvsError::UnknownFunction(_))
    ));
}
