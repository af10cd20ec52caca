/// Built-in filters as `(signature, allowed types)`.
pub(crate) const CORE_FUNCTIONS: &[(&str, &[&str])] = &[
    // sources
    ("AviSource(rmf:, b:audio, t:pixel_type, q:fourCC)", PIXEL_TYPES),
    ("DirectShowSource(rf:, d:fps, b:seek, b:audio, b:video, b:convertfps, t:pixel_type)", PIXEL_TYPES),
    ("ImageSource(rf:, i:start, i:end, d:fps, b:use_DevIL, b:info, t:pixel_type)", PIXEL_TYPES),
    ("WavSource(rmf:)", &[]),
    ("BlankClip(v:, i:length, i:width, i:height, t:pixel_type, d:fps, i:audio_rate, i:channels, c:color)", PIXEL_TYPES),
    ("ColorBars(i:width, i:height, t:pixel_type)", PIXEL_TYPES),
    ("Version()", &[]),
    // editing
    ("Trim(ri:, ri:, b:pad)", &[]),
    ("Crop(ri:, ri:, ri:, ri:, b:align)", &[]),
    ("AddBorders(ri:, ri:, ri:, ri:, c:color)", &[]),
    ("FadeIn(ri:, c:color, d:fps)", &[]),
    ("FadeOut(ri:, c:color, d:fps)", &[]),
    ("FadeIO(ri:, c:color, d:fps)", &[]),
    ("Reverse()", &[]),
    ("Loop(i:times, i:start, i:end)", &[]),
    ("SelectEvery(ri:, rmi:)", &[]),
    ("AssumeFPS(rd:, i:, b:sync_audio)", &[]),
    ("ChangeFPS(rd:, i:, b:linear)", &[]),
    ("UnalignedSplice(rmv:)", &[]),
    ("AlignedSplice(rmv:)", &[]),
    ("Dissolve(rmv:, ri:, d:fps)", &[]),
    // color and format
    ("ConvertToRGB24(t:matrix, b:interlaced)", MATRICES),
    ("ConvertToRGB32(t:matrix, b:interlaced)", MATRICES),
    ("ConvertToYUY2(t:matrix, b:interlaced)", MATRICES),
    ("ConvertToYV12(t:matrix, b:interlaced)", MATRICES),
    ("Greyscale(t:matrix)", MATRICES),
    ("Levels(ri:, rd:, ri:, ri:, ri:, b:coring, b:dither)", &[]),
    ("Tweak(d:hue, d:sat, d:bright, d:cont, b:coring)", &[]),
    ("Invert(q:channels)", &[]),
    // resizing
    ("BilinearResize(ri:, ri:, d:src_left, d:src_top, d:src_width, d:src_height)", &[]),
    ("BicubicResize(ri:, ri:, d:b, d:c, d:src_left, d:src_top, d:src_width, d:src_height)", &[]),
    ("LanczosResize(ri:, ri:, d:src_left, d:src_top, d:src_width, d:src_height, i:taps)", &[]),
    ("Spline36Resize(ri:, ri:, d:src_left, d:src_top, d:src_width, d:src_height)", &[]),
    ("PointResize(ri:, ri:)", &[]),
    // overlays and layout
    ("Subtitle(re:, d:x, d:y, i:first_frame, i:last_frame, q:font, d:size, c:text_color, c:halo_color, i:align, i:spc, i:lsp, d:font_width, d:font_angle, b:interlaced)", &[]),
    ("Overlay(rv:, i:x, i:y, v:mask, d:opacity, t:mode, b:greymask, q:output, b:ignore_conditional, b:pc_range)", OVERLAY_MODES),
    ("Layer(rv:, t:op, i:level, i:x, i:y, i:threshold, b:use_chroma)", LAYER_OPS),
    ("StackHorizontal(rmv:)", &[]),
    ("StackVertical(rmv:)", &[]),
    ("Info()", &[]),
    ("ShowFrameNumber(b:scroll, i:offset, d:x, d:y, q:font, d:size, c:text_color, c:halo_color)", &[]),
    // audio
    ("Amplify(rmd:)", &[]),
    ("AmplifydB(rmd:)", &[]),
    ("Normalize(d:volume, b:show)", &[]),
    ("AudioDub(rv:, rv:)", &[]),
    ("KillAudio()", &[]),
    ("KillVideo()", &[]),
    ("DelayAudio(rd:)", &[]),
    ("ResampleAudio(ri:)", &[]),
];

const PIXEL_TYPES: &[&str] = &["RGB24", "RGB32", "YUY2", "YV12", "Y8", "YV16", "YV24"];
const MATRICES: &[&str] = &["Rec601", "Rec709", "PC.601", "PC.709", "AVERAGE"];
const OVERLAY_MODES: &[&str] = &[
    "Blend",
    "Add",
    "Subtract",
    "Multiply",
    "Chroma",
    "Luma",
    "Lighten",
    "Darken",
    "SoftLight",
    "HardLight",
    "Difference",
    "Exclusion",
];
const LAYER_OPS: &[&str] = &["add", "subtract", "lighten", "darken", "fast", "mul"];
