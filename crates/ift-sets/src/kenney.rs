//! Kenney game icon font raw entries.

/// Webfont file the codepoints belong to.
pub const FONT_FILE_NAME: &str = "kenney-icon-font.ttf";

/// Suffix used for the font-file constant in emitted modules.
pub const ABBREVIATION: &str = "KI";

pub const ICON_MIN: u32 = 0xe900;
pub const ICON_MAX_16: u32 = 0xe9e3;
pub const ICON_MAX: u32 = 0xe9e3;

#[rustfmt::skip]
pub const ENTRIES: &[(&str, &str)] = &[
    ("home", "\u{e900}"),
    ("adjust", "\u{e901}"),
    ("wrench", "\u{e902}"),
    ("cog", "\u{e903}"),
    ("off", "\u{e904}"),
    ("expand", "\u{e905}"),
    ("reduce", "\u{e906}"),
    ("movie", "\u{e907}"),
    ("flap", "\u{e908}"),
    ("shopping-cart", "\u{e909}"),
    ("shopping-case", "\u{e90a}"),
    ("external", "\u{e90b}"),
    ("network", "\u{e90c}"),
    ("check", "\u{e90d}"),
    ("times", "\u{e90e}"),
    ("times-circle", "\u{e90f}"),
    ("plus", "\u{e910}"),
    ("plus-circle", "\u{e911}"),
    ("minus", "\u{e912}"),
    ("minus-circle", "\u{e913}"),
    ("info", "\u{e914}"),
    ("info-circle", "\u{e915}"),
    ("question", "\u{e916}"),
    ("question-circle", "\u{e917}"),
    ("exlamation", "\u{e918}"),
    ("exclamation-circle", "\u{e919}"),
    ("exclamation-triangle", "\u{e91a}"),
    ("paint-brush", "\u{e91b}"),
    ("pencil", "\u{e91c}"),
    ("checkbox", "\u{e91d}"),
    ("checkbox-checked", "\u{e91e}"),
    ("radio", "\u{e91f}"),
    ("radio-checked", "\u{e920}"),
    ("sort-vertical", "\u{e921}"),
    ("sort-horizontal", "\u{e922}"),
    ("grid", "\u{e923}"),
    ("list", "\u{e924}"),
    ("rows", "\u{e925}"),
    ("cells", "\u{e926}"),
    ("signal-low", "\u{e927}"),
    ("signal-medium", "\u{e928}"),
    ("signal-high", "\u{e929}"),
    ("trash", "\u{e92a}"),
    ("trash-alt", "\u{e92b}"),
    ("reload-inverse", "\u{e92c}"),
    ("reload", "\u{e92d}"),
    ("top", "\u{e92e}"),
    ("bottom", "\u{e92f}"),
    ("upload", "\u{e930}"),
    ("download", "\u{e931}"),
    ("cloud", "\u{e932}"),
    ("cloud-upload", "\u{e933}"),
    ("cloud-download", "\u{e934}"),
    ("search", "\u{e935}"),
    ("search-plus", "\u{e936}"),
    ("search-minus", "\u{e937}"),
    ("search-equal", "\u{e938}"),
    ("lock", "\u{e939}"),
    ("unlock", "\u{e93a}"),
    ("user", "\u{e93b}"),
    ("users", "\u{e93c}"),
    ("users-alt", "\u{e93d}"),
    ("sign-in", "\u{e93e}"),
    ("sign-in-inverse", "\u{e93f}"),
    ("sign-out", "\u{e940}"),
    ("sign-out-inverse", "\u{e941}"),
    ("arrow-top", "\u{e942}"),
    ("arrow-right", "\u{e943}"),
    ("arrow-bottom", "\u{e944}"),
    ("arrow-left", "\u{e945}"),
    ("arrow-top-left", "\u{e946}"),
    ("arrow-top-right", "\u{e947}"),
    ("arrow-bottom-right", "\u{e948}"),
    ("arrow-bottom-left", "\u{e949}"),
    ("caret-top", "\u{e94a}"),
    ("caret-right", "\u{e94b}"),
    ("caret-bottom", "\u{e94c}"),
    ("caret-left", "\u{e94d}"),
    ("next-alt", "\u{e94e}"),
    ("next", "\u{e94f}"),
    ("previous", "\u{e950}"),
    ("previous-alt", "\u{e951}"),
    ("fill", "\u{e952}"),
    ("eraser", "\u{e953}"),
    ("save", "\u{e954}"),
    ("step-backward", "\u{e955}"),
    ("backward", "\u{e956}"),
    ("pause", "\u{e957}"),
    ("forward", "\u{e958}"),
    ("step-forward", "\u{e959}"),
    ("stop", "\u{e95a}"),
    ("rec", "\u{e95b}"),
    ("cursor", "\u{e95c}"),
    ("pointer", "\u{e95d}"),
    ("exit", "\u{e95e}"),
    ("figure", "\u{e95f}"),
    ("car", "\u{e960}"),
    ("coin", "\u{e961}"),
    ("key", "\u{e962}"),
    ("cub", "\u{e963}"),
    ("diamond", "\u{e964}"),
    ("badge", "\u{e965}"),
    ("badge-alt", "\u{e966}"),
    ("podium", "\u{e967}"),
    ("podium-alt", "\u{e968}"),
    ("flag", "\u{e969}"),
    ("fist", "\u{e96a}"),
    ("fist-circle", "\u{e96b}"),
    ("heart", "\u{e96c}"),
    ("heart-half", "\u{e96d}"),
    ("heart-half-o", "\u{e96e}"),
    ("heart-o", "\u{e96f}"),
    ("star", "\u{e970}"),
    ("star-half", "\u{e971}"),
    ("star-half-o", "\u{e972}"),
    ("star-o", "\u{e973}"),
    ("button-b", "\u{e974}"),
    ("music-on", "\u{e975}"),
    ("music-off", "\u{e976}"),
    ("sound-on", "\u{e977}"),
    ("sound-off", "\u{e978}"),
    ("sound-off-alt", "\u{e979}"),
    ("robot", "\u{e97a}"),
    ("computer", "\u{e97b}"),
    ("tablet", "\u{e97c}"),
    ("smartphone", "\u{e97d}"),
    ("device", "\u{e97e}"),
    ("device-tilt-left", "\u{e97f}"),
    ("device-tilt-right", "\u{e980}"),
    ("gamepad", "\u{e981}"),
    ("gamepad-alt", "\u{e982}"),
    ("gamepad-tilt-left", "\u{e983}"),
    ("gamepad-tilt-right", "\u{e984}"),
    ("player-one", "\u{e985}"),
    ("player-two", "\u{e986}"),
    ("player-three", "\u{e987}"),
    ("player-four", "\u{e988}"),
    ("joystick", "\u{e989}"),
    ("joystick-alt", "\u{e98a}"),
    ("joystick-left", "\u{e98b}"),
    ("joystick-right", "\u{e98c}"),
    ("mouse-alt", "\u{e98d}"),
    ("mouse", "\u{e98e}"),
    ("mouse-left-button", "\u{e98f}"),
    ("mouse-right-button", "\u{e990}"),
    ("button-one", "\u{e991}"),
    ("button-two", "\u{e992}"),
    ("button-three", "\u{e993}"),
    ("button-a", "\u{e994}"),
    ("button-x", "\u{e995}"),
    ("buton-y", "\u{e996}"),
    ("button-times", "\u{e997}"),
    ("button-square", "\u{e998}"),
    ("button-circle", "\u{e999}"),
    ("button-triangle", "\u{e99a}"),
    ("button-left", "\u{e99b}"),
    ("button-l", "\u{e99c}"),
    ("button-l1", "\u{e99d}"),
    ("button-l2", "\u{e99e}"),
    ("button-lb", "\u{e99f}"),
    ("button-lt", "\u{e9a0}"),
    ("button-rt", "\u{e9a1}"),
    ("button-rb", "\u{e9a2}"),
    ("button-r2", "\u{e9a3}"),
    ("button-r1", "\u{e9a4}"),
    ("button-r", "\u{e9a5}"),
    ("button-right", "\u{e9a6}"),
    ("button-empty", "\u{e9a7}"),
    ("button-start", "\u{e9a8}"),
    ("button-select", "\u{e9a9}"),
    ("dpad", "\u{e9aa}"),
    ("dpad-alt", "\u{e9ab}"),
    ("dpad-top", "\u{e9ac}"),
    ("dpad-right", "\u{e9ad}"),
    ("dpad-bottom", "\u{e9ae}"),
    ("dpad-left", "\u{e9af}"),
    ("key-large", "\u{e9b0}"),
    ("key-large3d", "\u{e9b1}"),
    ("key-small", "\u{e9b2}"),
    ("key-small3d", "\u{e9b3}"),
    ("stick-left-top", "\u{e9b4}"),
    ("stick-left-side", "\u{e9b5}"),
    ("stick-right-side", "\u{e9b6}"),
    ("stick-right-top", "\u{e9b7}"),
    ("stick-side", "\u{e9b8}"),
    ("stick-tilt-left", "\u{e9b9}"),
    ("stick-tilt-right", "\u{e9ba}"),
    ("move-bl", "\u{e9bb}"),
    ("move-br", "\u{e9bc}"),
    ("move-bt", "\u{e9bd}"),
    ("move-bt-alt", "\u{e9be}"),
    ("move-lb", "\u{e9bf}"),
    ("move-lr", "\u{e9c0}"),
    ("move-lr-alt", "\u{e9c1}"),
    ("move-lt", "\u{e9c2}"),
    ("move-rb", "\u{e9c3}"),
    ("move-rl", "\u{e9c4}"),
    ("move-rl-alt", "\u{e9c5}"),
    ("move-rt", "\u{e9c6}"),
    ("move-tb", "\u{e9c7}"),
    ("move-tb-alt", "\u{e9c8}"),
    ("move-tl", "\u{e9c9}"),
    ("move-tr", "\u{e9ca}"),
    ("stick-move-bl", "\u{e9cb}"),
    ("stick-move-br", "\u{e9cc}"),
    ("stick-move-bt", "\u{e9cd}"),
    ("stick-move-bt-alt", "\u{e9ce}"),
    ("stick-move-lb", "\u{e9cf}"),
    ("stick-move-lr", "\u{e9d0}"),
    ("stick-move-lr-alt", "\u{e9d1}"),
    ("stick-move-lt", "\u{e9d2}"),
    ("stick-move-rb", "\u{e9d3}"),
    ("stick-move-rl", "\u{e9d4}"),
    ("stick-move-rl-alt", "\u{e9d5}"),
    ("stick-move-rt", "\u{e9d6}"),
    ("stick-move-tb", "\u{e9d7}"),
    ("stick-move-tb-alt", "\u{e9d8}"),
    ("stick-move-tl", "\u{e9d9}"),
    ("stick-move-tr", "\u{e9da}"),
    ("github", "\u{e9db}"),
    ("github-alt", "\u{e9dc}"),
    ("twitter", "\u{e9dd}"),
    ("facebook", "\u{e9de}"),
    ("google-plus", "\u{e9df}"),
    ("youtube", "\u{e9e2}"),
    ("we-heart", "\u{e9e3}"),
    ("wolfcms", "\u{e9e0}"),
    ("wolfcms-alt", "\u{e9e1}"),
];
