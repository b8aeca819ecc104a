//! Named color palette
//!
//! Colors are declared as HSL tuples and converted on access. Hue families
//! sit on a 15 degree wheel with seven lightness steps (12.5% to 87.5%) and
//! one desaturated shade each. Not every 15 degree step has a family: 105,
//! 135 and 225 degrees are left unnamed.

use super::color::Color;

macro_rules! palette {
    ($($name:ident => ($h:expr, $s:expr, $l:expr)),* $(,)?) => {
        impl Color {
            $(
                #[doc = concat!("Named color `", stringify!($name), "` (HSL ", stringify!($h), ", ", stringify!($s), ", ", stringify!($l), ")")]
                pub fn $name() -> Color {
                    Color::from_hsl($h, $s, $l)
                }
            )*
        }

        /// Every named color as `(name, hue, saturation, lightness)`
        pub const PALETTE: &[(&str, f32, f32, f32)] = &[
            $((stringify!($name), $h, $s, $l)),*
        ];
    };
}

palette! {
    // Greys
    darkest_grey => (0.0, 0.0, 12.5),
    darker_grey => (0.0, 0.0, 25.0),
    dark_grey => (0.0, 0.0, 37.5),
    grey => (0.0, 0.0, 50.0),
    light_grey => (0.0, 0.0, 62.5),
    lighter_grey => (0.0, 0.0, 75.0),
    lightest_grey => (0.0, 0.0, 87.5),
    // Sepia
    darkest_sepia => (36.0, 33.0, 12.5),
    darker_sepia => (36.0, 33.0, 25.0),
    dark_sepia => (36.0, 33.0, 37.5),
    sepia => (36.0, 33.0, 50.0),
    light_sepia => (36.0, 33.0, 62.5),
    lighter_sepia => (36.0, 33.0, 75.0),
    lightest_sepia => (36.0, 33.0, 87.5),
    // Red
    darkest_red => (0.0, 100.0, 12.5),
    darker_red => (0.0, 100.0, 25.0),
    dark_red => (0.0, 100.0, 37.5),
    red => (0.0, 100.0, 50.0),
    light_red => (0.0, 100.0, 62.5),
    lighter_red => (0.0, 100.0, 75.0),
    lightest_red => (0.0, 100.0, 87.5),
    desaturated_red => (0.0, 33.0, 37.5),
    // Flame
    darkest_flame => (15.0, 100.0, 12.5),
    darker_flame => (15.0, 100.0, 25.0),
    dark_flame => (15.0, 100.0, 37.5),
    flame => (15.0, 100.0, 50.0),
    light_flame => (15.0, 100.0, 62.5),
    lighter_flame => (15.0, 100.0, 75.0),
    lightest_flame => (15.0, 100.0, 87.5),
    desaturated_flame => (15.0, 33.0, 37.5),
    // Orange
    darkest_orange => (30.0, 100.0, 12.5),
    darker_orange => (30.0, 100.0, 25.0),
    dark_orange => (30.0, 100.0, 37.5),
    orange => (30.0, 100.0, 50.0),
    light_orange => (30.0, 100.0, 62.5),
    lighter_orange => (30.0, 100.0, 75.0),
    lightest_orange => (30.0, 100.0, 87.5),
    desaturated_orange => (30.0, 33.0, 37.5),
    // Amber
    darkest_amber => (45.0, 100.0, 12.5),
    darker_amber => (45.0, 100.0, 25.0),
    dark_amber => (45.0, 100.0, 37.5),
    amber => (45.0, 100.0, 50.0),
    light_amber => (45.0, 100.0, 62.5),
    lighter_amber => (45.0, 100.0, 75.0),
    lightest_amber => (45.0, 100.0, 87.5),
    desaturated_amber => (45.0, 33.0, 37.5),
    // Yellow
    darkest_yellow => (60.0, 100.0, 12.5),
    darker_yellow => (60.0, 100.0, 25.0),
    dark_yellow => (60.0, 100.0, 37.5),
    yellow => (60.0, 100.0, 50.0),
    light_yellow => (60.0, 100.0, 62.5),
    lighter_yellow => (60.0, 100.0, 75.0),
    lightest_yellow => (60.0, 100.0, 87.5),
    desaturated_yellow => (60.0, 33.0, 37.5),
    // Lime
    darkest_lime => (75.0, 100.0, 12.5),
    darker_lime => (75.0, 100.0, 25.0),
    dark_lime => (75.0, 100.0, 37.5),
    lime => (75.0, 100.0, 50.0),
    light_lime => (75.0, 100.0, 62.5),
    lighter_lime => (75.0, 100.0, 75.0),
    lightest_lime => (75.0, 100.0, 87.5),
    desaturated_lime => (75.0, 33.0, 37.5),
    // Chartreuse
    darkest_chartreuse => (90.0, 100.0, 12.5),
    darker_chartreuse => (90.0, 100.0, 25.0),
    dark_chartreuse => (90.0, 100.0, 37.5),
    chartreuse => (90.0, 100.0, 50.0),
    light_chartreuse => (90.0, 100.0, 62.5),
    lighter_chartreuse => (90.0, 100.0, 75.0),
    lightest_chartreuse => (90.0, 100.0, 87.5),
    desaturated_chartreuse => (90.0, 33.0, 37.5),
    // No 105° family
    // Green
    darkest_green => (120.0, 100.0, 12.5),
    darker_green => (120.0, 100.0, 25.0),
    dark_green => (120.0, 100.0, 37.5),
    green => (120.0, 100.0, 50.0),
    light_green => (120.0, 100.0, 62.5),
    lighter_green => (120.0, 100.0, 75.0),
    lightest_green => (120.0, 100.0, 87.5),
    desaturated_green => (120.0, 33.0, 37.5),
    // No 135° family
    // Sea
    darkest_sea => (150.0, 100.0, 12.5),
    darker_sea => (150.0, 100.0, 25.0),
    dark_sea => (150.0, 100.0, 37.5),
    sea => (150.0, 100.0, 50.0),
    light_sea => (150.0, 100.0, 62.5),
    lighter_sea => (150.0, 100.0, 75.0),
    lightest_sea => (150.0, 100.0, 87.5),
    desaturated_sea => (150.0, 33.0, 37.5),
    // Turquoise
    darkest_turquoise => (165.0, 100.0, 12.5),
    darker_turquoise => (165.0, 100.0, 25.0),
    dark_turquoise => (165.0, 100.0, 37.5),
    turquoise => (165.0, 100.0, 50.0),
    light_turquoise => (165.0, 100.0, 62.5),
    lighter_turquoise => (165.0, 100.0, 75.0),
    lightest_turquoise => (165.0, 100.0, 87.5),
    desaturated_turquoise => (165.0, 33.0, 37.5),
    // Cyan
    darkest_cyan => (180.0, 100.0, 12.5),
    darker_cyan => (180.0, 100.0, 25.0),
    dark_cyan => (180.0, 100.0, 37.5),
    cyan => (180.0, 100.0, 50.0),
    light_cyan => (180.0, 100.0, 62.5),
    lighter_cyan => (180.0, 100.0, 75.0),
    lightest_cyan => (180.0, 100.0, 87.5),
    desaturated_cyan => (180.0, 33.0, 37.5),
    // Sky
    darkest_sky => (195.0, 100.0, 12.5),
    darker_sky => (195.0, 100.0, 25.0),
    dark_sky => (195.0, 100.0, 37.5),
    sky => (195.0, 100.0, 50.0),
    light_sky => (195.0, 100.0, 62.5),
    lighter_sky => (195.0, 100.0, 75.0),
    lightest_sky => (195.0, 100.0, 87.5),
    desaturated_sky => (195.0, 33.0, 37.5),
    // Azure
    darkest_azure => (210.0, 100.0, 12.5),
    darker_azure => (210.0, 100.0, 25.0),
    dark_azure => (210.0, 100.0, 37.5),
    azure => (210.0, 100.0, 50.0),
    light_azure => (210.0, 100.0, 62.5),
    lighter_azure => (210.0, 100.0, 75.0),
    lightest_azure => (210.0, 100.0, 87.5),
    desaturated_azure => (210.0, 33.0, 37.5),
    // No 225° family
    // Blue
    darkest_blue => (240.0, 100.0, 12.5),
    darker_blue => (240.0, 100.0, 25.0),
    dark_blue => (240.0, 100.0, 37.5),
    blue => (240.0, 100.0, 50.0),
    light_blue => (240.0, 100.0, 62.5),
    lighter_blue => (240.0, 100.0, 75.0),
    lightest_blue => (240.0, 100.0, 87.5),
    desaturated_blue => (240.0, 33.0, 37.5),
    // Han
    darkest_han => (255.0, 100.0, 12.5),
    darker_han => (255.0, 100.0, 25.0),
    dark_han => (255.0, 100.0, 37.5),
    han => (255.0, 100.0, 50.0),
    light_han => (255.0, 100.0, 62.5),
    lighter_han => (255.0, 100.0, 75.0),
    lightest_han => (255.0, 100.0, 87.5),
    desaturated_han => (255.0, 33.0, 37.5),
    // Violet
    darkest_violet => (270.0, 100.0, 12.5),
    darker_violet => (270.0, 100.0, 25.0),
    dark_violet => (270.0, 100.0, 37.5),
    violet => (270.0, 100.0, 50.0),
    light_violet => (270.0, 100.0, 62.5),
    lighter_violet => (270.0, 100.0, 75.0),
    lightest_violet => (270.0, 100.0, 87.5),
    desaturated_violet => (270.0, 33.0, 37.5),
    // Purple
    darkest_purple => (285.0, 100.0, 12.5),
    darker_purple => (285.0, 100.0, 25.0),
    dark_purple => (285.0, 100.0, 37.5),
    purple => (285.0, 100.0, 50.0),
    light_purple => (285.0, 100.0, 62.5),
    lighter_purple => (285.0, 100.0, 75.0),
    lightest_purple => (285.0, 100.0, 87.5),
    desaturated_purple => (285.0, 33.0, 37.5),
    // Fuchsia
    darkest_fuchsia => (300.0, 100.0, 12.5),
    darker_fuchsia => (300.0, 100.0, 25.0),
    dark_fuchsia => (300.0, 100.0, 37.5),
    fuchsia => (300.0, 100.0, 50.0),
    light_fuchsia => (300.0, 100.0, 62.5),
    lighter_fuchsia => (300.0, 100.0, 75.0),
    lightest_fuchsia => (300.0, 100.0, 87.5),
    desaturated_fuchsia => (300.0, 33.0, 37.5),
    // Magenta
    darkest_magenta => (315.0, 100.0, 12.5),
    darker_magenta => (315.0, 100.0, 25.0),
    dark_magenta => (315.0, 100.0, 37.5),
    magenta => (315.0, 100.0, 50.0),
    light_magenta => (315.0, 100.0, 62.5),
    lighter_magenta => (315.0, 100.0, 75.0),
    lightest_magenta => (315.0, 100.0, 87.5),
    desaturated_magenta => (315.0, 33.0, 37.5),
    // Pink
    darkest_pink => (330.0, 100.0, 12.5),
    darker_pink => (330.0, 100.0, 25.0),
    dark_pink => (330.0, 100.0, 37.5),
    pink => (330.0, 100.0, 50.0),
    light_pink => (330.0, 100.0, 62.5),
    lighter_pink => (330.0, 100.0, 75.0),
    lightest_pink => (330.0, 100.0, 87.5),
    desaturated_pink => (330.0, 33.0, 37.5),
    // Crimson
    darkest_crimson => (345.0, 100.0, 12.5),
    darker_crimson => (345.0, 100.0, 25.0),
    dark_crimson => (345.0, 100.0, 37.5),
    crimson => (345.0, 100.0, 50.0),
    light_crimson => (345.0, 100.0, 62.5),
    lighter_crimson => (345.0, 100.0, 75.0),
    lightest_crimson => (345.0, 100.0, 87.5),
    desaturated_crimson => (345.0, 33.0, 37.5),
    // Metallic and misc
    brass => (35.0, 45.0, 55.0),
    copper => (10.0, 37.5, 62.5),
    gold => (50.0, 100.0, 45.0),
    silver => (0.0, 0.0, 80.0),
    celadon => (120.0, 100.0, 85.0),
    peach => (15.0, 100.0, 75.0),
}

impl Color {
    /// Look a color up by palette name (`"black"` and `"white"` included)
    pub fn named(name: &str) -> Option<Color> {
        match name {
            "black" => Some(Color::BLACK),
            "white" => Some(Color::WHITE),
            _ => PALETTE
                .iter()
                .find(|(candidate, ..)| *candidate == name)
                .map(|&(_, h, s, l)| Color::from_hsl(h, s, l)),
        }
    }
}
