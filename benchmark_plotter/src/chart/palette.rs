//!
//! Chart colors and fonts.
//!

use plotters::style::text_anchor::HPos;
use plotters::style::text_anchor::Pos;
use plotters::style::text_anchor::VPos;
use plotters::style::FontDesc;
use plotters::style::FontStyle;
use plotters::style::IntoFont;
use plotters::style::RGBColor;
use plotters::style::TextStyle;
use plotters::style::BLACK;
use plotters::style::GREEN;
use plotters::style::RED;
use plotters::style::WHITE;

/// The font family of every chart text.
pub const FONT_FAMILY: &str = "sans-serif";

/// Orange.
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
/// Purple.
pub const PURPLE: RGBColor = RGBColor(128, 0, 128);
/// The single-threaded callout background.
pub const LIGHT_CORAL: RGBColor = RGBColor(240, 128, 128);
/// The multi-threaded and efficiency callout background.
pub const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);

/// Speedups above this value are drawn green.
pub const STRONG_SPEEDUP: f64 = 2.0;
/// Speedups above this value are drawn orange, the rest red.
pub const MODERATE_SPEEDUP: f64 = 1.5;

///
/// The bar fill of a speedup value.
///
pub fn speedup_color(speedup: f64) -> RGBColor {
    if speedup > STRONG_SPEEDUP {
        GREEN
    } else if speedup > MODERATE_SPEEDUP {
        ORANGE
    } else {
        RED
    }
}

///
/// The label color readable on top of [`speedup_color`].
///
pub fn speedup_label_color(speedup: f64) -> &'static RGBColor {
    if speedup > MODERATE_SPEEDUP {
        &WHITE
    } else {
        &BLACK
    }
}

///
/// The panel caption font.
///
pub fn caption_font() -> FontDesc<'static> {
    (FONT_FAMILY, 22).into_font()
}

///
/// The axis description font.
///
pub fn axis_font() -> FontDesc<'static> {
    (FONT_FAMILY, 16).into_font()
}

///
/// The tick and legend label font.
///
pub fn tick_font() -> FontDesc<'static> {
    (FONT_FAMILY, 13).into_font()
}

///
/// A callout text style centered on its anchor.
///
pub fn callout_style(size: i32) -> TextStyle<'static> {
    TextStyle::from((FONT_FAMILY, size).into_font()).pos(Pos::new(HPos::Center, VPos::Center))
}

///
/// A bold callout text style centered on its anchor.
///
pub fn bold_callout_style(size: i32) -> TextStyle<'static> {
    TextStyle::from((FONT_FAMILY, size).into_font().style(FontStyle::Bold))
        .pos(Pos::new(HPos::Center, VPos::Center))
}

///
/// The pixel corners of a box fitting a callout of `text` shifted by `dy` pixels.
///
pub fn callout_box(text: &str, size: i32, dy: i32) -> [(i32, i32); 2] {
    let half_width = text.chars().count() as i32 * size * 3 / 10 + 6;
    let half_height = size * 7 / 10 + 3;
    [(-half_width, dy - half_height), (half_width, dy + half_height)]
}
