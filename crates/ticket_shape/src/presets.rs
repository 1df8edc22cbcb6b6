//! Ready-made ticket styles
//!
//! Each preset pairs a [`TicketConfig`] with the size it was designed at.

use ticket_core::{Color, Size, Stroke};

use crate::view::TicketConfig;

/// A named ticket style and its intended size
#[derive(Clone, Debug, PartialEq)]
pub struct TicketPreset {
    pub name: &'static str,
    pub size: Size,
    pub config: TicketConfig,
}

/// Names of all presets, in display order
pub const PRESET_NAMES: [&str; 6] = [
    "basic",
    "event",
    "boarding_pass",
    "coupon",
    "movie",
    "train",
];

/// Default style at 250×350
pub fn basic() -> TicketPreset {
    TicketPreset {
        name: "basic",
        size: Size::new(250.0, 350.0),
        config: TicketConfig::default(),
    }
}

/// Event admission ticket
pub fn event() -> TicketPreset {
    TicketPreset {
        name: "event",
        size: Size::new(300.0, 450.0),
        config: TicketConfig::default()
            .with_fill_color(Color::PURPLE.with_alpha(0.1))
            .with_dashed_line_color(Color::PURPLE)
            .with_cutout_y_position(0.65),
    }
}

/// Airline boarding pass
pub fn boarding_pass() -> TicketPreset {
    TicketPreset {
        name: "boarding_pass",
        size: Size::new(320.0, 480.0),
        config: TicketConfig::default()
            .with_fill_color(Color::BLUE.with_alpha(0.05))
            .with_dashed_line_color(Color::BLUE.with_alpha(0.5))
            .with_cutout_y_position(0.7)
            .with_corner_radius(20.0)
            .with_dashed_line_stroke(Stroke::dashed(1.0, vec![6.0, 3.0])),
    }
}

/// Discount coupon
pub fn coupon() -> TicketPreset {
    TicketPreset {
        name: "coupon",
        size: Size::new(300.0, 420.0),
        config: TicketConfig::default()
            .with_fill_color(Color::ORANGE.with_alpha(0.1))
            .with_dashed_line_color(Color::ORANGE)
            .with_cutout_y_position(0.6)
            .with_cutout_radius(10.0)
            .with_dashed_line_stroke(Stroke::dashed(1.0, vec![8.0, 4.0])),
    }
}

/// Dark cinema ticket
pub fn movie() -> TicketPreset {
    TicketPreset {
        name: "movie",
        size: Size::new(280.0, 400.0),
        config: TicketConfig::default()
            .with_fill_color(Color::rgb(0.1, 0.1, 0.15))
            .with_dashed_line_color(Color::WHITE.with_alpha(0.2))
            .with_cutout_y_position(0.7),
    }
}

/// Railway ticket
pub fn train() -> TicketPreset {
    TicketPreset {
        name: "train",
        size: Size::new(320.0, 420.0),
        config: TicketConfig::default()
            .with_fill_color(Color::GREEN.with_alpha(0.1))
            .with_dashed_line_color(Color::GREEN)
            .with_cutout_y_position(0.65)
            .with_corner_radius(12.0),
    }
}

/// Every preset, in display order
pub fn all() -> Vec<TicketPreset> {
    vec![basic(), event(), boarding_pass(), coupon(), movie(), train()]
}

/// Look up a preset by name; `-` and `_` are interchangeable
pub fn by_name(name: &str) -> Option<TicketPreset> {
    let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
    all().into_iter().find(|preset| preset.name == normalized)
}
