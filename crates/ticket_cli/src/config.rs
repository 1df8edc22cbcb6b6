//! Ticket configuration file handling
//!
//! A `ticket.toml` has two optional sections:
//! - `[canvas]` - preset name, ticket size and padding around it
//! - `[ticket]` - style overrides applied on top of the preset
//!
//! ```toml
//! [canvas]
//! preset = "coupon"
//! width = 300
//! height = 420
//!
//! [ticket]
//! fill_color = "#fff7e6"
//! dash = [8, 4]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ticket_core::{Color, Size, Stroke};
use ticket_shape::presets::{self, TicketPreset, PRESET_NAMES};
use ticket_shape::TicketConfig;

/// Default file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "ticket.toml";

/// Contents of a `ticket.toml`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TicketFile {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub ticket: StyleConfig,
}

/// Output canvas settings
#[derive(Debug, Deserialize, Serialize)]
pub struct CanvasConfig {
    /// Preset to start from (see `ticket presets`)
    #[serde(default)]
    pub preset: Option<String>,
    /// Ticket width; defaults to the preset's width
    #[serde(default)]
    pub width: Option<f32>,
    /// Ticket height; defaults to the preset's height
    #[serde(default)]
    pub height: Option<f32>,
    /// Empty space around the ticket
    #[serde(default = "default_padding")]
    pub padding: f32,
}

fn default_padding() -> f32 {
    16.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            preset: None,
            width: None,
            height: None,
            padding: default_padding(),
        }
    }
}

/// Style overrides; every field is optional
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StyleConfig {
    /// `#RRGGBB` or `#RRGGBBAA`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    /// `#RRGGBB` or `#RRGGBBAA`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashed_line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutout_y_position: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutout_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashed_line_offset: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashed_line_width: Option<f32>,
    /// Dash pattern; an empty list draws a solid separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_dashed_line: Option<bool>,
}

/// A fully resolved ticket ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTicket {
    pub size: Size,
    pub padding: f32,
    pub config: TicketConfig,
}

impl ResolvedTicket {
    /// Size of the output canvas including padding
    pub fn canvas_size(&self) -> Size {
        Size::new(
            self.size.width + 2.0 * self.padding,
            self.size.height + 2.0 * self.padding,
        )
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color> {
    Color::from_hex_str(value)
        .with_context(|| format!("Invalid {} '{}'", field, value))
}

/// Look up a preset or fail with the list of valid names
pub fn find_preset(name: &str) -> Result<TicketPreset> {
    presets::by_name(name).with_context(|| {
        format!(
            "Unknown preset '{}'. Valid presets: {:?}",
            name, PRESET_NAMES
        )
    })
}

impl StyleConfig {
    /// Apply these overrides to `base`
    pub fn apply(&self, base: &TicketConfig) -> Result<TicketConfig> {
        let mut config = base.clone();

        if let Some(color) = &self.fill_color {
            config = config.with_fill_color(parse_color("fill_color", color)?);
        }
        if let Some(color) = &self.dashed_line_color {
            config = config.with_dashed_line_color(parse_color("dashed_line_color", color)?);
        }
        if let Some(position) = self.cutout_y_position {
            config = config.with_cutout_y_position(position);
        }
        if let Some(radius) = self.cutout_radius {
            config = config.with_cutout_radius(radius);
        }
        if let Some(radius) = self.corner_radius {
            config = config.with_corner_radius(radius);
        }
        if let Some(offset) = self.dashed_line_offset {
            config = config.with_dashed_line_offset(offset);
        }
        if self.dashed_line_width.is_some() || self.dash.is_some() {
            let mut stroke = config.dashed_line_stroke.clone();
            if let Some(width) = self.dashed_line_width {
                stroke.width = width;
            }
            if let Some(dash) = &self.dash {
                stroke.dash = dash.clone();
            }
            config = config.with_dashed_line_stroke(stroke);
        }
        if let Some(show) = self.show_dashed_line {
            config = config.with_dashed_line(show);
        }

        Ok(config)
    }

    /// Every field spelled out from a resolved config
    pub fn from_config(config: &TicketConfig) -> Self {
        let Stroke { width, dash, .. } = &config.dashed_line_stroke;
        Self {
            fill_color: Some(config.fill_color.to_hex_string()),
            dashed_line_color: Some(config.dashed_line_color.to_hex_string()),
            cutout_y_position: Some(config.cutout_y_position),
            cutout_radius: Some(config.cutout_radius),
            corner_radius: Some(config.corner_radius),
            dashed_line_offset: Some(config.dashed_line_offset),
            dashed_line_width: Some(*width),
            dash: Some(dash.clone()),
            show_dashed_line: Some(config.show_dashed_line),
        }
    }
}

impl TicketFile {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `ticket.toml` from a directory, or defaults when there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(
                "No {} in {}, using defaults",
                CONFIG_FILE_NAME,
                dir.display()
            );
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid ticket configuration")
    }

    /// A file that reproduces `preset` with every field written out
    pub fn from_preset(preset: &TicketPreset) -> Self {
        Self {
            canvas: CanvasConfig {
                preset: Some(preset.name.to_string()),
                width: Some(preset.size.width),
                height: Some(preset.size.height),
                padding: default_padding(),
            },
            ticket: StyleConfig::from_config(&preset.config),
        }
    }

    /// Resolve preset, size and overrides into a renderable ticket
    pub fn resolve(&self) -> Result<ResolvedTicket> {
        let preset = match &self.canvas.preset {
            Some(name) => find_preset(name)?,
            None => presets::basic(),
        };

        let config = self.ticket.apply(&preset.config)?;
        let size = Size::new(
            self.canvas.width.unwrap_or(preset.size.width),
            self.canvas.height.unwrap_or(preset.size.height),
        );

        Ok(ResolvedTicket {
            size,
            padding: self.canvas.padding,
            config,
        })
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize ticket configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_resolves_to_basic() {
        let resolved = TicketFile::parse("").unwrap().resolve().unwrap();
        assert_eq!(resolved.config, TicketConfig::default());
        assert_eq!(resolved.size, Size::new(250.0, 350.0));
        assert_eq!(resolved.padding, 16.0);
        assert_eq!(resolved.canvas_size(), Size::new(282.0, 382.0));
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let file = TicketFile::parse(
            r##"
            [canvas]
            preset = "coupon"
            width = 200
            padding = 0

            [ticket]
            fill_color = "#000000"
            corner_radius = 4
            dash = [2, 1]
            show_dashed_line = false
            "##,
        )
        .unwrap();
        let resolved = file.resolve().unwrap();
        let coupon = presets::coupon();

        assert_eq!(resolved.size, Size::new(200.0, 420.0));
        assert_eq!(resolved.config.fill_color, Color::BLACK);
        assert_eq!(resolved.config.corner_radius, 4.0);
        assert_eq!(resolved.config.dashed_line_stroke.dash, vec![2.0, 1.0]);
        assert_eq!(
            resolved.config.dashed_line_stroke.width,
            coupon.config.dashed_line_stroke.width
        );
        assert!(!resolved.config.show_dashed_line);
        assert_eq!(resolved.config.cutout_radius, coupon.config.cutout_radius);
        assert_eq!(resolved.canvas_size(), Size::new(200.0, 420.0));
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let file = TicketFile::parse("[ticket]\nfill_color = \"blue\"\n").unwrap();
        let err = file.resolve().unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid fill_color 'blue'"));
    }

    #[test]
    fn test_unknown_preset_is_reported() {
        let file = TicketFile::parse("[canvas]\npreset = \"concert\"\n").unwrap();
        let err = file.resolve().unwrap_err();
        assert!(err.to_string().contains("Unknown preset 'concert'"));
    }

    #[test]
    fn test_wrong_type_fails_to_parse() {
        assert!(TicketFile::parse("[ticket]\ncorner_radius = \"big\"\n").is_err());
    }

    #[test]
    fn test_preset_file_reproduces_preset() {
        for preset in presets::all() {
            let toml = TicketFile::from_preset(&preset).to_toml().unwrap();
            let resolved = TicketFile::parse(&toml).unwrap().resolve().unwrap();

            assert_eq!(resolved.size, preset.size, "size of {}", preset.name);
            assert_eq!(
                resolved.config.cutout_y_position, preset.config.cutout_y_position,
                "cutout of {}",
                preset.name
            );
            assert_eq!(
                resolved.config.dashed_line_stroke, preset.config.dashed_line_stroke,
                "stroke of {}",
                preset.name
            );
            assert_eq!(
                resolved.config.fill_color.to_rgba8(),
                preset.config.fill_color.to_rgba8(),
                "fill of {}",
                preset.name
            );
        }
    }
}
