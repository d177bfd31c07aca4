use crate::color::{alpha_to_u8, Color};
use crate::error::StyleError;
use crate::primitives::Image;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("invalid regex"));

static RGBA_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*(?:\.\d+)?)\s*\)$")
        .expect("invalid regex")
});

static IMAGE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^url\(\s*'([^'\s]+)'\s*,\s*'([^'\s]+)'\s*\)$").expect("invalid regex"));

static FONT_SIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]*\.?[0-9]+)em$").expect("invalid regex"));

/// Style properties understood by the toolkit
///
/// Declarations naming any other property are ignored when a sheet is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    BackgroundColor,
    BackgroundImage,
    BorderColor,
    Color,
    FontFamily,
    FontSize,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::BackgroundColor,
        Property::BackgroundImage,
        Property::BorderColor,
        Property::Color,
        Property::FontFamily,
        Property::FontSize,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Property::BackgroundColor => "background-color",
            Property::BackgroundImage => "background-image",
            Property::BorderColor => "border-color",
            Property::Color => "color",
            Property::FontFamily => "font-family",
            Property::FontSize => "font-size",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|property| property.name() == name)
    }

    /// Decode a declaration value into the type this property holds
    pub fn parse_value(self, value: &str) -> Result<PropertyValue, StyleError> {
        let value = value.trim();
        let parsed = match self {
            Property::BackgroundColor | Property::BorderColor | Property::Color => {
                parse_color(value).map(PropertyValue::Color)
            }
            Property::BackgroundImage => parse_image(value).map(PropertyValue::Image),
            Property::FontFamily => value.parse::<i32>().ok().map(PropertyValue::Integer),
            Property::FontSize => parse_font_size(value).map(PropertyValue::FontSize),
        };

        parsed.ok_or_else(|| StyleError::InvalidValue {
            property: self,
            value: value.to_owned(),
        })
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded property value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Color(Color),
    Image(Image),
    Integer(i32),
    /// Font size in em
    FontSize(f32),
}

impl PropertyValue {
    pub const fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Color(_) => "color",
            PropertyValue::Image(_) => "image",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::FontSize(_) => "font size",
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            PropertyValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            PropertyValue::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            PropertyValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_font_size(&self) -> Option<f32> {
        match self {
            PropertyValue::FontSize(size) => Some(*size),
            _ => None,
        }
    }
}

/// `#rrggbb` or `rgba(r, g, b, a)` with a 0-1 alpha
fn parse_color(value: &str) -> Option<Color> {
    if let Some(caps) = HEX_COLOR.captures(value) {
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
        return Some(Color::rgb(channel(1)?, channel(2)?, channel(3)?));
    }

    let caps = RGBA_COLOR.captures(value)?;
    let channel = |i: usize| caps[i].parse::<u8>().ok();
    let alpha = caps[4].parse::<f32>().ok()?;
    if !(0.0..=1.0).contains(&alpha) {
        return None;
    }

    Some(Color::rgba(
        channel(1)?,
        channel(2)?,
        channel(3)?,
        alpha_to_u8(alpha),
    ))
}

/// `url('atlas', 'name')`
fn parse_image(value: &str) -> Option<Image> {
    let caps = IMAGE_URL.captures(value)?;
    Some(Image::new(&caps[1], &caps[2]))
}

/// `<number>em`
fn parse_font_size(value: &str) -> Option<f32> {
    let caps = FONT_SIZE.captures(value)?;
    caps[1].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            Property::Color.parse_value("#242730"),
            Ok(PropertyValue::Color(Color::rgba(36, 39, 48, 255)))
        );
        assert_eq!(
            Property::BackgroundColor.parse_value("#fffff0"),
            Ok(PropertyValue::Color(Color::rgba(255, 255, 240, 255)))
        );
    }

    #[test]
    fn test_parse_rgba_color() {
        assert_eq!(
            Property::Color.parse_value("rgba(0, 155, 103, 1.0)"),
            Ok(PropertyValue::Color(Color::rgba(0, 155, 103, 255)))
        );
        assert_eq!(
            Property::Color.parse_value("rgba(105,255,89,0.125)"),
            Ok(PropertyValue::Color(Color::rgba(105, 255, 89, 32)))
        );
        assert_eq!(
            Property::Color.parse_value("rgba(1, 2, 3, .5)"),
            Ok(PropertyValue::Color(Color::rgba(1, 2, 3, 128)))
        );
    }

    #[test]
    fn test_rejects_malformed_colors() {
        for value in ["#24273", "red", "rgba(256, 0, 0, 1)", "rgba(0, 0, 0)", "rgba(0,0,0,2)"] {
            assert!(Property::Color.parse_value(value).is_err(), "{value}");
        }
    }

    #[test]
    fn test_parse_image_and_sizes() {
        assert_eq!(
            Property::BackgroundImage.parse_value("url('commonmenu', 'gradient_bgd')"),
            Ok(PropertyValue::Image(Image::new("commonmenu", "gradient_bgd")))
        );
        assert_eq!(
            Property::FontSize.parse_value("0.325em"),
            Ok(PropertyValue::FontSize(0.325))
        );
        assert_eq!(
            Property::FontFamily.parse_value("4"),
            Ok(PropertyValue::Integer(4))
        );

        assert!(Property::BackgroundImage.parse_value("url(commonmenu)").is_err());
        assert!(Property::FontSize.parse_value("12px").is_err());
        assert!(Property::FontFamily.parse_value("serif").is_err());
    }
}
