//! Cascading widget styles
//!
//! A [`Style`] resolves `(StyleKey, Property)` queries against two tables:
//!
//! 1. the user sheet installed with [`Style::set_sheet`], if any;
//! 2. the built-in default sheet, parsed once on first use and shared by every
//!    `Style` in the process.
//!
//! Rules in a user sheet augment the default rule for the same selector: a bag
//! for `button` or `#confirm.button` only needs to declare the properties it
//! changes, everything else falls back to the default `button` bag.

mod key;
mod metrics;
mod sheet;
mod value;

pub use key::*;
pub use metrics::*;
pub use value::*;

use crate::color::Color;
use crate::error::StyleError;
use crate::primitives::Image;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_STYLE: &str = r#"button, check-box, sprite-button, text-edit {
    background-color: #242730;
    color: #FFFFF0;
    font-family: 0;
    font-size: 0.325em;
}

check-box:hover {
    background-color: #242730;
    color: #F50551;
}

button:hover, sprite-button:hover {
    background-color: #F50551;
    color: #FFFFF0;
}

heading {
    color: #FFFFF0;
    font-family: 4;
    font-size: 0.725em;
}

label, text-area {
    color: #C4C4BD;
    font-family: 0;
    font-size: 0.325em;
}

progress-bar {
    background-color: #242730;
    color: rgba(0, 155, 103, 1.0);
}

separator {
    color: #242730;
}

slider {
    background-color: #242730;
    color: #C4C4BD;
}

slider:hover, text-edit:hover {
    background-color: #242730;
    color: #F50551;
}

window {
    background-color: #32353D;
    border-color: #242730;
    color: rgba(105, 255, 89, 0.125);
}"#;

type PropertyMap = HashMap<Property, PropertyValue>;
type SheetTable = HashMap<StyleKey, StylePropertyValues>;

static DEFAULT_SHEET: Lazy<SheetTable> = Lazy::new(|| {
    let table = compile(DEFAULT_STYLE, false).expect("built-in stylesheet is valid");
    log::debug!("parsed default stylesheet ({} selectors)", table.len());
    table
});

/// Properties resolved for one selector, backed by the default bag of the same selector
#[derive(Debug, Clone)]
pub struct StylePropertyValues {
    key: StyleKey,
    properties: PropertyMap,
    fallback: Option<&'static PropertyMap>,
}

impl StylePropertyValues {
    pub fn key(&self) -> &StyleKey {
        &self.key
    }

    /// Properties declared for this selector itself, without the fallback
    pub fn properties(&self) -> impl Iterator<Item = (&Property, &PropertyValue)> {
        self.properties.iter()
    }

    pub fn try_get(&self, property: Property) -> Option<&PropertyValue> {
        self.properties
            .get(&property)
            .or_else(|| self.fallback.and_then(|fallback| fallback.get(&property)))
    }

    pub fn get(&self, property: Property) -> Result<&PropertyValue, StyleError> {
        self.try_get(property)
            .ok_or_else(|| StyleError::MissingProperty {
                key: self.key.clone(),
                property,
            })
    }

    pub fn set(&mut self, property: Property, value: PropertyValue) {
        self.properties.insert(property, value);
    }

    pub fn color(&self, property: Property) -> Result<Color, StyleError> {
        let value = self.get(property)?;
        value.as_color().ok_or_else(|| self.mismatch(property, "color"))
    }

    pub fn try_color(&self, property: Property) -> Option<Color> {
        self.try_get(property).and_then(PropertyValue::as_color)
    }

    pub fn image(&self, property: Property) -> Result<&Image, StyleError> {
        let value = self.get(property)?;
        value.as_image().ok_or_else(|| self.mismatch(property, "image"))
    }

    pub fn try_image(&self, property: Property) -> Option<&Image> {
        self.try_get(property).and_then(PropertyValue::as_image)
    }

    pub fn integer(&self, property: Property) -> Result<i32, StyleError> {
        let value = self.get(property)?;
        value.as_integer().ok_or_else(|| self.mismatch(property, "integer"))
    }

    pub fn font_size(&self, property: Property) -> Result<f32, StyleError> {
        let value = self.get(property)?;
        value.as_font_size().ok_or_else(|| self.mismatch(property, "font size"))
    }

    fn mismatch(&self, property: Property, expected: &'static str) -> StyleError {
        StyleError::TypeMismatch {
            key: self.key.clone(),
            property,
            expected,
        }
    }
}

/// Widget style: user sheet over the built-in default sheet, plus layout metrics
#[derive(Debug, Clone, Default)]
pub struct Style {
    user: Option<SheetTable>,
    metrics: Metrics,
}

impl Style {
    pub fn new() -> Self {
        Lazy::force(&DEFAULT_SHEET);
        Self::default()
    }

    /// Style with `sheet` installed, failing instead of falling back
    pub fn with_sheet(sheet: &str) -> Result<Self, StyleError> {
        Ok(Self {
            user: Some(compile(sheet, true)?),
            metrics: Metrics::default(),
        })
    }

    /// Install a user sheet
    ///
    /// On error the previously active sheet stays in place, the failure is logged and
    /// returned so callers may surface it; the render loop can ignore it safely.
    pub fn set_sheet(&mut self, sheet: &str) -> Result<(), StyleError> {
        match compile(sheet, true) {
            Ok(table) => {
                log::info!("installed stylesheet ({} selectors)", table.len());
                self.user = Some(table);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to set style sheet: {err}");
                Err(err)
            }
        }
    }

    /// Drop the user sheet, reverting to the built-in theme
    pub fn use_default(&mut self) {
        if self.user.take().is_some() {
            log::info!("reverted to default stylesheet");
        }
    }

    pub fn has_user_sheet(&self) -> bool {
        self.user.is_some()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }

    pub fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
    }

    /// Resolve the property bag for `key`
    ///
    /// An id-scoped key without a rule of its own resolves like the unscoped key.
    pub fn properties(&self, key: &StyleKey) -> Result<&StylePropertyValues, StyleError> {
        let unscoped = key.unscoped();

        let user = self.user.as_ref().and_then(|user| {
            user.get(key).or_else(|| match key.id {
                Some(_) => user.get(&unscoped),
                None => None,
            })
        });

        user.or_else(|| DEFAULT_SHEET.get(&unscoped))
            .ok_or_else(|| StyleError::UnknownSelector(key.clone()))
    }

    pub fn get(&self, key: &StyleKey, property: Property) -> Result<&PropertyValue, StyleError> {
        self.properties(key)?.get(property)
    }

    /// Like [`Style::get`], but an unknown selector or property yields `None`
    pub fn try_get(&self, key: &StyleKey, property: Property) -> Option<&PropertyValue> {
        self.properties(key).ok()?.try_get(property)
    }

    pub fn color(&self, key: &StyleKey, property: Property) -> Result<Color, StyleError> {
        self.properties(key)?.color(property)
    }

    pub fn try_color(&self, key: &StyleKey, property: Property) -> Option<Color> {
        self.properties(key).ok()?.try_color(property)
    }

    pub fn font_family(&self, key: &StyleKey) -> Result<i32, StyleError> {
        self.properties(key)?.integer(Property::FontFamily)
    }

    pub fn font_size(&self, key: &StyleKey) -> Result<f32, StyleError> {
        self.properties(key)?.font_size(Property::FontSize)
    }
}

/// Parse sheet text into a selector table; user sheets get default bags as fallback
fn compile(sheet: &str, with_defaults: bool) -> Result<SheetTable, StyleError> {
    let mut table = SheetTable::new();

    for rule in sheet::tokenize(sheet)? {
        let mut properties = PropertyMap::new();

        for (name, value) in &rule.declarations {
            let Some(property) = Property::from_name(name) else {
                log::trace!("line {}: ignoring unknown property `{name}`", rule.line);
                continue;
            };
            properties.insert(property, property.parse_value(value)?);
        }

        if properties.is_empty() {
            continue;
        }

        for selector in &rule.selectors {
            let key = StyleKey::parse(selector)?;

            match table.get_mut(&key) {
                Some(existing) => existing.properties.extend(properties.clone()),
                None => {
                    let fallback = if with_defaults {
                        DEFAULT_SHEET.get(&key.unscoped()).map(|bag| &bag.properties)
                    } else {
                        None
                    };

                    table.insert(
                        key.clone(),
                        StylePropertyValues {
                            key,
                            properties: properties.clone(),
                            fallback,
                        },
                    );
                }
            }
        }
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> StyleKey {
        StyleKey::parse(text).unwrap()
    }

    #[test]
    fn test_default_sheet_values() {
        let style = Style::new();

        assert_eq!(
            style.color(&key("button"), Property::BackgroundColor),
            Ok(Color::rgba(36, 39, 48, 255))
        );
        assert_eq!(
            style.color(&key("progress-bar"), Property::Color),
            Ok(Color::rgba(0, 155, 103, 255))
        );
        assert_eq!(style.font_family(&key("heading")), Ok(4));
        assert_eq!(style.font_size(&key("label")), Ok(0.325));
        assert_eq!(
            style.color(&key("window"), Property::Color),
            Ok(Color::rgba(105, 255, 89, 32))
        );
    }

    #[test]
    fn test_user_sheet_values_are_exact() {
        let mut style = Style::new();
        style
            .set_sheet(
                "label { color: #101112; font-size: 1.5em; }\n\
                 separator { color: rgba(1, 2, 3, 0.5); background-image: url('shared', 'bar'); }",
            )
            .unwrap();

        assert_eq!(
            style.color(&key("label"), Property::Color),
            Ok(Color::rgba(16, 17, 18, 255))
        );
        assert_eq!(style.font_size(&key("label")), Ok(1.5));
        assert_eq!(
            style.get(&key("separator"), Property::BackgroundImage),
            Ok(&PropertyValue::Image(Image::new("shared", "bar")))
        );
        assert_eq!(
            style.color(&key("separator"), Property::Color),
            Ok(Color::rgba(1, 2, 3, 128))
        );
    }

    #[test]
    fn test_missing_selector_and_property() {
        let style = Style::new();

        assert_eq!(
            style.get(&key("label:hover"), Property::Color),
            Err(StyleError::UnknownSelector(key("label:hover")))
        );
        assert_eq!(style.try_get(&key("label:hover"), Property::Color), None);

        assert_eq!(
            style.get(&key("separator"), Property::BackgroundColor),
            Err(StyleError::MissingProperty {
                key: key("separator"),
                property: Property::BackgroundColor,
            })
        );
        assert_eq!(style.try_get(&key("separator"), Property::BackgroundColor), None);
    }

    #[test]
    fn test_user_sheet_falls_back_to_defaults() {
        let mut style = Style::new();
        style.set_sheet("button { color: #000000; }").unwrap();

        assert_eq!(
            style.color(&key("button"), Property::Color),
            Ok(Color::rgb(0, 0, 0))
        );
        assert_eq!(
            style.color(&key("button"), Property::BackgroundColor),
            Ok(Color::rgb(0x24, 0x27, 0x30))
        );
        // selectors absent from the user sheet resolve from the defaults
        assert_eq!(style.font_family(&key("heading")), Ok(4));
    }

    #[test]
    fn test_id_override_augments_default() {
        let mut style = Style::new();
        style
            .set_sheet("#myid.button { color: #010203; }\n#myid.button { font-size: 0.5em; }")
            .unwrap();

        let scoped = key("#myid.button");
        assert_eq!(style.color(&scoped, Property::Color), Ok(Color::rgb(1, 2, 3)));
        assert_eq!(style.font_size(&scoped), Ok(0.5));
        assert_eq!(
            style.color(&scoped, Property::BackgroundColor),
            Ok(Color::rgb(0x24, 0x27, 0x30))
        );

        // other ids and the unscoped selector are untouched
        assert_eq!(
            style.color(&key("#other.button"), Property::Color),
            Ok(Color::rgb(0xFF, 0xFF, 0xF0))
        );
        assert_eq!(
            style.color(&key("button"), Property::Color),
            Ok(Color::rgb(0xFF, 0xFF, 0xF0))
        );
    }

    #[test]
    fn test_rejected_sheet_keeps_previous() {
        let mut style = Style::new();
        style.set_sheet("label { color: #010203; }").unwrap();

        let err = style.set_sheet("label { color: #0102; }").unwrap_err();
        assert!(matches!(err, StyleError::InvalidValue { property: Property::Color, .. }));
        assert_eq!(
            style.color(&key("label"), Property::Color),
            Ok(Color::rgb(1, 2, 3))
        );

        assert!(style.set_sheet("#bad { color: #010203; }").is_err());
        assert!(style.set_sheet("label { color: #010203;").is_err());
        assert_eq!(
            style.color(&key("label"), Property::Color),
            Ok(Color::rgb(1, 2, 3))
        );

        style.use_default();
        assert!(!style.has_user_sheet());
        assert_eq!(
            style.color(&key("label"), Property::Color),
            Ok(Color::rgb(0xC4, 0xC4, 0xBD))
        );
    }

    #[test]
    fn test_unknown_properties_are_dropped() {
        let mut style = Style::new();
        style
            .set_sheet("label { margin: 4px; color: #010203; }\n#ghost.nothing { padding: 2px; }")
            .unwrap();

        let bag = style.properties(&key("label")).unwrap();
        assert_eq!(bag.properties().count(), 1);
        assert_eq!(bag.try_color(Property::Color), Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_type_mismatch() {
        let style = Style::new();
        assert_eq!(
            style.properties(&key("button")).unwrap().integer(Property::Color),
            Err(StyleError::TypeMismatch {
                key: key("button"),
                property: Property::Color,
                expected: "integer",
            })
        );
    }
}
