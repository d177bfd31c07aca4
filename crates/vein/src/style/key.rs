use crate::error::StyleError;
use std::fmt;

/// Widget kinds a stylesheet can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Button,
    CheckBox,
    Heading,
    Label,
    ProgressBar,
    Separator,
    Slider,
    SpriteButton,
    TextArea,
    TextEdit,
    Window,
}

impl Selector {
    pub const ALL: [Selector; 11] = [
        Selector::Button,
        Selector::CheckBox,
        Selector::Heading,
        Selector::Label,
        Selector::ProgressBar,
        Selector::Separator,
        Selector::Slider,
        Selector::SpriteButton,
        Selector::TextArea,
        Selector::TextEdit,
        Selector::Window,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Selector::Button => "button",
            Selector::CheckBox => "check-box",
            Selector::Heading => "heading",
            Selector::Label => "label",
            Selector::ProgressBar => "progress-bar",
            Selector::Separator => "separator",
            Selector::Slider => "slider",
            Selector::SpriteButton => "sprite-button",
            Selector::TextArea => "text-area",
            Selector::TextEdit => "text-edit",
            Selector::Window => "window",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|selector| selector.name() == name)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interaction state suffix of a selector (`button:hover`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleState {
    Hover,
}

impl StyleState {
    pub const fn name(self) -> &'static str {
        match self {
            StyleState::Hover => "hover",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hover" => Some(StyleState::Hover),
            _ => None,
        }
    }
}

/// Structured style lookup key: selector, optional state, optional id scope
///
/// Written in a sheet as `name`, `name:state`, `#id.name` or `#id.name:state`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    pub selector: Selector,
    pub state: Option<StyleState>,
    pub id: Option<String>,
}

impl StyleKey {
    pub const fn new(selector: Selector) -> Self {
        Self {
            selector,
            state: None,
            id: None,
        }
    }

    pub fn with_state(mut self, state: Option<StyleState>) -> Self {
        self.state = state;
        self
    }

    pub fn with_id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(str::to_owned);
        self
    }

    /// Same key without the id scope
    pub fn unscoped(&self) -> Self {
        Self {
            selector: self.selector,
            state: self.state,
            id: None,
        }
    }

    /// Parse a single selector as written in a stylesheet
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidSelector(text.to_owned());
        let text = text.trim();

        let (id, rest) = match text.strip_prefix('#') {
            Some(scoped) => {
                let (id, rest) = scoped.split_once('.').ok_or_else(invalid)?;
                if id.is_empty() || id.chars().any(char::is_whitespace) {
                    return Err(invalid());
                }
                (Some(id.to_owned()), rest)
            }
            None => (None, text),
        };

        let (name, state) = match rest.split_once(':') {
            Some((name, state)) => (name, Some(StyleState::from_name(state).ok_or_else(invalid)?)),
            None => (rest, None),
        };

        let selector = Selector::from_name(name).ok_or_else(invalid)?;

        Ok(Self {
            selector,
            state,
            id,
        })
    }
}

impl From<Selector> for StyleKey {
    fn from(selector: Selector) -> Self {
        Self::new(selector)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.id {
            write!(f, "#{id}.")?;
        }
        f.write_str(self.selector.name())?;
        if let Some(state) = self.state {
            write!(f, ":{}", state.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_state() {
        assert_eq!(
            StyleKey::parse("check-box").unwrap(),
            StyleKey::new(Selector::CheckBox)
        );
        assert_eq!(
            StyleKey::parse(" button:hover ").unwrap(),
            StyleKey::new(Selector::Button).with_state(Some(StyleState::Hover))
        );
    }

    #[test]
    fn test_parse_id_scoped() {
        let key = StyleKey::parse("#confirm.button:hover").unwrap();
        assert_eq!(key.id.as_deref(), Some("confirm"));
        assert_eq!(key.selector, Selector::Button);
        assert_eq!(key.state, Some(StyleState::Hover));
        assert_eq!(key.to_string(), "#confirm.button:hover");
        assert_eq!(key.unscoped().to_string(), "button:hover");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["#button", "#.button", "frame", "button:active", "#a b.button", ""] {
            assert_eq!(
                StyleKey::parse(text),
                Err(StyleError::InvalidSelector(text.to_owned())),
                "{text}"
            );
        }
    }
}
