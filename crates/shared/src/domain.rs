use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PanelError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(TargetId);

/// One configurable aspect of the article presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl Slot {
    /// Panel order.
    pub const ALL: [Slot; 5] = [
        Slot::FontFamily,
        Slot::FontSize,
        Slot::FontColor,
        Slot::BackgroundColor,
        Slot::ContentWidth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::FontFamily => "fontFamily",
            Slot::FontSize => "fontSize",
            Slot::FontColor => "fontColor",
            Slot::BackgroundColor => "backgroundColor",
            Slot::ContentWidth => "contentWidth",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = PanelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Slot::ALL
            .into_iter()
            .find(|slot| slot.name() == raw)
            .ok_or_else(|| PanelError::InvalidSlot {
                name: raw.to_string(),
            })
    }
}

/// A selectable choice for a slot.
///
/// `id` is the identity, `title` is what a control displays and `value` is the
/// effect handed to the article (a font stack, a color, a width).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionValue {
    pub id: String,
    pub title: String,
    pub value: String,
}

impl OptionValue {
    pub fn new(id: impl Into<String>, title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value: value.into(),
        }
    }
}

/// A complete presentation configuration: every slot always holds a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub font_family: OptionValue,
    pub font_size: OptionValue,
    pub font_color: OptionValue,
    pub background_color: OptionValue,
    pub content_width: OptionValue,
}

impl Configuration {
    pub fn get(&self, slot: Slot) -> &OptionValue {
        match slot {
            Slot::FontFamily => &self.font_family,
            Slot::FontSize => &self.font_size,
            Slot::FontColor => &self.font_color,
            Slot::BackgroundColor => &self.background_color,
            Slot::ContentWidth => &self.content_width,
        }
    }

    /// Replaces one slot in place; the other four are untouched.
    pub fn set(&mut self, slot: Slot, value: OptionValue) {
        let field = match slot {
            Slot::FontFamily => &mut self.font_family,
            Slot::FontSize => &mut self.font_size,
            Slot::FontColor => &mut self.font_color,
            Slot::BackgroundColor => &mut self.background_color,
            Slot::ContentWidth => &mut self.content_width,
        };
        *field = value;
    }

    pub fn with(mut self, slot: Slot, value: OptionValue) -> Self {
        self.set(slot, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &OptionValue)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}
