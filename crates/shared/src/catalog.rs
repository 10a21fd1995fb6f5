//! Static option catalog: the choices each slot offers plus the reset target.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Configuration, OptionValue, Slot},
    error::{CatalogError, PanelError},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub font_families: Vec<OptionValue>,
    pub font_sizes: Vec<OptionValue>,
    pub font_colors: Vec<OptionValue>,
    pub background_colors: Vec<OptionValue>,
    pub content_widths: Vec<OptionValue>,
    pub default: Configuration,
}

impl Catalog {
    pub fn options(&self, slot: Slot) -> &[OptionValue] {
        match slot {
            Slot::FontFamily => &self.font_families,
            Slot::FontSize => &self.font_sizes,
            Slot::FontColor => &self.font_colors,
            Slot::BackgroundColor => &self.background_colors,
            Slot::ContentWidth => &self.content_widths,
        }
    }

    pub fn contains(&self, slot: Slot, option: &OptionValue) -> bool {
        self.options(slot).contains(option)
    }

    pub fn find(&self, slot: Slot, id: &str) -> Result<&OptionValue, PanelError> {
        self.options(slot)
            .iter()
            .find(|option| option.id == id)
            .ok_or_else(|| PanelError::UnknownOption {
                slot,
                id: id.to_string(),
            })
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        for slot in Slot::ALL {
            let options = self.options(slot);
            if options.is_empty() {
                return Err(CatalogError::EmptySlot { slot });
            }

            let mut seen = HashSet::new();
            for option in options {
                if !seen.insert(option.id.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        slot,
                        id: option.id.clone(),
                    });
                }
            }

            let default = self.default.get(slot);
            if !options.contains(default) {
                return Err(CatalogError::DefaultNotInCatalog {
                    slot,
                    id: default.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Stock options of the article panel.
    pub fn builtin() -> Self {
        let font_families = vec![
            OptionValue::new("open-sans", "Open Sans", "'Open Sans', sans-serif"),
            OptionValue::new("ubuntu", "Ubuntu", "'Ubuntu', sans-serif"),
            OptionValue::new(
                "cormorant-garamond",
                "Cormorant Garamond",
                "'Cormorant Garamond', serif",
            ),
            OptionValue::new("days-one", "Days One", "'Days One', sans-serif"),
            OptionValue::new("merriweather", "Merriweather", "'Merriweather', serif"),
        ];
        let font_sizes = vec![
            OptionValue::new("18px", "18px", "18px"),
            OptionValue::new("25px", "25px", "25px"),
            OptionValue::new("38px", "38px", "38px"),
        ];
        let font_colors = palette(&[
            ("black", "Black", "#000000"),
            ("white", "White", "#FFFFFF"),
            ("gray", "Gray", "#C4C4C4"),
            ("pink", "Pink", "#FEAFE8"),
            ("fuchsia", "Fuchsia", "#FD24AF"),
            ("yellow", "Yellow", "#FFC802"),
            ("green", "Green", "#80D994"),
            ("blue", "Blue", "#6FC1FD"),
            ("purple", "Purple", "#5F50D0"),
        ]);
        let background_colors = palette(&[
            ("white", "White", "#FFFFFF"),
            ("black", "Black", "#000000"),
            ("gray", "Gray", "#C4C4C4"),
            ("pink", "Pink", "#FEAFE8"),
            ("fuchsia", "Fuchsia", "#FD24AF"),
            ("yellow", "Yellow", "#FFC802"),
            ("green", "Green", "#80D994"),
            ("blue", "Blue", "#6FC1FD"),
            ("purple", "Purple", "#5F50D0"),
        ]);
        let content_widths = vec![
            OptionValue::new("wide", "Wide", "1394px"),
            OptionValue::new("narrow", "Narrow", "948px"),
        ];

        let default = Configuration {
            font_family: font_families[0].clone(),
            font_size: font_sizes[0].clone(),
            font_color: font_colors[0].clone(),
            background_color: background_colors[0].clone(),
            content_width: content_widths[0].clone(),
        };

        Self {
            font_families,
            font_sizes,
            font_colors,
            background_colors,
            content_widths,
            default,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn palette(entries: &[(&str, &str, &str)]) -> Vec<OptionValue> {
    entries
        .iter()
        .map(|(id, title, hex)| OptionValue::new(*id, *title, *hex))
        .collect()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
