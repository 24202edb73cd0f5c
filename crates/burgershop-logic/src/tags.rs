//! Flavor tags, ingredient categories, and customer size classes.
//!
//! Tags describe ingredients and drive customer preferences. Categories are
//! the structural role an ingredient can play in a burger; one ingredient may
//! hold several. All three enums parse from and display as their variant name,
//! which is the spelling used in the bundled data files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flavor or property label attached to ingredients and customer preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Unhealthy,
    Healthy,
    Expensive,
    Cheap,
    Soggy,
    Crunchy,
    Chewy,
    Mild,
    Sweet,
    Spicy,
    Salty,
    Sour,
}

impl Tag {
    /// All tag variants for iteration.
    pub fn all() -> &'static [Tag] {
        &[
            Tag::Unhealthy,
            Tag::Healthy,
            Tag::Expensive,
            Tag::Cheap,
            Tag::Soggy,
            Tag::Crunchy,
            Tag::Chewy,
            Tag::Mild,
            Tag::Sweet,
            Tag::Spicy,
            Tag::Salty,
            Tag::Sour,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Tag::Unhealthy => "Unhealthy",
            Tag::Healthy => "Healthy",
            Tag::Expensive => "Expensive",
            Tag::Cheap => "Cheap",
            Tag::Soggy => "Soggy",
            Tag::Crunchy => "Crunchy",
            Tag::Chewy => "Chewy",
            Tag::Mild => "Mild",
            Tag::Sweet => "Sweet",
            Tag::Spicy => "Spicy",
            Tag::Salty => "Salty",
            Tag::Sour => "Sour",
        }
    }
}

/// Structural role of an ingredient in a burger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Topping,
    Bun,
    Meat,
    Garnish,
}

impl Category {
    /// All category variants for iteration.
    pub fn all() -> &'static [Category] {
        &[
            Category::Topping,
            Category::Bun,
            Category::Meat,
            Category::Garnish,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Topping => "Topping",
            Category::Bun => "Bun",
            Category::Meat => "Meat",
            Category::Garnish => "Garnish",
        }
    }
}

/// Customer size class. Bigger customers roll higher hungriness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[default]
    Small,
    Medium,
    Large,
    Huge,
}

impl Size {
    /// All size variants for iteration.
    pub fn all() -> &'static [Size] {
        &[Size::Small, Size::Medium, Size::Large, Size::Huge]
    }

    /// Zero-based position in the size ordering.
    pub fn index(self) -> u8 {
        match self {
            Size::Small => 0,
            Size::Medium => 1,
            Size::Large => 2,
            Size::Huge => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::Huge => "Huge",
        }
    }
}

/// Error returned when a tag, category, or size name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant '{0}'")]
pub struct UnknownVariant(pub String);

macro_rules! name_parsing {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $ty::all()
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownVariant(trimmed.to_string()))
            }
        }
    };
}

name_parsing!(Tag);
name_parsing!(Category);
name_parsing!(Size);
