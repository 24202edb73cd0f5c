//! Customer taste profiles.
//!
//! A customer carries independent sets of liked and disliked tags plus a
//! hungriness level. Likes and dislikes may overlap; generation treats a tag
//! present in both as disliked.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tags::{Size, Tag};

/// Ordinal appetite level driving portion counts.
///
/// Serializes as the variant name. Deserializes from either the name
/// (`"WholeHog"`, case-insensitive) or the numeric level (`3`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "HungrinessRepr")]
pub enum Hungriness {
    /// 0 — a light bite.
    Snack,
    /// 1 — a regular meal.
    #[default]
    Meal,
    /// 2 — very hungry.
    Famished,
    /// 3 — eats everything on the counter.
    WholeHog,
}

impl Hungriness {
    /// All hungriness levels in ascending order.
    pub fn all() -> &'static [Hungriness] {
        &[
            Hungriness::Snack,
            Hungriness::Meal,
            Hungriness::Famished,
            Hungriness::WholeHog,
        ]
    }

    pub fn level(self) -> u8 {
        match self {
            Hungriness::Snack => 0,
            Hungriness::Meal => 1,
            Hungriness::Famished => 2,
            Hungriness::WholeHog => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Hungriness::Snack => "Snack",
            Hungriness::Meal => "Meal",
            Hungriness::Famished => "Famished",
            Hungriness::WholeHog => "WholeHog",
        }
    }

    /// Convert a numeric level (0–3). Returns `None` for anything else.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Hungriness::Snack),
            1 => Some(Hungriness::Meal),
            2 => Some(Hungriness::Famished),
            3 => Some(Hungriness::WholeHog),
            _ => None,
        }
    }
}

/// Accepted JSON forms for a hungriness value.
#[derive(Deserialize)]
#[serde(untagged)]
enum HungrinessRepr {
    Level(u8),
    Name(String),
}

impl TryFrom<HungrinessRepr> for Hungriness {
    type Error = String;

    fn try_from(repr: HungrinessRepr) -> Result<Self, Self::Error> {
        match repr {
            HungrinessRepr::Level(level) => Hungriness::from_level(level)
                .ok_or_else(|| format!("hungriness level {} is out of range 0-3", level)),
            HungrinessRepr::Name(name) => Hungriness::all()
                .iter()
                .copied()
                .find(|h| h.name().eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| format!("unknown hungriness '{}'", name)),
        }
    }
}

/// Roll a hungriness level for a customer of the given size.
///
/// With `n = size.index() + 1`, draws uniformly from `[n / 2, n)`:
/// Small is always a snack, Huge is famished or whole hog.
pub fn roll_hungriness(size: Size, rng: &mut impl Rng) -> Hungriness {
    let n = size.index() + 1;
    let level = rng.gen_range(n / 2..n);
    Hungriness::from_level(level).unwrap_or(Hungriness::WholeHog)
}

/// A customer's taste profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub likes: HashSet<Tag>,
    #[serde(default)]
    pub dislikes: HashSet<Tag>,
    #[serde(default)]
    pub hungriness: Hungriness,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            size: None,
            likes: HashSet::new(),
            dislikes: HashSet::new(),
            hungriness: Hungriness::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_likes(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.likes.extend(tags);
        self
    }

    pub fn with_dislikes(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.dislikes.extend(tags);
        self
    }

    pub fn with_hungriness(mut self, hungriness: Hungriness) -> Self {
        self.hungriness = hungriness;
        self
    }

    pub fn likes(&self, tag: Tag) -> bool {
        self.likes.contains(&tag)
    }

    pub fn dislikes(&self, tag: Tag) -> bool {
        self.dislikes.contains(&tag)
    }
}

/// Comma-separated tag names in a stable order.
fn tag_list(tags: &HashSet<Tag>) -> String {
    Tag::all()
        .iter()
        .filter(|t| tags.contains(t))
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}[{}] - {}", self.name, self.id, self.description)?;
        match self.size {
            Some(size) => writeln!(f, "Size: {}", size)?,
            None => writeln!(f, "Size: -")?,
        }
        writeln!(f, "Likes: {}", tag_list(&self.likes))?;
        writeln!(f, "Dislikes: {}", tag_list(&self.dislikes))?;
        writeln!(f, "Hungriness: {}", self.hungriness.level())
    }
}
