//! EmojiHub domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::E2eError;

/// One emoji as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub name: String,
    pub category: String,
    pub group: String,

    /// HTML entity representations, e.g. `&#128512;`
    #[serde(rename = "htmlCode", alias = "html_code")]
    pub html_code: Vec<String>,

    /// Code point representations, e.g. `U+1F600`
    pub unicode: Vec<String>,
}

impl EmojiRecord {
    /// Names of the fields that are empty. An empty result means the record is complete.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.name.is_empty() {
            empty.push("name");
        }
        if self.category.is_empty() {
            empty.push("category");
        }
        if self.group.is_empty() {
            empty.push("group");
        }
        if self.html_code.is_empty() {
            empty.push("htmlCode");
        }
        if self.unicode.is_empty() {
            empty.push("unicode");
        }
        empty
    }

    pub fn category_slug(&self) -> String {
        normalize(&self.category)
    }

    pub fn group_slug(&self) -> String {
        normalize(&self.group)
    }
}

/// Turn a display value into its path form: spaces become hyphens, then lower-case.
///
/// `"smileys and people"` and `"Smileys and People"` both become `"smileys-and-people"`.
pub fn normalize(value: &str) -> String {
    value.replace(' ', "-").to_lowercase()
}

/// Top-level emoji classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SmileysAndPeople,
    AnimalsAndNature,
    FoodAndDrink,
    TravelAndPlaces,
    Activities,
    Objects,
    Symbols,
    Flags,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::SmileysAndPeople,
        Category::AnimalsAndNature,
        Category::FoodAndDrink,
        Category::TravelAndPlaces,
        Category::Activities,
        Category::Objects,
        Category::Symbols,
        Category::Flags,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::SmileysAndPeople => "smileys-and-people",
            Category::AnimalsAndNature => "animals-and-nature",
            Category::FoodAndDrink => "food-and-drink",
            Category::TravelAndPlaces => "travel-and-places",
            Category::Activities => "activities",
            Category::Objects => "objects",
            Category::Symbols => "symbols",
            Category::Flags => "flags",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = E2eError;

    /// Accepts the slug or any display form that normalizes to it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = normalize(s.trim());
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == slug)
            .ok_or_else(|| E2eError::SpecParse(format!("Unknown category: {}", s)))
    }
}

/// Groups exercised by the suite. The API knows many more.
pub const KNOWN_GROUPS: [&str; 3] = ["travel-and-places", "activities", "animal-bug"];

pub const INVALID_CATEGORY: &str = "invalid-category";
pub const INVALID_GROUP: &str = "invalid-group";
