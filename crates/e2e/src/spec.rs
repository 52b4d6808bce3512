//! Declarative test cases, built in code or parsed from YAML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{E2eError, E2eResult};

/// One request/response/assert cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Unique name for this case
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags for filtering cases
    #[serde(default)]
    pub tags: Vec<String>,

    pub request: Request,

    #[serde(default)]
    pub expect: Expectation,
}

/// A `GET` relative to the base URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(default = "default_status")]
    pub status: u16,

    /// What the body must contain. Only evaluated once the status matched.
    #[serde(default)]
    pub body: BodyCheck,
}

fn default_status() -> u16 {
    200
}

impl Default for Expectation {
    fn default() -> Self {
        Self {
            status: default_status(),
            body: BodyCheck::default(),
        }
    }
}

/// Assertion applied to a decoded body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum BodyCheck {
    /// Status only
    #[default]
    None,

    /// A single complete emoji
    Record,

    /// A non-empty list of complete emojis
    Records,

    /// A single emoji whose normalized category equals `category`
    RecordInCategory { category: String },

    /// A single emoji whose normalized group equals `group`
    RecordInGroup { group: String },

    /// Every emoji's normalized category equals `category`
    RecordsInCategory { category: String },

    /// Every emoji's normalized group equals `group`
    RecordsInGroup { group: String },

    /// A second read of the same path returns the same set of emojis
    Idempotent,
}

impl TestCase {
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            request: Request { path: path.into() },
            expect: Expectation::default(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tagged(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expect.status = status;
        self
    }

    pub fn expect_body(mut self, body: BodyCheck) -> Self {
        self.expect.body = body;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Parse a case from YAML string
    pub fn from_yaml(yaml: &str) -> E2eResult<Self> {
        let case: Self = serde_yaml::from_str(yaml)?;
        case.validated()
    }

    /// Parse a case from a YAML file
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
            .map_err(|e| E2eError::SpecParse(format!("{}: {}", path.display(), e)))
    }

    /// Load all cases from a directory, sorted by file path
    pub fn load_all(dir: &Path) -> E2eResult<Vec<Self>> {
        if !dir.is_dir() {
            return Err(E2eError::SpecParse(format!(
                "cases directory not found: {}",
                dir.display()
            )));
        }

        let mut paths = Vec::new();
        for entry in walkdir::WalkDir::new(dir) {
            let entry = entry.map_err(|e| {
                E2eError::SpecParse(format!("cannot read {}: {}", dir.display(), e))
            })?;
            let is_yaml = entry
                .path()
                .extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false);
            if is_yaml {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        paths.iter().map(|p| Self::from_file(p)).collect()
    }

    /// Filter cases by tag
    pub fn filter_by_tag<'a>(cases: &'a [Self], tag: &str) -> Vec<&'a Self> {
        cases.iter().filter(|c| c.has_tag(tag)).collect()
    }

    fn validated(self) -> E2eResult<Self> {
        if self.name.trim().is_empty() {
            return Err(E2eError::SpecParse("case name must not be empty".to_string()));
        }
        if !(100..600).contains(&self.expect.status) {
            return Err(E2eError::SpecParse(format!(
                "{}: invalid expected status {}",
                self.name, self.expect.status
            )));
        }
        if self.expect.status != 200 && self.expect.body != BodyCheck::None {
            return Err(E2eError::SpecParse(format!(
                "{}: body checks need an expected status of 200",
                self.name
            )));
        }
        Ok(self)
    }
}
