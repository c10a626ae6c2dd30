//! Person data and template sources.
//!
//! Person data is a YAML list of mappings:
//!
//! ```yaml
//! - name: Richard Bader
//!   nicks:
//!     - ShadowCats
//!   dates:
//!     - 17 August 1962
//!     - 24 June 2010
//!   location: Perth, Australia
//!   memberships:
//!     - site: Ubisoft
//!       date: Nov 2003
//!   remembrances:
//!     - "Myst Online forum thread: Sad news"
//! ```
//!
//! Every key is optional. Unknown keys are ignored and `null` values count
//! as absent. Values that must contain a colon need quoting, as usual in
//! YAML.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{MemoriamError, Result};
use crate::template::{Field, Template};

/// A scalar that is used as text whatever YAML typed it as.
///
/// A bare `1962` under `dates` is an integer to YAML but just a year here.
/// Numbers keep YAML's own rendering, so large integers stay exact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Str(String),
    Num(serde_yaml::Number),
    Bool(bool),
}

impl Text {
    pub fn into_string(self) -> String {
        match self {
            Text::Str(s) => s,
            Text::Num(n) => n.to_string(),
            Text::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::Str(s.to_string())
    }
}

/// One `memberships` entry as found in the source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMembership {
    pub site: Text,
    #[serde(default)]
    pub date: Option<Text>,
}

/// One person mapping as found in the source, before any defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPerson {
    pub name: Option<Text>,
    pub nicks: Option<Vec<Text>>,
    pub dates: Option<Vec<Text>>,
    pub location: Option<Text>,
    pub description: Option<Text>,
    pub memberships: Option<Vec<RawMembership>>,
    pub remembrances: Option<Vec<Text>>,
    pub extra: Option<Text>,
}

/// Parse YAML person data. An empty document holds no persons.
pub fn parse_records(yaml: &str) -> Result<Vec<RawPerson>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let persons: Option<Vec<RawPerson>> = serde_yaml::from_str(yaml)
        .map_err(|source| MemoriamError::SourceParse { path: None, source })?;
    Ok(persons.unwrap_or_default())
}

/// Read and parse a YAML person data file.
pub fn read_records(path: &Path) -> Result<Vec<RawPerson>> {
    let yaml = read_text(path)?;
    parse_records(&yaml).map_err(|e| e.in_path(path))
}

/// Read and parse a person format template file.
pub fn read_template(path: &Path) -> Result<Template> {
    let text = read_text(path)?;
    let template = Template::parse(&text).map_err(|e| e.in_path(path))?;
    if !template.fields().any(|field| field == Field::Name) {
        warn!(path = %path.display(), "template never uses {{name}}");
    }
    Ok(template)
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| MemoriamError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}
