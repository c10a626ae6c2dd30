//! A remembered person and the text views derived from their record.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MemoriamError, Result};
use crate::normalize::normalize;
use crate::source::{RawPerson, Text};
use crate::template::{Field, Layout};

static DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})\b").unwrap());
static MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

/// A site the person was a member of, with an optional join date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
    pub site: String,
    pub date: Option<String>,
}

impl Membership {
    pub fn new(site: &str, date: Option<&str>) -> Self {
        Self {
            site: site.to_string(),
            date: date.map(str::to_string),
        }
    }
}

/// One remembered person.
///
/// Empty strings and empty lists mean "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    /// Zero-based position of the record in its source.
    pub position: usize,
    pub name: String,
    pub nicknames: Vec<String>,
    pub dates: Vec<String>,
    pub location: String,
    pub description: String,
    pub memberships: Vec<Membership>,
    pub remembrances: Vec<String>,
    pub extra: String,
}

fn texts(values: Option<Vec<Text>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(Text::into_string)
        .collect()
}

fn text(value: Option<Text>) -> String {
    value.map(Text::into_string).unwrap_or_default()
}

impl Person {
    /// Build a person from a source record, keeping defaults for every
    /// field the record leaves out.
    pub fn from_raw(position: usize, raw: RawPerson) -> Self {
        let memberships = raw
            .memberships
            .unwrap_or_default()
            .into_iter()
            .map(|m| Membership {
                site: m.site.into_string(),
                date: m.date.map(Text::into_string),
            })
            .collect();

        Self {
            position,
            name: text(raw.name),
            nicknames: texts(raw.nicks),
            dates: texts(raw.dates),
            location: text(raw.location),
            description: text(raw.description),
            memberships,
            remembrances: texts(raw.remembrances),
            extra: text(raw.extra),
        }
    }

    /// Whether the person can be named at all.
    pub fn has_identity(&self) -> bool {
        !self.name.is_empty() || !self.nicknames.is_empty()
    }

    /// Key used for ordering and for picking the book group.
    ///
    /// The first nickname, upper-cased, when there is one; otherwise the
    /// name exactly as given.
    pub fn sorting_key(&self) -> String {
        match self.nicknames.first() {
            Some(nick) => nick.to_uppercase(),
            None => self.name.clone(),
        }
    }

    /// `First "Nick" or "Other" Middle Last`, or just the nicknames when
    /// there is no name.
    pub fn format_name(&self) -> Result<String> {
        if !self.has_identity() {
            return Err(MemoriamError::MissingIdentity {
                position: self.position,
            });
        }

        if self.name.is_empty() {
            return Ok(self.nicknames.join(" or "));
        }

        let mut tokens = self.name.split(' ');
        let firstname = tokens.next().unwrap_or_default();
        let lastnames = tokens.collect::<Vec<_>>().join(" ");
        let nicknames = self
            .nicknames
            .iter()
            .map(|nick| format!("\"{nick}\""))
            .collect::<Vec<_>>()
            .join(" or ");

        let mut parts = vec![firstname.to_string()];
        if !nicknames.is_empty() {
            parts.push(nicknames);
        }
        if !lastnames.is_empty() {
            parts.push(lastnames);
        }
        Ok(parts.join(" "))
    }

    /// Dates reduced to `day month year`, joined with ` - `.
    pub fn format_date(&self) -> String {
        self.dates
            .iter()
            .map(|date| extract_date(date))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    pub fn format_location(&self) -> String {
        self.location.clone()
    }

    pub fn format_description(&self) -> String {
        self.description.clone()
    }

    pub fn format_memberships(&self) -> String {
        if self.memberships.is_empty() {
            return String::new();
        }
        let entries = self
            .memberships
            .iter()
            .map(|m| match &m.date {
                Some(date) => format!("{} ({date})", m.site),
                None => m.site.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("Memberships: {entries}.")
    }

    /// Remembrances separated by `; `. Separators and full stops inside an
    /// entry are dropped so they cannot be mistaken for list punctuation.
    pub fn format_remembrances(&self) -> String {
        if self.remembrances.is_empty() {
            return String::new();
        }
        let entries = self
            .remembrances
            .iter()
            .map(|r| r.replace([';', ',', '.'], ""))
            .collect::<Vec<_>>()
            .join("; ");
        format!("Remembrances: {entries}.")
    }

    /// Render a single field.
    pub fn format_field(&self, field: Field) -> Result<String> {
        Ok(match field {
            Field::Name => self.format_name()?,
            Field::Date => self.format_date(),
            Field::Location => self.format_location(),
            Field::Description => self.format_description(),
            Field::Memberships => self.format_memberships(),
            Field::Remembrances => self.format_remembrances(),
            Field::Extra => self.extra.clone(),
        })
    }

    /// Render the whole person as normalized text.
    pub fn format(&self, layout: &Layout) -> Result<String> {
        let sections = Field::ALL
            .into_iter()
            .map(|field| self.format_field(field))
            .collect::<Result<Vec<_>>>()?;
        match layout {
            Layout::Template(template) => {
                let filled = template.fill(|field| sections[field as usize].clone());
                Ok(normalize(&filled, true))
            }
            Layout::FixedOrder => Ok(normalize(&sections.join("\n\n"), false)),
        }
    }
}

/// Reduce a free-text date to its day, month and year, in that order.
///
/// The day is the first standalone one or two digit number, the month the
/// first run of letters and the year the first four digits. Parts that are
/// not found are left out.
pub fn extract_date(date: &str) -> String {
    let day = DAY.captures(date).and_then(|c| c.get(1)).map(|m| m.as_str());
    let month = MONTH.find(date).map(|m| m.as_str());
    let year = YEAR.find(date).map(|m| m.as_str());

    [day, month, year]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}
