//! Person format templates.
//!
//! A template is plain text with named placeholders:
//!
//! ```text
//! <h2>{name}</h2>
//! {date}
//! {location}
//!
//! {description}
//!
//! {memberships}
//! {remembrances}
//! {extra}
//! ```
//!
//! `{{` and `}}` produce literal braces. Any other use of braces is an error
//! reported when the template is parsed, not when a person is rendered.

use crate::error::{MemoriamError, Result};

/// A substitutable person field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Date,
    Location,
    Description,
    Memberships,
    Remembrances,
    Extra,
}

impl Field {
    /// All fields, in fixed-order rendering order (and discriminant order).
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Date,
        Field::Location,
        Field::Description,
        Field::Memberships,
        Field::Remembrances,
        Field::Extra,
    ];

    /// Placeholder name used inside templates.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Date => "date",
            Field::Location => "location",
            Field::Description => "description",
            Field::Memberships => "memberships",
            Field::Remembrances => "remembrances",
            Field::Extra => "extra",
        }
    }

    fn from_placeholder(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.placeholder() == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed person format template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template text. Surrounding whitespace is trimmed first.
    pub fn parse(text: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = text.trim().chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => {
                                return Err(MemoriamError::template(format!(
                                    "unclosed placeholder '{{{name}'"
                                )));
                            }
                        }
                    }
                    let field = Field::from_placeholder(&name).ok_or_else(|| {
                        MemoriamError::template(format!("unknown placeholder '{{{name}}}'"))
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => {
                    return Err(MemoriamError::template("single '}' outside a placeholder"));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Fields referenced by this template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Field(f) => Some(*f),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute every placeholder using `value`.
    pub fn fill<F>(&self, mut value: F) -> String
    where
        F: FnMut(Field) -> String,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(&value(*field)),
            }
        }
        out
    }
}

/// How a person is laid out as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// Substitute into a template, then strip dangling tag lines.
    Template(Template),
    /// All sections in [`Field::ALL`] order, separated by blank lines.
    FixedOrder,
}
