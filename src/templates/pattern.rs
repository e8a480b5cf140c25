//! Template pattern parsing.
//!
//! A pattern is literal text interleaved with positional placeholders:
//!
//! | Placeholder | Meaning                                                   |
//! |-------------|-----------------------------------------------------------|
//! | `{0}`       | operand 0, rendered normally                              |
//! | `{0s}`      | operand 0 inlined as raw text, never bound               |
//! | `{0l}`      | operand 0 case-folded                                     |
//! | `{%0}`      | LIKE operand with a leading `%` (wildcards escaped)       |
//! | `{0%}`      | LIKE operand with a trailing `%`                          |
//! | `{%0%}`     | LIKE operand with both                                    |
//! | `{%%0%%}`   | doubled `%`: the same, case-folded                        |
//!
//! Anything else, including a `{` that does not open a placeholder, is text.

use crate::error::{QdslError, QdslResult};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{map_res, opt},
    IResult,
};

/// How a placeholder's operand is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    AsString,
    Lower,
    Like {
        lead: bool,
        trail: bool,
        ignore_case: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(String),
    Arg { index: usize, marker: Marker },
}

/// A parsed pattern with its precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: String,
    elements: Vec<Element>,
    precedence: Option<u16>,
}

impl Template {
    /// Parse a pattern. `precedence` is `None` for self-delimiting patterns
    /// (function calls), which never parenthesize or get parenthesized.
    pub fn parse(pattern: &str, precedence: Option<u16>) -> QdslResult<Self> {
        Ok(Self {
            pattern: pattern.to_string(),
            elements: parse_elements(pattern)?,
            precedence,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn precedence(&self) -> Option<u16> {
        self.precedence
    }

    /// Operand count implied by the highest placeholder index.
    pub fn arity(&self) -> usize {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Arg { index, .. } => Some(index + 1),
                Element::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.precedence {
            Some(p) => write!(f, "{} [{}]", self.pattern, p),
            None => write!(f, "{}", self.pattern),
        }
    }
}

struct RawPlaceholder<'a> {
    lead: Option<&'a str>,
    index: usize,
    flags: &'a str,
    trail: Option<&'a str>,
}

fn wildcard(input: &str) -> IResult<&str, &str> {
    alt((tag("%%"), tag("%")))(input)
}

fn placeholder(input: &str) -> IResult<&str, RawPlaceholder<'_>> {
    let (input, _) = char('{')(input)?;
    let (input, lead) = opt(wildcard)(input)?;
    let (input, index) = map_res(digit1, str::parse::<usize>)(input)?;
    let (input, flags) = take_while(|c: char| c.is_ascii_alphabetic())(input)?;
    let (input, trail) = opt(wildcard)(input)?;
    let (input, _) = char('}')(input)?;
    Ok((
        input,
        RawPlaceholder {
            lead,
            index,
            flags,
            trail,
        },
    ))
}

fn text(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != '{')(input)
}

fn marker(pattern: &str, raw: &RawPlaceholder<'_>) -> QdslResult<Marker> {
    if raw.lead.is_none() && raw.trail.is_none() {
        return match raw.flags {
            "" => Ok(Marker::None),
            "s" => Ok(Marker::AsString),
            "l" => Ok(Marker::Lower),
            other => Err(QdslError::template(
                pattern,
                format!("unknown placeholder flag '{}' on {{{}}}", other, raw.index),
            )),
        };
    }
    if !raw.flags.is_empty() {
        return Err(QdslError::template(
            pattern,
            format!("flag '{}' cannot be combined with a LIKE wildcard", raw.flags),
        ));
    }
    if let (Some(lead), Some(trail)) = (raw.lead, raw.trail) {
        if lead.len() != trail.len() {
            return Err(QdslError::template(
                pattern,
                format!("mismatched wildcards around {{{}}}", raw.index),
            ));
        }
    }
    let ignore_case = raw.lead == Some("%%") || raw.trail == Some("%%");
    Ok(Marker::Like {
        lead: raw.lead.is_some(),
        trail: raw.trail.is_some(),
        ignore_case,
    })
}

fn parse_elements(pattern: &str) -> QdslResult<Vec<Element>> {
    let mut elements = Vec::new();
    let mut buf = String::new();
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Ok((remaining, chunk)) = text(rest) {
            buf.push_str(chunk);
            rest = remaining;
            continue;
        }
        match placeholder(rest) {
            Ok((remaining, raw)) => {
                if !buf.is_empty() {
                    elements.push(Element::Text(std::mem::take(&mut buf)));
                }
                elements.push(Element::Arg {
                    index: raw.index,
                    marker: marker(pattern, &raw)?,
                });
                rest = remaining;
            }
            Err(_) => {
                // a lone '{' is text
                buf.push('{');
                rest = &rest[1..];
            }
        }
    }
    if !buf.is_empty() {
        elements.push(Element::Text(buf));
    }
    Ok(elements)
}
