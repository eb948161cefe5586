//! Tag-body interpretation shared by both scanners.
//!
//! A tag body is the text between `<` and `>`. Scanners locate it; this module
//! decides what kind of tag it is and splits out the name and attributes.

use crate::error::MalformedXmlError;
use crate::parser::element::Attributes;

/// A classified tag body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag<'a> {
    Open {
        name: &'a str,
        attributes: Attributes,
    },
    SelfClosing {
        name: &'a str,
        attributes: Attributes,
    },
    Close {
        name: &'a str,
    },
}

impl<'a> Tag<'a> {
    /// Classifies `body` by its leading or trailing `/`
    pub fn parse(body: &'a str) -> Result<Self, MalformedXmlError> {
        if let Some(name) = body.strip_prefix('/') {
            if name.is_empty() {
                return Err(MalformedXmlError::EmptyTag);
            }
            return Ok(Self::Close { name });
        }

        if let Some(inner) = body.strip_suffix('/') {
            let (name, raw) = split_name(inner)?;
            return Ok(Self::SelfClosing {
                name,
                attributes: parse_attributes(raw)?,
            });
        }

        let (name, raw) = split_name(body)?;
        Ok(Self::Open {
            name,
            attributes: parse_attributes(raw)?,
        })
    }
}

/// Splits a tag body into its name and the raw attribute text after it
pub fn split_name(body: &str) -> Result<(&str, &str), MalformedXmlError> {
    if body.is_empty() {
        return Err(MalformedXmlError::EmptyTag);
    }
    let (name, raw) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
    if !is_valid_name(name) {
        return Err(MalformedXmlError::InvalidTagName(name.to_string()));
    }
    Ok((name, raw))
}

/// Names are one or more word characters
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Parses `key="value"` and `key=value` pairs separated by whitespace.
///
/// Quoted values run to the next `"` and cannot contain one; unquoted values
/// run to the next whitespace. A repeated key keeps its first position and
/// takes the last value.
pub fn parse_attributes(raw: &str) -> Result<Attributes, MalformedXmlError> {
    let mut attributes = Attributes::new();
    let mut rest = raw.trim();

    while !rest.is_empty() {
        let (key, remainder) = rest
            .split_once('=')
            .ok_or_else(|| MalformedXmlError::MalformedAttribute(rest.to_string()))?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(MalformedXmlError::MalformedAttribute(key.to_string()));
        }

        let remainder = remainder.trim_start();
        let (value, next) = match remainder.strip_prefix('"') {
            Some(quoted) => quoted
                .split_once('"')
                .ok_or_else(|| MalformedXmlError::UnterminatedAttributeValue(key.to_string()))?,
            None => remainder
                .split_once(char::is_whitespace)
                .unwrap_or((remainder, "")),
        };

        attributes.insert(key.to_string(), value.to_string());
        rest = next.trim();
    }

    Ok(attributes)
}
