//! Line classification, indentation depth and comma-separated fields

use crate::{Error, Result};
use std::str::FromStr;

/// Category of a raw script line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank line or `//` comment
    Comment,
    /// `[Section]` header
    Section,
    /// `$NAME=VALUE` declaration, trimmed
    Variable(&'a str),
    /// Element or command; the untrimmed line carries its depth
    Content,
}

pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with("//") {
        LineKind::Comment
    } else if trimmed.starts_with('[') {
        LineKind::Section
    } else if trimmed.starts_with('$') {
        LineKind::Variable(trimmed)
    } else {
        LineKind::Content
    }
}

/// Number of leading spaces or underscores
pub fn depth(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'_')).count()
}

/// A content line split into its depth and fields
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLine<'a> {
    pub depth: usize,
    pub fields: Fields<'a>,
}

impl<'a> ContentLine<'a> {
    pub fn split(line: &'a str) -> Self {
        let depth = depth(line);
        Self {
            depth,
            fields: Fields::new(&line[depth..]),
        }
    }
}

/// Comma-separated fields of one line
#[derive(Debug, Clone, PartialEq)]
pub struct Fields<'a> {
    parts: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn new(payload: &'a str) -> Self {
        Self {
            parts: payload.split(',').collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// First field, trimmed
    pub fn keyword(&self) -> &'a str {
        self.parts.first().map_or("", |s| s.trim())
    }

    /// Trimmed field, `None` when missing or blank
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.parts
            .get(index)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Trimmed field that must be present, though it may be blank
    pub fn required(&self, index: usize, name: &'static str) -> Result<&'a str> {
        self.parts
            .get(index)
            .map(|s| s.trim())
            .ok_or(Error::MissingField { index, name })
    }

    pub fn parse<T: FromStr>(&self, index: usize, name: &'static str) -> Result<T> {
        let value = self.required(index, name)?;
        value.parse().map_err(|_| Error::InvalidNumber {
            index,
            name,
            value: value.to_string(),
        })
    }

    /// Parses an optional trailing field
    pub fn parse_opt<T: FromStr>(&self, index: usize, name: &'static str) -> Result<Option<T>> {
        match self.get(index) {
            Some(_) => self.parse(index, name).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Comment);
        assert_eq!(classify("   \t"), LineKind::Comment);
        assert_eq!(classify("// Background and Video events"), LineKind::Comment);
        assert_eq!(classify("  // indented comment"), LineKind::Comment);
        assert_eq!(classify("[Events]"), LineKind::Section);
        assert_eq!(classify(" $pos = 1,2 "), LineKind::Variable("$pos = 1,2"));
        assert_eq!(classify("Sprite,Background,Centre,\"a.png\",0,0"), LineKind::Content);
        assert_eq!(classify(" F,0,0,100,1"), LineKind::Content);
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth("Sprite,0"), 0);
        assert_eq!(depth(" F,0"), 1);
        assert_eq!(depth("_F,0"), 1);
        assert_eq!(depth(" _ F,0"), 3);
        assert_eq!(depth("__L,0,5"), 2);
    }

    #[test]
    fn test_content_split() {
        let line = ContentLine::split("__L,0,5");
        assert_eq!(line.depth, 2);
        assert_eq!(line.fields.keyword(), "L");
        assert_eq!(line.fields.len(), 3);
        assert_eq!(line.fields.get(2), Some("5"));
    }

    #[test]
    fn test_fields() {
        let fields = Fields::new("F,0,100,,1");
        assert_eq!(fields.get(3), None);
        assert_eq!(fields.required(3, "end time"), Ok(""));
        assert_eq!(fields.parse::<f64>(2, "start time"), Ok(100.0));
        assert_eq!(fields.parse_opt::<f32>(5, "end value"), Ok(None));
        assert_eq!(
            fields.parse::<f32>(7, "value"),
            Err(Error::MissingField { index: 7, name: "value" })
        );
        assert!(matches!(
            fields.parse::<i32>(3, "end time"),
            Err(Error::InvalidNumber { index: 3, .. })
        ));
    }
}
