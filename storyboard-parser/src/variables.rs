//! `$NAME=VALUE` declarations and their textual substitution

use std::borrow::Cow;

/// Name to text bindings, in declaration order
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration line, returning the bound name.
    ///
    /// Lines without exactly one `=` are ignored. Redeclaring a name replaces
    /// its value in place.
    pub fn declare(&mut self, line: &str) -> Option<&str> {
        let mut parts = line.split('=');
        let (name, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => (name.trim(), value.trim()),
            _ => return None,
        };

        let index = match self.entries.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.entries[index].1 = value.to_string();
                index
            }
            None => {
                self.entries.push((name.to_string(), value.to_string()));
                self.entries.len() - 1
            }
        };

        Some(self.entries[index].0.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns another bound name that contains `name` or is contained in it
    pub fn overlapping(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(|(n, _)| n.as_str())
            .find(|other| *other != name && (other.contains(name) || name.contains(*other)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every occurrence of every bound name in `line`.
    ///
    /// A single left-to-right pass, trying longer names first at each
    /// position. Replacement text is never rescanned.
    pub fn substitute<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut ordered: Vec<&(String, String)> = self
            .entries
            .iter()
            .filter(|(name, _)| !name.is_empty() && line.contains(name.as_str()))
            .collect();
        if ordered.is_empty() {
            return Cow::Borrowed(line);
        }
        ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut out = String::with_capacity(line.len());
        let mut rest = line;
        'scan: while !rest.is_empty() {
            for (name, value) in &ordered {
                if let Some(tail) = rest.strip_prefix(name.as_str()) {
                    out.push_str(value);
                    rest = tail;
                    continue 'scan;
                }
            }

            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }

        Cow::Owned(out)
    }
}
