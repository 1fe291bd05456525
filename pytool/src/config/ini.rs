//! Minimal sectioned key/value parser for `pytool.ini`
//!
//! The config format is the classic INI subset: `[section]` headers, then
//! `key = value` assignments. pytool writes one section with one key at
//! bootstrap, but users may edit the file by hand, so the parser tolerates
//! comments and blank lines while rejecting lines it cannot make sense of.

use std::collections::HashMap;

use thiserror::Error;

/// A line the parser could not interpret, with its 1-based line number.
#[derive(Debug, Error)]
#[error("line {line}: expected section header or key = value, got '{text}'")]
pub struct IniParseError {
    /// 1-based line number of the offending line
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
}

/// A parsed sectioned key/value config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniFile {
    /// Parse sectioned key/value text.
    ///
    /// Blank lines and lines starting with `;` or `#` are ignored.
    /// `key = value` and `key: value` both assign within the current
    /// section, with keys and values trimmed. Duplicate keys overwrite,
    /// duplicate sections merge.
    ///
    /// # Errors
    ///
    /// A non-blank, non-comment line that is neither a section header nor
    /// an assignment, or an assignment before any section header, is an
    /// [`IniParseError`] naming the line.
    pub fn parse(text: &str) -> Result<Self, IniParseError> {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                let name = name.trim().to_string();
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let assignment = line.split_once('=').or_else(|| line.split_once(':'));
            match (assignment, &current) {
                (Some((key, value)), Some(section)) => {
                    sections
                        .entry(section.clone())
                        .or_default()
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
                _ => {
                    return Err(IniParseError {
                        line: index + 1,
                        text: line.to_string(),
                    });
                }
            }
        }

        Ok(Self { sections })
    }

    /// Look up a value by section and key. Case-sensitive.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }
}
