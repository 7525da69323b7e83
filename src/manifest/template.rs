//! Placeholder substitution for download URL templates.
//!
//! A manifest's `url` may reference other manifest fields with `{field}`
//! placeholders:
//!
//! ```toml
//! version = "1.4.2"
//! url = "https://example.com/releases/{version}/{name}.dmg"
//! ```
//!
//! Only the placeholders listed in [`PLACEHOLDERS`] are recognized. A brace
//! that does not open or close a placeholder is an error, so a typo such as
//! `{verison}` or `{version` never leaks into a URL.

use thiserror::Error;

/// Placeholder names understood in URL templates.
pub const PLACEHOLDERS: &[&str] = &["version", "name"];

/// Why a template could not be expanded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{...}` names something other than a known placeholder.
    #[error("unknown placeholder '{{{name}}}' (expected one of: {})", PLACEHOLDERS.join(", "))]
    UnknownPlaceholder {
        /// The placeholder name as written
        name: String,
    },

    /// A `{` without a matching `}`, or a stray `}`.
    #[error("unbalanced brace at byte {offset}")]
    UnbalancedBrace {
        /// Byte offset of the offending brace
        offset: usize,
    },
}

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    /// Value for `{version}`
    pub version: &'a str,
    /// Value for `{name}`
    pub name: &'a str,
}

impl TemplateVars<'_> {
    fn lookup(&self, placeholder: &str) -> Option<&str> {
        match placeholder {
            "version" => Some(self.version),
            "name" => Some(self.name),
            _ => None,
        }
    }
}

/// Expand every `{placeholder}` in `template`.
///
/// # Errors
///
/// Returns [`TemplateError`] for unknown placeholders and unbalanced braces.
///
/// # Examples
///
/// ```rust
/// use caskwatch::manifest::template::{TemplateVars, expand};
///
/// let vars = TemplateVars { version: "latest", name: "ExampleApp" };
/// let url = expand("https://example.com/{version}/App.dmg", vars).unwrap();
/// assert_eq!(url, "https://example.com/latest/App.dmg");
/// ```
pub fn expand(template: &str, vars: TemplateVars<'_>) -> Result<String, TemplateError> {
    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(pos) = rest.find(['{', '}']) {
        if rest.as_bytes()[pos] == b'}' {
            return Err(TemplateError::UnbalancedBrace {
                offset: offset + pos,
            });
        }

        expanded.push_str(&rest[..pos]);
        let after_open = &rest[pos + 1..];
        let close = after_open.find('}').ok_or(TemplateError::UnbalancedBrace {
            offset: offset + pos,
        })?;

        let name = &after_open[..close];
        if name.contains('{') {
            return Err(TemplateError::UnbalancedBrace {
                offset: offset + pos,
            });
        }
        let value = vars.lookup(name).ok_or_else(|| TemplateError::UnknownPlaceholder {
            name: name.to_string(),
        })?;
        expanded.push_str(value);

        let consumed = pos + 1 + close + 1;
        rest = &rest[consumed..];
        offset += consumed;
    }

    expanded.push_str(rest);
    Ok(expanded)
}
