// SPDX-License-Identifier: PMPL-1.0-or-later

//! Named-placeholder formatting for translation templates.
//!
//! Templates use `{name}` placeholders. `{{` and `}}` produce literal braces,
//! an unclosed `{` is kept as literal text, and `{}` is left untouched.

use super::I18nError;

/// Substitute every `{name}` in `template` with its value from `params`.
///
/// Returns [`I18nError::MissingPlaceholder`] when a placeholder has no entry
/// in `params`. Extra entries in `params` are ignored.
///
/// # Examples
///
/// ```
/// use ward_health::i18n::format_template;
/// let s = format_template("{indicator} by Ward", &[("indicator", "Population")]).unwrap();
/// assert_eq!(s, "Population by Ward");
/// ```
pub fn format_template(template: &str, params: &[(&str, &str)]) -> Result<String, I18nError> {
    if !template.contains('{') && !template.contains('}') {
        return Ok(template.to_string());
    }

    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '}' {
            if chars.peek() == Some(&'}') {
                chars.next();
            }
            out.push('}');
            continue;
        }
        if c != '{' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            out.push('{');
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for n in chars.by_ref() {
            if n == '}' {
                closed = true;
                break;
            }
            name.push(n);
        }

        if !closed {
            out.push('{');
            out.push_str(&name);
            break;
        }

        let name = name.trim();
        if name.is_empty() {
            out.push_str("{}");
            continue;
        }

        match params.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                return Err(I18nError::MissingPlaceholder {
                    template: template.to_string(),
                    name: name.to_string(),
                })
            }
        }
    }

    Ok(out)
}

/// Names of the placeholders referenced by `template`, in order of first use.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '{' {
            continue;
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            continue;
        }
        let mut name = String::new();
        let mut closed = false;
        for n in chars.by_ref() {
            if n == '}' {
                closed = true;
                break;
            }
            name.push(n);
        }
        let name = name.trim();
        if closed && !name.is_empty() && !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_named_placeholder() {
        let s = format_template("{indicator} by Ward", &[("indicator", "Population")]).unwrap();
        assert_eq!(s, "Population by Ward");
    }

    #[test]
    fn plain_template_is_returned_verbatim() {
        assert_eq!(format_template("View Raw Data", &[]).unwrap(), "View Raw Data");
    }

    #[test]
    fn repeated_and_multiple_placeholders() {
        let s = format_template("{y} vs. {x} ({y})", &[("x", "Age"), ("y", "Income")]).unwrap();
        assert_eq!(s, "Income vs. Age (Income)");
    }

    #[test]
    fn missing_placeholder_is_an_error() {
        let err = format_template("{indicator} by Ward", &[]).unwrap_err();
        assert_eq!(
            err,
            I18nError::MissingPlaceholder {
                template: "{indicator} by Ward".to_string(),
                name: "indicator".to_string(),
            }
        );
    }

    #[test]
    fn escaped_braces() {
        let params = &[("name", "Ward 3")];
        assert_eq!(format_template("{{name}}", params).unwrap(), "{name}");
        assert_eq!(format_template("{{{name}}}", params).unwrap(), "{Ward 3}");
        assert_eq!(format_template("}}", params).unwrap(), "}");
    }

    #[test]
    fn unclosed_brace_is_literal() {
        assert_eq!(format_template("Total {value", &[]).unwrap(), "Total {value");
    }

    #[test]
    fn non_ascii_text_survives() {
        let s = format_template("वार्ड अनुसार {indicator}", &[("indicator", "जनसंख्या")]).unwrap();
        assert_eq!(s, "वार्ड अनुसार जनसंख्या");
    }

    #[test]
    fn placeholder_names_in_order() {
        assert_eq!(placeholders("{y} vs. {x} {y} {{z}}"), vec!["y", "x"]);
        assert!(placeholders("no braces").is_empty());
    }
}
