//! Interface body parsing.
//!
//! Turns the raw text between an interface's braces into ordered
//! [`Property`] records:
//!
//! ```typescript
//! interface VaTextInput {
//!   /** Label shown above the field */
//!   label: string;
//!   "aria-describedby"?: string;
//! }
//! ```
//!
//! Comment lines accumulate into a pending description that attaches to the
//! next declaration. Lines that are not declarations are ignored.

use vads_docs_core::Property;

/// Parses property declarations from an interface body.
///
/// A statement is a declaration when it contains `:` and ends with `;`.
/// Several declarations may share one line; a `;` nested inside braces,
/// brackets, parens, generics or a string literal belongs to the type.
///
/// # Examples
///
/// ```
/// use vads_docs_metadata::parse_interface_properties;
///
/// let props = parse_interface_properties(r#"
///   /** Button label */
///   text: string;
///   "aria-label"?: string;
/// "#);
///
/// assert_eq!(props.len(), 2);
/// assert_eq!(props[0].description.as_deref(), Some("Button label"));
/// assert_eq!(props[1].name, "aria-label");
/// assert!(props[1].optional);
/// ```
#[must_use]
pub fn parse_interface_properties(body: &str) -> Vec<Property> {
    let mut properties = Vec::new();
    let mut pending = String::new();

    for raw_line in body.lines() {
        let line = raw_line.trim();

        if line.is_empty() || matches!(line, "{" | "}" | "};") || line.starts_with("interface")
        {
            continue;
        }

        if line.starts_with("/**") || line.starts_with('*') {
            let text = strip_comment_markers(line);
            if !text.is_empty() {
                if !pending.is_empty() {
                    pending.push(' ');
                }
                pending.push_str(text);
            }
            continue;
        }

        for statement in split_statements(line) {
            let Some(mut property) = parse_declaration(statement.trim()) else {
                continue;
            };
            if !pending.is_empty() {
                property.description = Some(std::mem::take(&mut pending));
            }
            properties.push(property);
        }
    }

    properties
}

/// Splits a line at top-level `;` terminators, keeping each terminator.
///
/// Any trailing text without a terminator is yielded as a final fragment.
fn split_statements(line: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        match quote {
            Some(q) => {
                if ch == q && prev != '\\' {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' | '`' => quote = Some(ch),
                '{' | '(' | '[' | '<' => depth += 1,
                '}' | ')' | ']' | '>' => {
                    // `=>` is an arrow, not a closing generic.
                    if !(ch == '>' && prev == '=') {
                        depth = depth.saturating_sub(1);
                    }
                }
                ';' if depth == 0 => {
                    statements.push(&line[start..=idx]);
                    start = idx + 1;
                }
                _ => {}
            },
        }
        prev = ch;
    }

    if start < line.len() {
        statements.push(&line[start..]);
    }
    statements
}

/// Parses one `name: type;` statement.
fn parse_declaration(statement: &str) -> Option<Property> {
    if !statement.ends_with(';') {
        return None;
    }
    let (name_part, type_part) = statement.split_once(':')?;

    let name_part = name_part.trim();
    let (name_part, optional) = name_part
        .strip_suffix('?')
        .map_or((name_part, false), |stripped| (stripped.trim_end(), true));
    let name = unquote(name_part);
    if name.is_empty() {
        return None;
    }

    let type_text = type_part.trim().trim_end_matches(';').trim();

    Some(Property::new(name, type_text, optional))
}

fn strip_comment_markers(line: &str) -> &str {
    let line = line.strip_suffix("*/").unwrap_or(line).trim_end();
    let line = line
        .strip_prefix("/**")
        .or_else(|| line.strip_prefix('*'))
        .unwrap_or(line);
    line.trim()
}

fn unquote(name: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = name
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    name
}
