//! Stylesheet tokenizer
//!
//! Splits sheet text into rules of selectors and `property: value` declarations.
//! Only the subset of CSS the toolkit reads is recognized: flat rules, comments and
//! at-rules (which are skipped along with their blocks). Interpreting selectors and
//! values is left to the caller.

use crate::error::StyleError;

/// One `selectors { declarations }` block
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawRule {
    /// Line of the opening brace, for diagnostics
    pub line: usize,
    pub selectors: Vec<String>,
    pub declarations: Vec<(String, String)>,
}

pub(crate) fn tokenize(sheet: &str) -> Result<Vec<RawRule>, StyleError> {
    let text = strip_comments(sheet)?;
    let mut rules = Vec::new();
    let mut line = 1;
    let mut prelude = String::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                let open_line = line;
                let block = read_block(&mut chars, &mut line)?;
                let prelude = std::mem::take(&mut prelude);
                let prelude = prelude.trim();

                if prelude.starts_with('@') {
                    continue;
                }
                if prelude.is_empty() {
                    return Err(syntax(open_line, "rule without a selector"));
                }

                rules.push(RawRule {
                    line: open_line,
                    selectors: prelude
                        .split(',')
                        .map(|selector| selector.trim().to_owned())
                        .collect(),
                    declarations: parse_declarations(&block, open_line)?,
                });
            }
            '}' => return Err(syntax(line, "unexpected `}`")),
            ';' if prelude.trim_start().starts_with('@') => prelude.clear(),
            _ => {
                if c == '\n' {
                    line += 1;
                }
                prelude.push(c);
            }
        }
    }

    if !prelude.trim().is_empty() {
        return Err(syntax(line, "expected `{` after selector"));
    }

    Ok(rules)
}

/// Read up to the brace closing the block that was just opened; nested blocks are
/// only legal inside at-rules and come back verbatim
fn read_block(chars: &mut std::str::Chars<'_>, line: &mut usize) -> Result<String, StyleError> {
    let start = *line;
    let mut depth = 1;
    let mut block = String::new();

    for c in chars.by_ref() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(block);
                }
            }
            '\n' => *line += 1,
            _ => {}
        }
        block.push(c);
    }

    Err(syntax(start, "unterminated block"))
}

fn parse_declarations(block: &str, line: usize) -> Result<Vec<(String, String)>, StyleError> {
    if block.contains('{') {
        return Err(syntax(line, "nested block inside rule"));
    }

    block
        .split(';')
        .map(str::trim)
        .filter(|declaration| !declaration.is_empty())
        .map(|declaration| {
            let (property, value) = declaration
                .split_once(':')
                .ok_or_else(|| syntax(line, format!("expected `property: value`, got `{declaration}`")))?;
            Ok((property.trim().to_ascii_lowercase(), value.trim().to_owned()))
        })
        .collect()
}

/// Blank out `/* */` comments, keeping newlines so line numbers stay accurate
fn strip_comments(sheet: &str) -> Result<String, StyleError> {
    let mut out = String::with_capacity(sheet.len());
    let mut rest = sheet;
    let mut line = 1;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        line += rest[..start].matches('\n').count();

        let comment = &rest[start + 2..];
        let end = comment
            .find("*/")
            .ok_or_else(|| syntax(line, "unterminated comment"))?;

        let newlines = comment[..end].matches('\n').count();
        out.extend(std::iter::repeat('\n').take(newlines));
        out.push(' ');
        line += newlines;
        rest = &comment[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn syntax(line: usize, message: impl Into<String>) -> StyleError {
    StyleError::Syntax {
        line,
        message: message.into(),
    }
}
