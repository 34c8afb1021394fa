//! Query tokenizer.
//!
//! Splits a query string into top-level tokens: whitespace separates tokens
//! only at parenthesis depth zero, so a fully parenthesized sub-expression
//! (including any nested `OR`s and further parentheses) stays one token.
//! The scan is a single iterative pass with a depth counter; nesting depth
//! in the input never grows the call stack.

use crate::error::QueryError;

/// Split a query string into top-level tokens.
///
/// Leading and trailing whitespace is trimmed; an empty or all-whitespace
/// input yields no tokens. Whitespace inside a parenthesized span is
/// preserved verbatim within its token.
///
/// # Errors
///
/// Returns a syntax [`QueryError`] when a `)` appears with no matching `(`
/// (reported at its byte offset within the trimmed input) or when a `(` is
/// never closed.
pub fn tokenize(input: &str) -> Result<Vec<String>, QueryError> {
    let input = input.trim();
    let mut tokens = Vec::new();
    let mut depth: usize = 0;
    let mut start: Option<usize> = None;

    for (pos, ch) in input.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                start.get_or_insert(pos);
            }
            ')' => {
                if depth == 0 {
                    return Err(QueryError::UnexpectedCloseParen { position: pos });
                }
                depth -= 1;
                start.get_or_insert(pos);
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(input[begin..pos].to_string());
                }
            }
            _ => {
                start.get_or_insert(pos);
            }
        }
    }

    if depth > 0 {
        return Err(QueryError::UnclosedParen);
    }
    if let Some(begin) = start {
        tokens.push(input[begin..].to_string());
    }
    Ok(tokens)
}
