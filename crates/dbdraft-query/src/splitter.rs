//! SQL statement splitter
//!
//! A character-class state machine with four mutually exclusive modes
//! (default, in-string, line comment, block comment) and one character
//! of lookahead. Comment text is discarded entirely; a semicolon only
//! separates statements in default mode.

/// Split a multi-statement SQL string into individual trimmed statements.
///
/// The separating `;` is not part of any element, and empty fragments
/// are dropped. An unterminated string or comment simply extends to the
/// end of the input; no error is possible.
///
/// A quote toggles string mode only when the immediately preceding
/// character is not a backslash. The check is deliberately one character
/// deep, so `\\'` is still treated as an escaped quote.
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut string_char = '"';
    let mut in_line_comment = false;
    let mut in_block_comment = false;
    let chars: Vec<char> = sql.chars().collect();
    let len = chars.len();
    let mut i = 0;

    while i < len {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if in_block_comment {
            if c == '*' && next == Some('/') {
                in_block_comment = false;
                i += 2;
                continue;
            }
            i += 1;
            continue;
        }

        if in_line_comment {
            // The terminating newline is dropped along with the comment
            if c == '\n' {
                in_line_comment = false;
            }
            i += 1;
            continue;
        }

        if !in_string && c == '/' && next == Some('*') {
            in_block_comment = true;
            i += 2;
            continue;
        }

        if !in_string && c == '-' && next == Some('-') {
            in_line_comment = true;
            i += 2;
            continue;
        }

        if (c == '"' || c == '\'') && (i == 0 || chars[i - 1] != '\\') {
            if !in_string {
                in_string = true;
                string_char = c;
            } else if c == string_char {
                in_string = false;
            }
        }

        if c == ';' && !in_string {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                statements.push(trimmed.to_string());
            }
            current.clear();
        } else {
            current.push(c);
        }

        i += 1;
    }

    // Trailing content after the last separator
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }

    statements
}
