// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CSV line tokenizer with a deliberately restricted quoting grammar.
//!
//! A quote opens "in-quotes" mode only at the start of the line or
//! immediately after a comma, and closes it only at the end of the line or
//! immediately before a comma. While in quotes, commas are literal text.
//! A quote anywhere else is an ordinary character and does not toggle mode.
//!
//! This is not RFC 4180: there is no `""` escaping, and a stray mid-field
//! quote is passed through verbatim. The shop exports this crate consumes
//! were produced against exactly this grammar, so we keep it rather than
//! adopt a stricter one that would re-split their data differently.
//!
//! Every produced field is trimmed of surrounding whitespace, with the
//! enclosing quotes (when the grammar recognized them) removed.

/// Split one raw catalog line into its fields.
///
/// The output always has exactly one more field than the number of
/// delimiting commas; empty positions yield empty strings.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for i in 0..chars.len() {
        let c = chars[i];
        if c == '"' && !in_quotes && (i == 0 || chars[i - 1] == ',') {
            in_quotes = true;
        } else if c == '"' && in_quotes && (i == chars.len() - 1 || chars[i + 1] == ',') {
            in_quotes = false;
        } else if c == ',' && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_string());

    fields
}
