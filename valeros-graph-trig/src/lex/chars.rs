//! TriG character class predicates.
//!
//! Based on the TriG grammar character productions (shared with Turtle and
//! SPARQL): PN_CHARS_BASE, PN_CHARS_U, PN_CHARS.

/// Check if a character is in PN_CHARS_BASE.
pub fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z' |
        'a'..='z' |
        '\u{00C0}'..='\u{00D6}' |
        '\u{00D8}'..='\u{00F6}' |
        '\u{00F8}'..='\u{02FF}' |
        '\u{0370}'..='\u{037D}' |
        '\u{037F}'..='\u{1FFF}' |
        '\u{200C}'..='\u{200D}' |
        '\u{2070}'..='\u{218F}' |
        '\u{2C00}'..='\u{2FEF}' |
        '\u{3001}'..='\u{D7FF}' |
        '\u{F900}'..='\u{FDCF}' |
        '\u{FDF0}'..='\u{FFFD}' |
        '\u{10000}'..='\u{EFFFF}'
    )
}

/// Check if a character is in PN_CHARS_U (PN_CHARS_BASE plus underscore).
pub fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

/// Check if a character is in PN_CHARS.
pub fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c == '-'
        || c.is_ascii_digit()
        || c == '\u{00B7}'
        || matches!(c, '\u{0300}'..='\u{036F}' | '\u{203F}'..='\u{2040}')
}

/// Check if a character can start a prefix name.
pub fn is_pn_prefix_start(c: char) -> bool {
    is_pn_chars_base(c)
}

/// Check if a character can start a local name.
pub fn is_pn_local_start(c: char) -> bool {
    is_pn_chars_u(c) || c == ':' || c.is_ascii_digit()
}

/// Check if a character is TriG whitespace.
pub fn is_ws(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Check if a character can appear in an IRI (unescaped).
pub fn is_iri_char(c: char) -> bool {
    !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '\x00'..='\x20')
}
