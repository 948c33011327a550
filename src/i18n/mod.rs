//! UI string tables and lookup.
//!
//! Keys are dotted ids (`contact.form.send`). Lookup tries the requested
//! language, then French, then returns the key itself so a missing entry is
//! visible on the page instead of blank.


mod en;
mod fr;

use crate::state::language::Language;

type Table = &'static [(&'static str, &'static str)];

fn table(language: Language) -> Table {
    match language {
        Language::Fr => fr::STRINGS,
        Language::En => en::STRINGS,
    }
}

fn find(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key` for `language`.
#[must_use]
pub fn t(language: Language, key: &'static str) -> &'static str {
    find(table(language), key)
        .or_else(|| find(fr::STRINGS, key))
        .unwrap_or(key)
}

/// Translate `key` and substitute `{name}` placeholders.
#[must_use]
pub fn t_with(language: Language, key: &'static str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(t(language, key).to_owned(), |acc, (name, value)| acc.replace(&format!("{{{name}}}"), value))
}
