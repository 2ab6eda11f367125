//! NCERT theory topics answered from fixed fact tables.
//!
//! These run after every reaction solver, so each module gates on its own
//! vocabulary and declines anything else.

pub(super) mod biomolecules;
pub(super) mod everyday;
pub(super) mod isomerism;
pub(super) mod polymers;
pub(super) mod practical;
pub(super) mod stereochemistry;

use std::cmp::Reverse;

use super::contains_word;

/// Table entry whose longest alias occurs in `text` as a whole word.
fn lookup<'a, T>(
    text: &str,
    entries: &'a [T],
    aliases: impl Fn(&T) -> &'static [&'static str],
) -> Option<&'a T> {
    entries
        .iter()
        .flat_map(|entry| aliases(entry).iter().map(move |alias| (*alias, entry)))
        .filter(|(alias, _)| contains_word(text, alias))
        .min_by_key(|(alias, _)| Reverse(alias.len()))
        .map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: &'static str,
        aliases: &'static [&'static str],
    }

    const ENTRIES: &[Entry] = &[
        Entry {
            name: "six",
            aliases: &["nylon 6", "nylon-6"],
        },
        Entry {
            name: "six-six",
            aliases: &["nylon 6,6", "nylon-6,6"],
        },
    ];

    #[test]
    fn longest_alias_wins() {
        let hit = lookup("monomers of nylon 6,6", ENTRIES, |entry| entry.aliases).unwrap();
        assert_eq!(hit.name, "six-six");
        let hit = lookup("monomer of nylon-6?", ENTRIES, |entry| entry.aliases).unwrap();
        assert_eq!(hit.name, "six");
    }

    #[test]
    fn aliases_must_be_whole_words() {
        assert!(lookup("nylon 66", ENTRIES, |entry| entry.aliases).is_none());
    }
}
