//! Tab completion over command names and alias keys.

use crate::alias::AliasTable;
use crate::interpreter::CommandRegistry;

/// Result of completing a partial input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    None,
    Single(String),
    /// All matches, registry names first, then alias keys.
    Multiple(Vec<String>),
}

/// Complete `partial` against registry names followed by alias keys.
///
/// Matching is a case-sensitive prefix test with `partial` taken as-is.
/// A name present in both sources is listed twice.
pub fn complete(registry: &CommandRegistry, aliases: &AliasTable, partial: &str) -> Completion {
    let mut matches: Vec<String> = registry
        .names()
        .chain(aliases.keys())
        .filter(|candidate| candidate.starts_with(partial))
        .map(str::to_string)
        .collect();
    match matches.len() {
        0 => Completion::None,
        1 => Completion::Single(matches.remove(0)),
        _ => Completion::Multiple(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::CommandKind;

    fn builtins() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        crate::register_builtins(&mut reg);
        reg
    }

    #[test]
    fn single_match() {
        let c = complete(&builtins(), &AliasTable::default(), "exp");
        assert_eq!(c, Completion::Single("experience".into()));
    }

    #[test]
    fn multiple_matches_in_candidate_order() {
        let c = complete(&builtins(), &AliasTable::default(), "c");
        assert_eq!(
            c,
            Completion::Multiple(vec![
                "certs".into(),
                "contact".into(),
                "clear".into(),
                "copy".into(),
                "cat about.txt".into(),
                "cat skills.txt".into(),
            ])
        );
    }

    #[test]
    fn no_match() {
        let c = complete(&builtins(), &AliasTable::default(), "zzz");
        assert_eq!(c, Completion::None);
    }

    #[test]
    fn case_sensitive() {
        let c = complete(&builtins(), &AliasTable::default(), "HE");
        assert_eq!(c, Completion::None);
    }

    #[test]
    fn alias_only_match() {
        let c = complete(&builtins(), &AliasTable::default(), "ma");
        assert_eq!(c, Completion::Single("man projects".into()));
    }

    #[test]
    fn empty_partial_lists_everything() {
        let c = complete(&builtins(), &AliasTable::default(), "");
        match c {
            Completion::Multiple(all) => {
                assert_eq!(all.len(), CommandKind::ALL.len() + crate::ALIASES.len());
                assert_eq!(all[0], "help");
                assert_eq!(all.last().map(String::as_str), Some("about"));
            },
            other => panic!("expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_sources_not_deduplicated() {
        static TABLE: &[(&str, &str)] = &[("help", "help")];
        let c = complete(&builtins(), &AliasTable::new(TABLE), "hel");
        assert_eq!(
            c,
            Completion::Multiple(vec!["help".into(), "help".into()])
        );
    }
}
