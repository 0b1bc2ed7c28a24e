//! Fixed alias table.

/// Literal input → canonical command, in listing order.
///
/// Every alias maps straight to its final command, so resolution is a
/// single lookup.
pub const ALIASES: &[(&str, &str)] = &[
    ("ls", "help"),
    ("cat about.txt", "whoami"),
    ("cat skills.txt", "skills"),
    ("man projects", "projects"),
    ("about", "whoami"),
];

/// Exact-match alias lookup over a fixed table.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasTable {
    pub fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Resolve a whole input line.
    ///
    /// The input is lowercased and compared against the keys as a whole
    /// string. A miss returns the input unchanged.
    pub fn resolve(&self, input: &str) -> String {
        let normalized = input.to_lowercase();
        self.entries
            .iter()
            .find(|(from, _)| *from == normalized)
            .map_or_else(|| input.to_string(), |(_, to)| (*to).to_string())
    }

    /// Alias keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(from, _)| *from)
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(ALIASES)
    }
}
