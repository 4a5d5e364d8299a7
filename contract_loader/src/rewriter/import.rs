//!
//! The intra-application import statement.
//!

///
/// The `import <shortcut> as <alias>` statement.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import<'a> {
    /// The imported module shortcut.
    pub shortcut: &'a str,
    /// The local binding name.
    pub alias: &'a str,
}

///
/// The import statement parser.
///
#[derive(Debug, Clone)]
pub struct ImportParser {
    /// The compiled import line pattern.
    pattern: regex::Regex,
}

impl ImportParser {
    /// The import line pattern.
    pub const PATTERN: &'static str =
        r"^[ \t]*import[ \t]+(?P<shortcut>\w+)[ \t]+as[ \t]+(?P<alias>\w+)[ \t]*$";

    ///
    /// Parses a single line, with or without its terminator.
    ///
    pub fn parse<'a>(&self, line: &'a str) -> Option<Import<'a>> {
        let line = self::strip_terminator(line).0;
        let captures = self.pattern.captures(line)?;
        Some(Import {
            shortcut: captures.name("shortcut")?.as_str(),
            alias: captures.name("alias")?.as_str(),
        })
    }

    ///
    /// Returns every import of the source with its 1-based line number.
    ///
    pub fn imports<'a>(&self, source: &'a str) -> Vec<(usize, Import<'a>)> {
        source
            .split_inclusive('\n')
            .enumerate()
            .filter_map(|(index, line)| self.parse(line).map(|import| (index + 1, import)))
            .collect()
    }
}

impl Default for ImportParser {
    fn default() -> Self {
        Self {
            pattern: regex::Regex::new(Self::PATTERN).expect("Always valid"),
        }
    }
}

///
/// Splits the line into its content and its terminator.
///
pub fn strip_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
