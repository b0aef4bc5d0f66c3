//! The built-in rule set used by `cpylex`.
//!
//! Categories are the rule numbers below, counting from 1.

use anyhow::{Context, Result};
use pylex_fa::{compile, ScannerTable};
use pylex_re::parse_rules;

/// A Python-flavoured rule set, one rule per entry.
///
/// Raw newlines inside `[...]` are class members, not rule separators.
pub const DEFAULT_RULES: &[&str] = &[
    // 1: keywords
    "False|None|True|and|as|assert|async|await|break|class|continue|def|del|elif|else|except|\
     finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|\
     while|with|yield",
    // 2: identifiers
    "[A-Za-z_][A-Za-z0-9_]*",
    // 3: numbers
    "[0-9]+|[0-9]+.[0-9]+|0(x|X)[0-9A-Fa-f]+",
    // 4: strings
    "\"([^\"\\\n]|\\\\[^\n])*\"|'([^'\\\n]|\\\\[^\n])*'",
    // 5: comments
    "#[^\n]*",
    // 6: operators
    "\\*\\*|\\*\\*=|//|//=|<<|<<=|>>|>>=|[-+*/%@&|^]|[-+*/%@&|^]=|[<>=!]=|[<>=~]|->|:=",
    // 7: delimiters
    "[]()[{},:.;]",
    // 8: newline
    "\\n|\\r\\n",
    // 9: blanks
    "( |\\t|\\f)+",
];

/// Category numbers of [`DEFAULT_RULES`].
pub mod category {
    pub const KEYWORD: i32 = 1;
    pub const IDENTIFIER: i32 = 2;
    pub const NUMBER: i32 = 3;
    pub const STRING: i32 = 4;
    pub const COMMENT: i32 = 5;
    pub const OPERATOR: i32 = 6;
    pub const DELIMITER: i32 = 7;
    pub const NEWLINE: i32 = 8;
    pub const BLANK: i32 = 9;
}

/// The rule file equivalent of [`DEFAULT_RULES`].
pub fn default_rules_source() -> String {
    DEFAULT_RULES.join("\n")
}

/// Compiles [`DEFAULT_RULES`] into a minimized scanner table.
pub fn default_table() -> Result<ScannerTable> {
    let rules = parse_rules(default_rules_source().as_bytes())
        .context("built-in rule set does not parse")?;
    let table = compile(&rules, true).context("built-in rule set does not compile")?;
    tracing::debug!(states = table.state_count(), "compiled built-in rules");
    Ok(table)
}
