//! C scanner emission.
//!
//! The generated translation unit defines
//!
//! ```c
//! char *NAME(FILE *file, int *category_out);
//! ```
//!
//! which scans the longest token from `file`. It returns the lexeme in a
//! `malloc`ed, NUL-terminated buffer and stores the category in
//! `*category_out`, or returns `NULL` with `*category_out = -1` at end of
//! input or when no rule matches. Bytes read past the token are kept in a
//! private pushback stack, so no more than one `ungetc` is ever needed.
//! That stack belongs to the last stream scanned: calling the function on a
//! different `FILE *` discards bytes read ahead from the previous one.

use std::fmt::Write;

use pylex_fa::ScannerTable;

use crate::error::{GenError, GenResult};

/// Default name of the generated scanner function.
pub const DEFAULT_FUNCTION_NAME: &str = "pylex";

/// Options for [`emit_c`].
#[derive(Debug, Clone)]
pub struct COptions {
    /// Name of the generated function; also prefixes its private helpers.
    pub function_name: String,
}

impl Default for COptions {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }
}

/// Returns true if `name` is a valid C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}

/// Emits a self-contained C scanner for `table`.
pub fn emit_c(table: &ScannerTable, options: &COptions) -> GenResult<String> {
    let name = options.function_name.as_str();
    if !is_c_identifier(name) {
        return Err(GenError::InvalidName(name.to_string()));
    }

    let mut out = String::new();
    writeln!(out, "/* Generated by pylex. Do not edit. */")?;
    writeln!(out)?;
    writeln!(out, "/*")?;
    writeln!(out, " * {name}() reads ahead past each token and keeps those bytes for")?;
    writeln!(out, " * the next call. Read-ahead is kept for one stream at a time;")?;
    writeln!(out, " * switching to another FILE * drops what was read from the last one.")?;
    writeln!(out, " */")?;
    writeln!(out)?;
    writeln!(out, "#include <stdio.h>")?;
    writeln!(out, "#include <stdlib.h>")?;
    writeln!(out)?;

    write!(out, "static const int {name}_accepting[{}] = {{", table.state_count())?;
    write_list(&mut out, &table.accepting)?;
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(
        out,
        "static const int {name}_transitions[{}][256] = {{",
        table.state_count()
    )?;
    for row in &table.transitions {
        write!(out, "    {{")?;
        write_list(&mut out, row)?;
        writeln!(out, "}},")?;
    }
    writeln!(out, "}};")?;

    out.push_str(&BODY.replace("$name", name));

    tracing::debug!(
        function = name,
        states = table.state_count(),
        bytes = out.len(),
        "emitted C scanner"
    );
    Ok(out)
}

fn write_list(out: &mut String, values: &[i32]) -> std::fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write!(out, "{value}")?;
    }
    Ok(())
}

const BODY: &str = r#"
static FILE *$name_pushback_file = NULL;
static unsigned char *$name_pushback = NULL;
static size_t $name_pushback_size = 0;
static size_t $name_pushback_capacity = 0;

static void *$name_grow(void *buffer, size_t *capacity, size_t element_size)
{
    *capacity = *capacity == 0 ? 64 : *capacity * 2;
    buffer = realloc(buffer, *capacity * element_size);
    if (!buffer) {
        fprintf(stderr, "$name: memory exhausted\n");
        exit(EXIT_FAILURE);
    }
    return buffer;
}

static int $name_getc(FILE *file)
{
    if ($name_pushback_size > 0)
        return $name_pushback[--$name_pushback_size];
    return getc(file);
}

static void $name_ungetc(unsigned char c)
{
    if ($name_pushback_size == $name_pushback_capacity)
        $name_pushback = $name_grow($name_pushback, &$name_pushback_capacity, 1);
    $name_pushback[$name_pushback_size++] = c;
}

char *$name(FILE *file, int *category_out)
{
    char *lexeme = NULL;
    size_t size = 0;
    size_t capacity = 0;
    size_t accepted_size = 0;
    int accepted = 0;
    int state = 0;

    if (file != $name_pushback_file) {
        $name_pushback_size = 0;
        $name_pushback_file = file;
    }

    for (;;) {
        int c = $name_getc(file);
        if (c == EOF)
            break;

        if (size == capacity)
            lexeme = $name_grow(lexeme, &capacity, 1);
        lexeme[size++] = (char) c;

        state = $name_transitions[state][c];
        if (state < 0)
            break;

        if ($name_accepting[state]) {
            accepted = $name_accepting[state];
            accepted_size = size;
        }
    }

    while (size > accepted_size)
        $name_ungetc((unsigned char) lexeme[--size]);

    if (!accepted) {
        free(lexeme);
        *category_out = -1;
        return NULL;
    }

    if (size == capacity)
        lexeme = $name_grow(lexeme, &capacity, 1);
    lexeme[size] = '\0';

    *category_out = accepted;
    return lexeme;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pylex_fa::compile;
    use pylex_re::parse_rules;

    fn table(rules: &[u8]) -> ScannerTable {
        compile(&parse_rules(rules).unwrap(), true).unwrap()
    }

    #[test]
    fn test_c_identifier() {
        assert!(is_c_identifier("pylex"));
        assert!(is_c_identifier("_scan2"));
        assert!(!is_c_identifier(""));
        assert!(!is_c_identifier("2scan"));
        assert!(!is_c_identifier("scan-me"));
        assert!(!is_c_identifier("scan me"));
    }

    #[test]
    fn test_emits_signature() {
        let source = emit_c(&table(b"a"), &COptions::default()).unwrap();
        assert!(source.contains("char *pylex(FILE *file, int *category_out)"));
        assert!(source.contains("#include <stdio.h>"));
        assert!(!source.contains("$name"));
    }

    #[test]
    fn test_emits_tables() {
        // start --a--> accepting state 1
        let source = emit_c(&table(b"a"), &COptions::default()).unwrap();
        assert!(source.contains("static const int pylex_accepting[2] = {0, 1};"));
        assert!(source.contains("static const int pylex_transitions[2][256] = {"));

        let start_row = source
            .lines()
            .find(|line| line.starts_with("    {-1"))
            .unwrap();
        assert_eq!(start_row.matches(", ").count(), 255);
    }

    #[test]
    fn test_pushback_follows_stream() {
        let source = emit_c(&table(b"a"), &COptions::default()).unwrap();
        assert!(source.contains("Read-ahead is kept for one stream at a time"));
        assert!(source.contains("static FILE *pylex_pushback_file = NULL;"));
        assert!(source.contains(
            "    if (file != pylex_pushback_file) {\n        pylex_pushback_size = 0;"
        ));
    }

    #[test]
    fn test_custom_function_name() {
        let options = COptions {
            function_name: "next_token".to_string(),
        };
        let source = emit_c(&table(b"a"), &options).unwrap();
        assert!(source.contains("char *next_token(FILE *file, int *category_out)"));
        assert!(source.contains("next_token_transitions"));
        assert!(!source.contains("pylex_"));
    }

    #[test]
    fn test_rejects_invalid_name() {
        let options = COptions {
            function_name: "not valid".to_string(),
        };
        assert!(matches!(
            emit_c(&table(b"a"), &options),
            Err(GenError::InvalidName(_))
        ));
    }

    #[test]
    fn test_empty_rule_set_still_emits() {
        let source = emit_c(&table(b""), &COptions::default()).unwrap();
        assert!(source.contains("pylex_accepting[1] = {0};"));
    }
}
