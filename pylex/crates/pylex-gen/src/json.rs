//! JSON table output.

use pylex_fa::ScannerTable;

use crate::error::GenResult;

/// Serializes `table` as pretty-printed JSON with a trailing newline.
///
/// The document has two keys, `accepting` and `transitions`, holding the
/// same arrays a generated C scanner embeds.
pub fn emit_json(table: &ScannerTable) -> GenResult<String> {
    let mut out = serde_json::to_string_pretty(table)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylex_fa::compile;
    use pylex_re::parse_rules;

    #[test]
    fn test_json_shape() {
        let table = compile(&parse_rules(b"a\nb").unwrap(), true).unwrap();
        let json = emit_json(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["accepting"], serde_json::json!([0, 1, 2]));
        let transitions = value["transitions"].as_array().unwrap();
        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[0][b'a' as usize], 1);
        assert_eq!(transitions[0][b'b' as usize], 2);
        assert_eq!(transitions[1][b'a' as usize], -1);
    }

    #[test]
    fn test_json_reads_back() {
        let table = compile(&parse_rules(b"[0-9]+").unwrap(), false).unwrap();
        let json = emit_json(&table).unwrap();
        let parsed: ScannerTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
