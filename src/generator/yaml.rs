//! Block-style YAML emitter.
//!
//! Writes a `serde_yaml::Value` with 2-space indentation, sequences indented
//! under their key, no flow collections (except `[]`/`{}` for empties), and
//! double quotes only on scalars that would not read back as the same string.
//!
//! ```yaml
//! categories:
//!   - name: Tools
//!     sites:
//!       - name: G
//!         description: ""
//! ```

use serde_yaml::{Mapping, Value};

const INDENT: usize = 2;

/// Characters that change meaning at the start of a plain scalar.
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

/// Unicode line and paragraph separators, read as line breaks.
const LINE_SEPARATORS: [char; 2] = ['\u{2028}', '\u{2029}'];

/// Emit a value as a block-style YAML document (no `---` marker).
pub fn to_block_yaml(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Mapping(map) if !map.is_empty() => write_mapping(&mut out, map, 0),
        Value::Sequence(seq) if !seq.is_empty() => write_sequence(&mut out, seq, 0),
        other => {
            out.push_str(&scalar(other));
            out.push('\n');
        }
    }
    out
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize) {
    let pad = " ".repeat(indent);
    for (key, value) in map {
        out.push_str(&pad);
        out.push_str(&scalar(key));
        out.push(':');
        match value {
            Value::Mapping(m) if !m.is_empty() => {
                out.push('\n');
                write_mapping(out, m, indent + INDENT);
            }
            Value::Sequence(s) if !s.is_empty() => {
                out.push('\n');
                write_sequence(out, s, indent + INDENT);
            }
            other => {
                out.push(' ');
                out.push_str(&scalar(other));
                out.push('\n');
            }
        }
    }
}

fn write_sequence(out: &mut String, seq: &[Value], indent: usize) {
    let pad = " ".repeat(indent);
    for item in seq {
        let nested = match item {
            Value::Mapping(m) if !m.is_empty() => {
                let mut buf = String::new();
                write_mapping(&mut buf, m, indent + INDENT);
                Some(buf)
            }
            Value::Sequence(s) if !s.is_empty() => {
                let mut buf = String::new();
                write_sequence(&mut buf, s, indent + INDENT);
                Some(buf)
            }
            _ => None,
        };

        out.push_str(&pad);
        out.push_str("- ");
        match nested {
            // First line of the block moves up next to the dash.
            Some(buf) => out.push_str(&buf[indent + INDENT..]),
            None => {
                out.push_str(&scalar(item));
                out.push('\n');
            }
        }
    }
}

/// Render a scalar (or an empty collection) inline.
fn scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote_if_needed(s),
        Value::Sequence(_) => "[]".to_string(),
        Value::Mapping(_) => "{}".to_string(),
        Value::Tagged(tagged) => scalar(&tagged.value),
    }
}

/// Leave `s` plain when it is safe, otherwise double-quote it.
pub fn quote_if_needed(s: &str) -> String {
    if needs_quotes(s) {
        double_quote(s)
    } else {
        s.to_string()
    }
}

fn needs_quotes(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return true;
    };
    if s.trim() != s
        || INDICATORS.contains(&first)
        || s.chars().any(char::is_control)
        || s.contains(LINE_SEPARATORS)
        || s.contains(": ")
        || s.contains(" #")
        || s.ends_with(':')
    {
        return true;
    }

    // `true`, `null`, `1.0`, `0x1f`, `~`, ... would change type.
    !matches!(serde_yaml::from_str::<Value>(s), Ok(Value::String(parsed)) if parsed == s)
}

fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
