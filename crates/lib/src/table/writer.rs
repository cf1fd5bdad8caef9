//! Pretty printer for table-literal text.
//!
//! Output is block style with two-space indentation. Positional entries come
//! first, then fields ordered by key. Identifier keys are written bare and
//! any other key is bracketed and quoted. Floats always carry a decimal
//! point or exponent so they read back as floats.

use std::fmt::Write as _;

use super::errors::TableError;
use super::reader::is_identifier;
use super::{Table, TableValue};

const INDENT: &str = "  ";

/// Renders `table` as table-literal text that [`from_str`](super::from_str)
/// reads back into an equal table.
pub fn to_string_pretty(table: &Table) -> Result<String, TableError> {
    let mut out = String::new();
    let mut path = String::new();
    write_table(&mut out, table, 0, &mut path)?;
    Ok(out)
}

fn write_table(out: &mut String, table: &Table, depth: usize, path: &mut String) -> Result<(), TableError> {
    if table.is_empty() {
        out.push_str("{}");
        return Ok(());
    }
    out.push_str("{\n");
    let total = table.items().len() + table.fields().len();
    let mut written = 0;

    for (i, item) in table.items().iter().enumerate() {
        indent(out, depth + 1);
        let mark = path.len();
        let _ = write!(path, "[{}]", i + 1);
        write_value(out, item, depth + 1, path)?;
        path.truncate(mark);
        written += 1;
        separator(out, written, total);
    }

    for (key, value) in table.fields() {
        indent(out, depth + 1);
        if is_identifier(key) {
            out.push_str(key);
        } else {
            out.push('[');
            write_string(out, key);
            out.push(']');
        }
        out.push_str(" = ");
        let mark = path.len();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        write_value(out, value, depth + 1, path)?;
        path.truncate(mark);
        written += 1;
        separator(out, written, total);
    }

    indent(out, depth);
    out.push('}');
    Ok(())
}

fn write_value(out: &mut String, value: &TableValue, depth: usize, path: &mut String) -> Result<(), TableError> {
    match value {
        TableValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        // The decimal form of i64::MIN would read back as a float.
        TableValue::Int(i64::MIN) => out.push_str("0x8000000000000000"),
        TableValue::Int(n) => {
            let _ = write!(out, "{n}");
        }
        TableValue::Float(f) if !f.is_finite() => {
            return Err(TableError::NonFiniteNumber { path: path.clone() });
        }
        TableValue::Float(f) => {
            let _ = write!(out, "{f:?}");
        }
        TableValue::Text(s) => write_string(out, s),
        TableValue::Table(t) => write_table(out, t, depth, path)?,
    }
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn separator(out: &mut String, written: usize, total: usize) {
    if written < total {
        out.push(',');
    }
    out.push('\n');
}
