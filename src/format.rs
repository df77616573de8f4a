use crate::node::Node::{self, Array, Object, Value};
use std::fmt::{self, Display};

/// Pretty JSON with a two space indent.
impl Display for Node<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut buf = String::new();
    self.format(&mut buf, "  ", 0, false);
    f.write_str(&buf)
  }
}

impl Node<'_> {
  fn format(&self, buf: &mut String, indent: &str, level: usize, apply_initial_indent: bool) {
    let print_indent =
      |level: usize, buf: &mut String| (0..level).for_each(|_| buf.push_str(indent));

    if apply_initial_indent {
      print_indent(level, buf);
    }

    match self {
      Value(x) => push_json_string(buf, x),

      Array(xs) if xs.is_empty() => buf.push_str("[]"),
      Array(xs) => {
        buf.push_str("[\n");
        xs.iter().enumerate().for_each(|(i, x)| {
          x.format(buf, indent, level + 1, true);
          if i < xs.len() - 1 {
            buf.push_str(",\n")
          }
        });
        buf.push('\n');
        print_indent(level, buf);
        buf.push(']');
      }

      Object(xs) if xs.is_empty() => buf.push_str("{}"),
      Object(xs) => {
        buf.push_str("{\n");
        xs.iter().enumerate().for_each(|(i, (key, val))| {
          print_indent(level + 1, buf);
          push_json_string(buf, key);
          buf.push_str(": ");
          val.format(buf, indent, level + 1, false);
          if i < xs.len() - 1 {
            buf.push_str(",\n")
          }
        });
        buf.push('\n');
        print_indent(level, buf);
        buf.push('}');
      }
    }
  }
}

fn push_json_string(buf: &mut String, s: &str) {
  buf.push('"');
  for c in s.chars() {
    match c {
      '"' => buf.push_str("\\\""),
      '\\' => buf.push_str("\\\\"),
      '\n' => buf.push_str("\\n"),
      '\r' => buf.push_str("\\r"),
      '\t' => buf.push_str("\\t"),
      '\u{8}' => buf.push_str("\\b"),
      '\u{c}' => buf.push_str("\\f"),
      c if c < ' ' => buf.push_str(&format!("\\u{:04x}", c as u32)),
      c => buf.push(c),
    }
  }
  buf.push('"');
}
