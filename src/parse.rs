use crate::{
  error::{Error, ErrorKind::*, Result},
  escape::decode_until,
  lexer::Lexer,
  node::Node::{self, Object, Value},
};
use indexmap::IndexMap;

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
  /// Rewrite objects keyed `"0"` to `"n-1"` as arrays.
  pub convert_arrays: bool,
  /// Levels of nested objects accepted below the root.
  pub max_depth: usize,
}

impl Default for Options {
  fn default() -> Self {
    Options {
      convert_arrays: false,
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }
}

/// Parses a VDF document into an `Object` node.
pub fn parse(input: &str) -> Result<Node> {
  parse_with(input, false)
}

/// Parses a VDF document, optionally converting VDF-style arrays.
pub fn parse_with(input: &str, convert_arrays: bool) -> Result<Node> {
  parse_with_options(
    input,
    &Options {
      convert_arrays,
      ..Options::default()
    },
  )
}

pub fn parse_with_options<'a>(input: &'a str, options: &Options) -> Result<Node<'a>> {
  let mut parser = Parser {
    lexer: Lexer::new(input),
    max_depth: options.max_depth,
  };
  let root = Object(parser.object(0, None)?.into_iter().collect());
  if options.convert_arrays {
    Ok(root.normalize())
  } else {
    Ok(root)
  }
}

/// Entries of one object. Inserting a repeated key keeps the first position
/// and takes the new value.
type Entries<'a> = IndexMap<&'a str, Node<'a>>;

struct Parser<'a> {
  lexer: Lexer<'a>,
  max_depth: usize,
}

impl<'a> Parser<'a> {
  /// Reads entries until the `}` closing the brace at `open`. The root has no
  /// brace and ends with the input, or with a `}` of its own.
  fn object(&mut self, depth: usize, open: Option<usize>) -> Result<Entries<'a>> {
    let mut xs = IndexMap::new();
    loop {
      match self.lexer.next_clean() {
        Some('"') => self.entry(&mut xs, depth)?,
        Some('}') => return Ok(xs),
        // A document wrapped in braces.
        Some('{') if open.is_none() => {
          let open = self.lexer.offset() - 1;
          xs.extend(self.object(depth, Some(open))?);
        }
        Some('\0') => {}
        Some('/') => self.comment()?,
        Some(c) => {
          self.lexer.back();
          return Err(self.lexer.error(UnexpectedCharacter(c)));
        }
        None => {
          return match open {
            Some(offset) => Err(Error::new(UnbalancedBraces, offset)),
            None => Ok(xs),
          }
        }
      }
    }
  }

  /// Reads the value following a key whose opening quote was just consumed.
  fn entry(&mut self, xs: &mut Entries<'a>, depth: usize) -> Result<()> {
    let open = self.lexer.offset() - 1;
    let key = self
      .lexer
      .next_string('"')
      .ok_or(Error::new(UnterminatedString, open))?;

    loop {
      match self.lexer.next_clean() {
        Some('/') => self.comment()?,
        Some('"') => {
          let value = decode_until(&mut self.lexer, '"')?;
          xs.insert(key, Value(value));
          return Ok(());
        }
        Some('{') => {
          let x = self.nested(depth)?;
          xs.insert(key, Object(x.into_iter().collect()));
          return Ok(());
        }
        Some('}') => {
          self.lexer.back();
          return Err(self.lexer.error(UnexpectedCharacter('}')));
        }
        // Bracketed conditionals such as `[$WIN32]` are not supported; the key is dropped.
        _ => return Ok(()),
      }
    }
  }

  fn nested(&mut self, depth: usize) -> Result<Entries<'a>> {
    let open = self.lexer.offset() - 1;
    if depth >= self.max_depth {
      return Err(Error::new(NestingTooDeep(self.max_depth), open));
    }
    self.object(depth + 1, Some(open))
  }

  /// Skips a `//` comment after its first slash.
  fn comment(&mut self) -> Result<()> {
    let slash = self.lexer.offset() - 1;
    match self.lexer.next() {
      Some('/') => {
        self.lexer.skip_to('\n');
        Ok(())
      }
      _ => Err(Error::new(UnexpectedCharacter('/'), slash)),
    }
  }
}
