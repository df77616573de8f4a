use crate::error::{Error, ErrorKind};
use nom::{
  branch::alt,
  bytes::complete::{take_till, take_while},
  character::complete::{anychar, char},
  combinator::{recognize, rest},
  sequence::terminated,
  IResult,
};

type Scan<'a, O> = IResult<&'a str, O, nom::error::Error<&'a str>>;

/// Character cursor over VDF text with one character of pushback.
pub struct Lexer<'a> {
  input: &'a str,
  rest: &'a str,
  last: Option<&'a str>,
}

impl<'a> Lexer<'a> {
  pub fn new(input: &'a str) -> Lexer<'a> {
    Lexer {
      input,
      rest: input,
      last: None,
    }
  }

  pub fn offset(&self) -> usize {
    self.input.len() - self.rest.len()
  }

  pub fn error(&self, kind: ErrorKind) -> Error {
    Error::new(kind, self.offset())
  }

  pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
    &self.input[start..end]
  }

  pub fn peek(&self) -> Option<char> {
    self.rest.chars().next()
  }

  pub fn next(&mut self) -> Option<char> {
    let before = self.rest;
    let c = self.advance(anychar)?;
    self.last = Some(before);
    Some(c)
  }

  /// Skips whitespace and returns the character after it.
  pub fn next_clean(&mut self) -> Option<char> {
    self.advance(take_while(is_space));
    self.next()
  }

  /// Steps back over the character last returned by `next` or `next_clean`.
  pub fn back(&mut self) {
    if let Some(last) = self.last.take() {
      self.rest = last;
    }
  }

  /// Reads up to and including `quote`, returning the text before it as is.
  pub fn next_string(&mut self, quote: char) -> Option<&'a str> {
    self.advance(terminated(take_till(move |c: char| c == quote), char(quote)))
  }

  /// Skips past the next `c`, or to the end of input if there is none.
  pub fn skip_to(&mut self, c: char) {
    self.advance(alt((
      recognize(terminated(take_till(move |x: char| x == c), char(c))),
      rest,
    )));
  }

  fn advance<O>(&mut self, mut scan: impl FnMut(&'a str) -> Scan<'a, O>) -> Option<O> {
    match scan(self.rest) {
      Ok((rest, output)) => {
        self.rest = rest;
        self.last = None;
        Some(output)
      }
      Err(_) => None,
    }
  }
}

fn is_space(c: char) -> bool {
  c.is_whitespace() || (c != '\0' && c < ' ')
}

#[cfg(test)]
mod tests {
  use super::Lexer;

  #[test]
  fn next_clean() {
    let tests = vec![
      ("", vec![]),
      ("a", vec![(0, 'a')]),
      (" \t\r\n{ }", vec![(4, '{'), (6, '}')]),
      ("\u{1}x", vec![(1, 'x')]),
      ("\0 \0", vec![(0, '\0'), (2, '\0')]),
      ("é é", vec![(0, 'é'), (3, 'é')]),
    ];
    for (input, expected) in tests {
      let mut lexer = Lexer::new(input);
      let mut actual = Vec::new();
      while let Some(c) = lexer.next_clean() {
        actual.push((lexer.offset() - c.len_utf8(), c));
      }
      assert_eq!(actual, expected, "\n input: `{}`\n", input.escape_debug());
    }
  }

  #[test]
  fn back() {
    let mut lexer = Lexer::new("ab");
    assert_eq!(lexer.next(), Some('a'));
    lexer.back();
    assert_eq!(lexer.offset(), 0);
    assert_eq!(lexer.peek(), Some('a'));

    lexer.back();
    assert_eq!(lexer.offset(), 0);

    assert_eq!(lexer.next_clean(), Some('a'));
    assert_eq!(lexer.next_string('"'), None);
    assert_eq!(lexer.offset(), 1);
    lexer.back();
    assert_eq!(lexer.offset(), 0);

    assert_eq!(lexer.next(), Some('a'));
    assert_eq!(lexer.next_string('b'), Some(""));
    lexer.back();
    assert_eq!(lexer.offset(), 2);
  }

  #[test]
  fn next_string() {
    let tests = vec![
      ("\"", Some(""), 1),
      ("abc\" rest", Some("abc"), 4),
      ("a\\\"b", Some("a\\"), 3),
      ("a b\nc\"", Some("a b\nc"), 6),
      ("unterminated", None, 0),
    ];
    for (input, expected, offset) in tests {
      let mut lexer = Lexer::new(input);
      assert_eq!(lexer.next_string('"'), expected, "\n input: `{}`\n", input);
      assert_eq!(lexer.offset(), offset, "\n input: `{}`\n", input);
    }
  }

  #[test]
  fn skip_to() {
    let tests = vec![
      (" comment\nnext", 9, Some('n')),
      ("\n", 1, None),
      (" comment at the end", 19, None),
      ("", 0, None),
    ];
    for (input, offset, peek) in tests {
      let mut lexer = Lexer::new(input);
      lexer.skip_to('\n');
      assert_eq!(lexer.offset(), offset, "\n input: `{}`\n", input.escape_debug());
      assert_eq!(lexer.peek(), peek);
    }
  }
}
