pub type Result<T> = std::result::Result<T, Error>;

/// A parse failure and the byte offset into the input where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct Error {
  pub kind: ErrorKind,
  pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
  #[error("unexpected character {0:?}")]
  UnexpectedCharacter(char),

  #[error("unterminated string")]
  UnterminatedString,

  #[error("unexpected escape sequence \"\\{0}\"")]
  InvalidEscapeSequence(char),

  #[error("unbalanced braces")]
  UnbalancedBraces,

  #[error("nesting deeper than {0} levels")]
  NestingTooDeep(usize),
}

impl Error {
  pub fn new(kind: ErrorKind, offset: usize) -> Error {
    Error { kind, offset }
  }

  /// 1-based line and column of the error in `input`, columns counted in characters.
  pub fn location(&self, input: &str) -> (usize, usize) {
    let mut end = self.offset.min(input.len());
    while !input.is_char_boundary(end) {
      end -= 1;
    }
    let before = &input[..end];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
      Some(i) => before[i + 1..].chars().count() + 1,
      None => before.chars().count() + 1,
    };
    (line, column)
  }
}
