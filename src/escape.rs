use crate::{
  error::{Error, ErrorKind::*, Result},
  lexer::Lexer,
};
use std::borrow::Cow;

/// Reads a string value up to an unescaped `delimiter`, resolving `\n`, `\t`,
/// `\\` and `\"`. The opening delimiter must already be consumed.
///
/// Values without escapes are borrowed from the input.
pub fn decode_until<'a>(lexer: &mut Lexer<'a>, delimiter: char) -> Result<Cow<'a, str>> {
  let open = lexer.offset().saturating_sub(delimiter.len_utf8());
  let start = lexer.offset();
  let mut decoded: Option<String> = None;

  loop {
    let end = lexer.offset();
    match lexer.next() {
      None => return Err(Error::new(UnterminatedString, open)),
      Some('\\') => {
        let escaped = match lexer.next() {
          Some('n') => '\n',
          Some('t') => '\t',
          Some(c @ ('\\' | '"')) => c,
          Some(c) => return Err(Error::new(InvalidEscapeSequence(c), end)),
          None => return Err(Error::new(UnterminatedString, open)),
        };
        decoded
          .get_or_insert_with(|| lexer.slice(start, end).to_owned())
          .push(escaped);
      }
      Some(c) if c == delimiter => {
        return Ok(match decoded {
          Some(s) => Cow::Owned(s),
          None => Cow::Borrowed(lexer.slice(start, end)),
        });
      }
      Some(c) => {
        if let Some(s) = decoded.as_mut() {
          s.push(c);
        }
      }
    }
  }
}
