use std::borrow::Cow;

/// A parsed VDF tree. Keys borrow the raw source text; string values hold
/// decoded text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
  Object(Vec<(&'a str, Node<'a>)>),
  Array(Vec<Node<'a>>),
  Value(Cow<'a, str>),
}

impl<'a> Node<'a> {
  pub fn get(&self, key: &str) -> Option<&Node<'a>> {
    match self {
      Node::Object(xs) => xs.iter().find(|(k, _)| *k == key).map(|(_, x)| x),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Node::Value(x) => Some(x.as_ref()),
      _ => None,
    }
  }

  pub fn is_object(&self) -> bool {
    matches!(self, Node::Object(_))
  }
}
