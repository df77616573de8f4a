use crate::node::Node::{self, Array, Object};
use std::mem;

impl<'a> Node<'a> {
  /// Rewrites every nested object keyed `"0"` to `"n-1"` whose values are all
  /// objects into an array ordered by key. The node itself is never converted,
  /// and arrays are copied through as they are.
  pub fn normalize(self) -> Node<'a> {
    match self {
      Object(xs) => Object(
        xs.into_iter()
          .map(|(key, x)| (key, x.normalize_value()))
          .collect(),
      ),
      x => x,
    }
  }

  fn normalize_value(self) -> Node<'a> {
    match self {
      Object(xs) => match array_indices(&xs) {
        Some(indices) => {
          let mut items: Vec<_> = indices.into_iter().zip(xs).collect();
          items.sort_by_key(|(i, _)| *i);
          Array(items.into_iter().map(|(_, (_, x))| x.normalize()).collect())
        }
        None => Object(xs).normalize(),
      },
      x => x,
    }
  }
}

/// The array position of each entry, if the keys are exactly `0..len` in some
/// order and every value is an object.
fn array_indices(xs: &[(&str, Node)]) -> Option<Vec<usize>> {
  let len = xs.len();
  let mut seen = vec![false; len];
  xs.iter()
    .map(|(key, x)| {
      if !x.is_object() {
        return None;
      }
      let i = key.parse::<usize>().ok().filter(|i| *i < len)?;
      if mem::replace(&mut seen[i], true) {
        return None;
      }
      Some(i)
    })
    .collect()
}
