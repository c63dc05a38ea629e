//! Error types for tree mutations.

use thiserror::Error;

/// The error returned by [`Tree::insert`](crate::Tree::insert) when the tree
/// already contains the value being inserted.
///
/// Values in a [`Tree`](crate::Tree) are unique, so a duplicate insert is a
/// no-op on the structure and is reported through this type instead of
/// overwriting anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("value is already present in the tree")]
pub struct DuplicateValue;
