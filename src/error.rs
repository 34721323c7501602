use thiserror::Error;

/// Errors reported by [`Tree`][crate::Tree] operations that remove keys.
///
/// Inserting a key that is already present is not an error: the insert is a no-op and
/// [`Tree::insert`][crate::Tree::insert] reports it by returning `false`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// No node in the tree holds the requested key.
    #[error("key not found in tree")]
    NotFound,
    /// The tree has no root.
    #[error("cannot delete from an empty tree")]
    EmptyTree,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
