/// Errors reported by [`OrderedMap`](crate::OrderedMap) operations.
///
/// Lookups that find nothing return `None` rather than an error; this type is
/// reserved for operations that cannot start at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation needs at least one entry but the map was empty.
    ///
    /// The map is left untouched.
    #[error("`{operation}` called on an empty map")]
    EmptyContainer {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
