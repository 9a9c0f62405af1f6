use snafu::Snafu;

/// The `BadQuery` error family from spec.md §7: recoverable, returned
/// synchronously before any database work.
#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(context(suffix(false)))]
pub enum Error {
    #[snafu(display("query is too long: {len} code points (limit 100)"))]
    QueryTooLong { len: usize },

    #[snafu(display("query contains no permitted characters"))]
    InvalidCharacters,
}
