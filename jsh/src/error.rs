use snafu::Snafu;

/// Unifies `jsh_ja`'s `BadQuery` family, `jsh_db`'s `NotReady`/
/// `Corruption`/`QueryFailed` family, and `jsh_rank`'s configuration
/// errors into the single error type the facade exposes (spec.md §7).
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum Error {
    #[snafu(display("{source}"))]
    BadQuery { source: jsh_ja::Error },

    #[snafu(display("{source}"))]
    Database { source: jsh_db::Error },

    #[snafu(display("{source}"))]
    Configuration { source: jsh_rank::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
