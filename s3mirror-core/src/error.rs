use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Which end of the mirror a location belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Side {
    Source,
    Destination,
}

impl Side {
    /// The prefix flag that may not be combined with an embedded prefix on this side.
    #[must_use]
    pub const fn prefix_flag(self) -> &'static str {
        match self {
            Self::Source => "-p/--prefix",
            Self::Destination => "-d/--dest-prefix",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Configuration rejected before the mirror starts.
///
/// Every variant is an invalid argument supplied by the user. Nothing here is
/// retryable.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid option for ctime: {expr}")]
    InvalidCtime { expr: String },
    #[error("ctime out of range: {expr}")]
    CtimeOutOfRange { expr: String },
    #[error(
        "cannot use a {} argument and a {side} path that includes a prefix at the same time",
        .side.prefix_flag()
    )]
    PrefixConflict { side: Side },
    #[error("{side} location has an empty bucket name: {location:?}")]
    EmptyBucket { side: Side, location: String },
}

impl ConfigError {
    /// Whether the error was caused by a bad command line argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidCtime { .. }
                | Self::CtimeOutOfRange { .. }
                | Self::PrefixConflict { .. }
                | Self::EmptyBucket { .. }
        )
    }
}
