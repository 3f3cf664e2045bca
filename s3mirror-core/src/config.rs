//! Raw mirror options and the derived configuration handed to the engine.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::age;
use crate::error::{ConfigError, Side};
use crate::location::{decompose, Location};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 100;
pub const DEFAULT_MAX_THREADS: u32 = 100;
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Scalar options passed through to the engine untouched.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MirrorOptions {
    /// Size of the connection pool.
    pub max_connections: u32,
    /// Number of worker threads.
    pub max_threads: u32,
    /// Retry cap per request.
    pub max_retries: u32,
    /// Report what would be done without doing it.
    pub dry_run: bool,
    pub verbose: bool,
    /// Delete destination objects that no longer exist in the source.
    pub delete_removed: bool,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_threads: DEFAULT_MAX_THREADS,
            max_retries: DEFAULT_MAX_RETRIES,
            dry_run: false,
            verbose: false,
            delete_removed: false,
        }
    }
}

/// Options as captured from the command line, before any validation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RawConfig {
    /// `[s3://]bucket[/prefix]`
    pub source: String,
    /// `[s3://]bucket[/prefix]`
    pub destination: String,
    pub prefix: Option<String>,
    pub dest_prefix: Option<String>,
    /// Relative age expression, see [`crate::age`].
    pub ctime: Option<String>,
    pub options: MirrorOptions,
}

impl RawConfig {
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            prefix: None,
            dest_prefix: None,
            ctime: None,
            options: MirrorOptions::default(),
        }
    }

    /// Derive against the current time, sampled once.
    ///
    /// # Errors
    /// See [`RawConfig::derive`].
    pub fn derive_now(&self) -> Result<DerivedConfig, ConfigError> {
        self.derive(Utc::now())
    }

    /// Validate the raw options and compute the derived configuration.
    ///
    /// `now` is the reference instant for the ctime cutoff. The same inputs
    /// always produce the same output.
    ///
    /// # Errors
    /// Returns an error if the ctime expression is malformed, or if a prefix flag
    /// is combined with a location that already embeds a prefix.
    pub fn derive(&self, now: DateTime<Utc>) -> Result<DerivedConfig, ConfigError> {
        let max_age = self
            .ctime
            .as_deref()
            .filter(|ctime| !ctime.is_empty())
            .map(|ctime| age::resolve(ctime, now))
            .transpose()?;
        let max_age_date = max_age.map(|max_age| max_age.to_rfc3339_opts(SecondsFormat::Secs, true));

        let (source_bucket, prefix) =
            resolve_side(Side::Source, &self.source, self.prefix.as_deref())?;
        let (destination_bucket, dest_prefix) = resolve_side(
            Side::Destination,
            &self.destination,
            self.dest_prefix.as_deref(),
        )?;

        debug!(
            %source_bucket, %prefix, %destination_bucket, %dest_prefix, ?max_age_date,
            "derived mirror configuration"
        );

        Ok(DerivedConfig {
            source_bucket,
            destination_bucket,
            prefix,
            dest_prefix,
            max_age,
            max_age_date,
            now_time: now,
            options: self.options,
        })
    }
}

/// Split a location and reconcile its embedded prefix with the explicit flag.
///
/// An empty explicit prefix counts as not given.
fn resolve_side(
    side: Side,
    location: &str,
    explicit_prefix: Option<&str>,
) -> Result<(String, String), ConfigError> {
    let Location {
        bucket,
        prefix: embedded_prefix,
    } = decompose(location);
    let explicit_prefix = explicit_prefix.filter(|prefix| !prefix.is_empty());

    let prefix = match (embedded_prefix, explicit_prefix) {
        (Some(_), Some(_)) => return Err(ConfigError::PrefixConflict { side }),
        (Some(prefix), None) | (None, Some(prefix)) => prefix,
        (None, None) => "",
    };

    if bucket.is_empty() {
        return Err(ConfigError::EmptyBucket {
            side,
            location: location.to_string(),
        });
    }

    Ok((bucket.to_string(), prefix.to_string()))
}

/// Validated configuration consumed by the mirror engine. Read-only once built.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DerivedConfig {
    source_bucket: String,
    destination_bucket: String,
    prefix: String,
    dest_prefix: String,
    max_age: Option<DateTime<Utc>>,
    max_age_date: Option<String>,
    now_time: DateTime<Utc>,
    options: MirrorOptions,
}

impl DerivedConfig {
    #[must_use]
    pub fn source_bucket(&self) -> &str {
        &self.source_bucket
    }

    #[must_use]
    pub fn destination_bucket(&self) -> &str {
        &self.destination_bucket
    }

    /// Source key prefix. Empty if none.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Destination key prefix. Empty if none.
    #[must_use]
    pub fn dest_prefix(&self) -> &str {
        &self.dest_prefix
    }

    #[must_use]
    pub fn has_prefix(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// Length of the source prefix in bytes, used to rewrite keys for the destination.
    #[must_use]
    pub fn prefix_len(&self) -> usize {
        self.prefix.len()
    }

    #[must_use]
    pub fn has_dest_prefix(&self) -> bool {
        !self.dest_prefix.is_empty()
    }

    #[must_use]
    pub fn dest_prefix_len(&self) -> usize {
        self.dest_prefix.len()
    }

    /// Objects last modified before this instant are skipped.
    #[must_use]
    pub const fn max_age(&self) -> Option<DateTime<Utc>> {
        self.max_age
    }

    #[must_use]
    pub const fn has_max_age(&self) -> bool {
        self.max_age.is_some()
    }

    /// RFC 3339 rendering of [`DerivedConfig::max_age`].
    #[must_use]
    pub fn max_age_date(&self) -> Option<&str> {
        self.max_age_date.as_deref()
    }

    /// Reference instant the cutoff was computed from.
    #[must_use]
    pub const fn now_time(&self) -> DateTime<Utc> {
        self.now_time
    }

    #[must_use]
    pub const fn options(&self) -> &MirrorOptions {
        &self.options
    }

    /// Whether an object last modified at `last_modified` passes the age filter.
    ///
    /// Always true without a ctime. Objects modified exactly at the cutoff pass.
    #[must_use]
    pub fn is_within_age(&self, last_modified: DateTime<Utc>) -> bool {
        self.max_age
            .map_or(true, |max_age| last_modified >= max_age)
    }
}
