use clap::Parser;

use s3mirror_core::config::{
    MirrorOptions, RawConfig, DEFAULT_MAX_CONNECTIONS, DEFAULT_MAX_RETRIES, DEFAULT_MAX_THREADS,
};
use s3mirror_core::credentials::{Credentials, AWS_ACCESS_KEY, AWS_SECRET_KEY};
use s3mirror_core::logging::LogFormat;

/// Mirror objects from one S3 bucket to another.
#[derive(Parser)]
#[clap(version)]
pub struct Opts {
    /// Do not actually do anything, but show what would be done.
    #[clap(short = 'n', long)]
    pub dry_run: bool,
    /// Verbose output.
    #[clap(short, long)]
    pub verbose: bool,
    /// Only copy objects whose keys start with this prefix.
    #[clap(short, long)]
    pub prefix: Option<String>,
    /// Destination prefix (replacing the one specified in --prefix, if any).
    #[clap(short, long)]
    pub dest_prefix: Option<String>,
    /// Maximum number of connections to S3.
    #[clap(short = 'm', long, default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: u32,
    /// Maximum number of threads.
    #[clap(short = 't', long, default_value_t = DEFAULT_MAX_THREADS,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub max_threads: u32,
    /// Maximum number of retries for S3 requests.
    #[clap(short = 'r', long, default_value_t = DEFAULT_MAX_RETRIES,
        value_parser = clap::value_parser!(u32).range(1..))]
    pub max_retries: u32,
    /// Only copy objects whose Last-Modified date is younger than this many days.
    /// For other time units, use these suffixes: y (years), M (months), d (days),
    /// w (weeks), h (hours), m (minutes), s (seconds).
    /// Note that lowercase m is minutes and uppercase M is months.
    #[clap(short, long)]
    pub ctime: Option<String>,
    /// Delete objects from the destination bucket if they do not exist in the source bucket.
    #[clap(short = 'X', long)]
    pub delete_removed: bool,
    /// Log format. (human, json)
    #[clap(long, default_value = "human")]
    pub log_format: LogFormat,
    /// S3 access key id.
    #[clap(long, env = AWS_ACCESS_KEY, hide_env_values = true)]
    pub aws_access_key_id: Option<String>,
    /// S3 secret access key.
    #[clap(long, env = AWS_SECRET_KEY, hide_env_values = true)]
    pub aws_secret_access_key: Option<String>,
    /// Source bucket[/source/prefix], optionally prefixed with s3://.
    pub source: String,
    /// Destination bucket[/dest/prefix], optionally prefixed with s3://.
    pub destination: String,
}

impl From<&Opts> for MirrorOptions {
    fn from(opts: &Opts) -> Self {
        Self {
            max_connections: opts.max_connections,
            max_threads: opts.max_threads,
            max_retries: opts.max_retries,
            dry_run: opts.dry_run,
            verbose: opts.verbose,
            delete_removed: opts.delete_removed,
        }
    }
}

impl From<&Opts> for RawConfig {
    fn from(opts: &Opts) -> Self {
        Self {
            source: opts.source.clone(),
            destination: opts.destination.clone(),
            prefix: opts.prefix.clone(),
            dest_prefix: opts.dest_prefix.clone(),
            ctime: opts.ctime.clone(),
            options: MirrorOptions::from(opts),
        }
    }
}

impl From<&Opts> for Credentials {
    fn from(opts: &Opts) -> Self {
        Self::new(
            opts.aws_access_key_id.clone(),
            opts.aws_secret_access_key.clone(),
        )
    }
}
