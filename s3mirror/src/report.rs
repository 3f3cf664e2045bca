use tracing::{debug, info, warn};

use s3mirror_core::config::DerivedConfig;
use s3mirror_core::credentials::{Credentials, AWS_ACCESS_KEY, AWS_SECRET_KEY};

/// Render a bucket and prefix back into a location string.
pub fn endpoint(bucket: &str, prefix: &str) -> String {
    format!("s3://{bucket}/{prefix}")
}

/// Log the configuration the mirror engine will run with.
pub fn report(derived: &DerivedConfig, credentials: &Credentials) {
    let options = derived.options();

    info!(
        source = %endpoint(derived.source_bucket(), derived.prefix()),
        destination = %endpoint(derived.destination_bucket(), derived.dest_prefix()),
        "mirror configured"
    );
    if let Some(max_age_date) = derived.max_age_date() {
        info!(cutoff = %max_age_date, "only objects modified since cutoff are considered");
    }
    info!(
        max_connections = options.max_connections,
        max_threads = options.max_threads,
        max_retries = options.max_retries,
        delete_removed = options.delete_removed,
        "limits"
    );
    if options.dry_run {
        info!("dry run, nothing will be copied or deleted");
    }
    debug!(now = %derived.now_time(), ?credentials, "derivation inputs");

    if !credentials.has_keys() {
        warn!("no credentials, set {AWS_ACCESS_KEY} and {AWS_SECRET_KEY} to authenticate");
    }
}
