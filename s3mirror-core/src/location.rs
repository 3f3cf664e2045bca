/// Scheme marker accepted in front of a location.
pub const S3_PROTOCOL_PREFIX: &str = "s3://";

/// A location string split into its bucket and embedded key prefix.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Location<'a> {
    pub bucket: &'a str,
    /// Text after the first `/`, if any. May be empty, e.g. for `bucket/`.
    pub prefix: Option<&'a str>,
}

/// Split `[s3://]bucket[/prefix]` into bucket and embedded prefix.
///
/// Never fails. Bucket names are not checked for legality here.
#[must_use]
pub fn decompose(location: &str) -> Location<'_> {
    let scrubbed = scrub_protocol_prefix(location);
    match scrubbed.split_once('/') {
        Some((bucket, prefix)) => Location {
            bucket,
            prefix: Some(prefix),
        },
        None => Location {
            bucket: scrubbed,
            prefix: None,
        },
    }
}

fn scrub_protocol_prefix(location: &str) -> &str {
    let trimmed = location.trim();
    trimmed
        .strip_prefix(S3_PROTOCOL_PREFIX)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use proptest::prop_assert_eq;
    use rstest::rstest;
    use test_strategy::proptest;

    use crate::tests::{arb_bucket, arb_prefix};

    use super::{decompose, Location};

    #[rstest]
    #[case("s3://bucket/a/b", "bucket", Some("a/b"))]
    #[case("bucket", "bucket", None)]
    #[case("s3://bucket", "bucket", None)]
    #[case("  s3://bucket/logs  ", "bucket", Some("logs"))]
    #[case("bucket/", "bucket", Some(""))]
    #[case("s3://", "", None)]
    #[case("/key", "", Some("key"))]
    #[case("S3://bucket", "S3:", Some("/bucket"))]
    #[case("s3://s3://bucket", "s3:", Some("/bucket"))]
    #[case("gs://bucket/x", "gs:", Some("/bucket/x"))]
    fn must_decompose(
        #[case] input: &str,
        #[case] bucket: &str,
        #[case] prefix: Option<&str>,
    ) {
        assert_eq!(decompose(input), Location { bucket, prefix });
    }

    #[proptest]
    fn must_split_at_first_separator(
        #[strategy(arb_bucket())] bucket: String,
        #[strategy(arb_prefix())] prefix: String,
        with_scheme: bool,
    ) {
        let scheme = if with_scheme { "s3://" } else { "" };
        let input = format!("{scheme}{bucket}/{prefix}");
        let location = decompose(&input);
        prop_assert_eq!(location.bucket, bucket.as_str());
        prop_assert_eq!(location.prefix, Some(prefix.as_str()));
    }

    #[proptest]
    fn must_be_idempotent_on_bucket(
        #[strategy(arb_bucket())] bucket: String,
        #[strategy(proptest::option::of(arb_prefix()))] prefix: Option<String>,
    ) {
        let input = match &prefix {
            Some(prefix) => format!("s3://{bucket}/{prefix}"),
            None => format!("s3://{bucket}"),
        };
        let first = decompose(&input);
        let second = decompose(first.bucket);
        prop_assert_eq!(second.bucket, first.bucket);
        prop_assert_eq!(second.prefix, None);
    }
}
