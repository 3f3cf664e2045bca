use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use eyre::bail;

/// Log format.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LogFormat {
    /// Format log in human readable format.
    Human,
    /// Format log in JSON format.
    JSON,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::JSON => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> eyre::Result<Self> {
        Ok(match s.to_lowercase().as_str() {
            "human" => Self::Human,
            "json" => Self::JSON,
            _ => bail!("invalid log format: {}", s),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::LogFormat;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("JSON", LogFormat::JSON)]
    #[case("json", LogFormat::JSON)]
    fn must_parse(#[case] input: &str, #[case] expected: LogFormat) {
        assert_eq!(input.parse::<LogFormat>().expect("parse"), expected);
    }

    #[test]
    fn must_reject_unknown() {
        let err = "yaml".parse::<LogFormat>().unwrap_err();
        assert_eq!(err.to_string(), "invalid log format: yaml");
    }
}
