use super::errors::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Which records a reply carries for a given query type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerPolicy {
    /// `A` queries get the A record, every other type gets the AAAA record.
    #[default]
    MatchQueryType,
    /// Every reply carries both the A and the AAAA record.
    Both,
}

impl AnswerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerPolicy::MatchQueryType => "matched",
            AnswerPolicy::Both => "both",
        }
    }
}

impl fmt::Display for AnswerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "matched" | "match" => Ok(AnswerPolicy::MatchQueryType),
            "both" => Ok(AnswerPolicy::Both),
            _ => Err(ConfigError::UnknownAnswerPolicy(s.to_string())),
        }
    }
}
