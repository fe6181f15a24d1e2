//! HTTP method tokens accepted by the route table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of method tokens a route can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Every supported method, in alphabetical order.
    pub const ALL: [Method; 9] = [
        Method::Connect,
        Method::Delete,
        Method::Get,
        Method::Head,
        Method::Options,
        Method::Patch,
        Method::Post,
        Method::Put,
        Method::Trace,
    ];

    /// The upper-case wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Connect => "CONNECT",
            Method::Delete => "DELETE",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string is not one of the supported method tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported HTTP method: {0}")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>(), Ok(Method::Get));
        assert_eq!("Options".parse::<Method>(), Ok(Method::Options));
        assert_eq!("TRACE".parse::<Method>(), Ok(Method::Trace));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "FETCH".parse::<Method>().unwrap_err();
        assert_eq!(err, ParseMethodError("FETCH".into()));
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_display_matches_token() {
        for method in Method::ALL {
            assert_eq!(method.to_string(), method.as_str());
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
        }
        assert_eq!(format!("{:<7}|", Method::Get), "GET    |");
    }

    #[test]
    fn test_serde_uses_upper_case_token() {
        let json = serde_json::to_string(&Method::Patch).unwrap();
        assert_eq!(json, "\"PATCH\"");
        let decoded: Method = serde_json::from_str("\"DELETE\"").unwrap();
        assert_eq!(decoded, Method::Delete);
    }
}
