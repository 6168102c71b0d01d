//! Application configuration management

use std::env;
use std::net::IpAddr;

use anyhow::{Context, Result, anyhow};

use crate::db::AuthorBooksJoin;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Console log format
    pub log_format: LogFormat,

    /// Matching rule for `Author.books`
    pub author_books_join: AuthorBooksJoin,

    /// Serve the GraphiQL page on GET /graphql
    pub graphiql: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_format = lookup("LOG_FORMAT").unwrap_or_else(|| "json".to_string());
        let join = lookup("AUTHOR_BOOKS_JOIN").unwrap_or_else(|| "legacy".to_string());

        Ok(Self {
            host: lookup("HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .context("Invalid HOST")?,

            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("Invalid PORT")?,

            log_format: LogFormat::from_setting(&log_format)
                .ok_or_else(|| anyhow!("Invalid LOG_FORMAT: {log_format}"))?,

            author_books_join: AuthorBooksJoin::from_setting(&join)
                .ok_or_else(|| anyhow!("Invalid AUTHOR_BOOKS_JOIN: {join}"))?,

            graphiql: lookup("GRAPHIQL")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::Ipv4Addr;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.author_books_join, AuthorBooksJoin::Legacy);
        assert!(config.graphiql);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("LOG_FORMAT", "pretty"),
            ("AUTHOR_BOOKS_JOIN", "author_id"),
            ("GRAPHIQL", "0"),
        ])
        .unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8081);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.author_books_join, AuthorBooksJoin::AuthorId);
        assert!(!config.graphiql);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_matches!(load(&[("PORT", "five thousand")]), Err(_));
        assert_matches!(load(&[("HOST", "localhost:5000")]), Err(_));
        assert_matches!(load(&[("LOG_FORMAT", "xml")]), Err(_));

        let err = load(&[("AUTHOR_BOOKS_JOIN", "fixed")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid AUTHOR_BOOKS_JOIN: fixed");
    }
}
