//! Settings read from the shell-style config file (`KEY="value"` per line).

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::{ConfigSource, SourceError, parse};

static RE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?([A-Za-z_][A-Za-z0-9_]*)=(.*)$").unwrap()
});

/// Reads the config file on every lookup; nothing is cached.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSource for FileSource {
    fn kind(&self) -> &'static str {
        "file"
    }

    async fn lookup(&self, key: &str, _default: &str) -> Result<Option<String>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(find_assignment(&content, key))
    }

    fn parse_bool(&self, raw: &str) -> bool {
        parse::parse_lenient_bool(raw)
    }
}

/// Value of the last `key=...` assignment in `content`. Empty values count as unset.
pub fn find_assignment(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| RE_ASSIGNMENT.captures(line))
        .filter(|caps| &caps[1] == key)
        .map(|caps| unquote(&caps[2]))
        .last()
        .filter(|value| !value.is_empty())
}

fn unquote(raw: &str) -> String {
    let raw = raw.trim();
    for quote in ['"', '\''] {
        if let Some(rest) = raw.strip_prefix(quote) {
            let inner = rest.find(quote).map_or(rest, |end| &rest[..end]);
            return inner.to_string();
        }
    }
    // unquoted: the value ends at the first whitespace (trailing comments)
    raw.split_whitespace().next().unwrap_or_default().to_string()
}
