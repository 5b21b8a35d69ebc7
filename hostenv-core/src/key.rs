use std::fmt::{Display, Formatter};
use std::ops::Deref;

use crate::error::{EnvError, EnvResult};

/// Whitespace as `String.prototype.trim` sees it: Unicode White_Space plus
/// U+FEFF, minus U+0085.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// A key with surrounding whitespace removed, guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvKey(String);

impl EnvKey {
    pub fn parse<T: AsRef<str>>(raw: T) -> EnvResult<Self> {
        let trimmed = raw.as_ref().trim_matches(is_js_whitespace);
        if trimmed.is_empty() {
            return Err(EnvError::MissingKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for EnvKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for EnvKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims() {
        let key = EnvKey::parse("  API_TOKEN\t\n").unwrap();
        assert_eq!(&*key, "API_TOKEN");
    }

    #[test]
    fn test_trims_like_javascript() {
        let key = EnvKey::parse("\u{FEFF}API_TOKEN\u{00A0}\u{2028}").unwrap();
        assert_eq!(&*key, "API_TOKEN");

        let key = EnvKey::parse("\u{0085}API_TOKEN\u{0085}").unwrap();
        assert_eq!(&*key, "\u{0085}API_TOKEN\u{0085}");

        assert_eq!(EnvKey::parse("\u{FEFF} \u{3000}"), Err(EnvError::MissingKey));
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        let key = EnvKey::parse(" MY KEY ").unwrap();
        assert_eq!(&*key, "MY KEY");
    }

    #[test]
    fn test_empty_is_missing() {
        assert_eq!(EnvKey::parse(""), Err(EnvError::MissingKey));
        assert_eq!(EnvKey::parse("   "), Err(EnvError::MissingKey));
        assert_eq!(EnvKey::parse("\t\r\n"), Err(EnvError::MissingKey));
    }
}
