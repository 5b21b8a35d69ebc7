use serde::Serialize;

use crate::error::{EnvResult, ErrorKind};

/// Flat form of an accessor outcome for callers outside Rust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Report {
    fn ok(value: Option<String>) -> Self {
        Self {
            ok: true,
            value,
            kind: None,
            message: None,
        }
    }
}

impl From<EnvResult<String>> for Report {
    fn from(result: EnvResult<String>) -> Self {
        match result {
            Ok(value) => Report::ok(Some(value)),
            Err(e) => Report::from(Err::<(), _>(e)),
        }
    }
}

impl From<EnvResult<()>> for Report {
    fn from(result: EnvResult<()>) -> Self {
        match result {
            Ok(()) => Report::ok(None),
            Err(e) => Report {
                ok: false,
                value: None,
                kind: Some(e.kind()),
                message: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvError;
    use crate::runtime::Runtime;

    #[test]
    fn test_value_report() {
        let result: EnvResult<String> = Ok("abc123".to_string());
        let report = Report::from(result);
        insta::assert_snapshot!(serde_json::to_string(&report).unwrap(), @r#"{"ok":true,"value":"abc123"}"#);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let result: EnvResult<String> = Ok(String::new());
        let report = Report::from(result);
        assert_eq!(report.value.as_deref(), Some(""));
        insta::assert_snapshot!(serde_json::to_string(&report).unwrap(), @r#"{"ok":true,"value":""}"#);
    }

    #[test]
    fn test_unit_report() {
        let result: EnvResult<()> = Ok(());
        let report = Report::from(result);
        insta::assert_snapshot!(serde_json::to_string(&report).unwrap(), @r#"{"ok":true}"#);
    }

    #[test]
    fn test_failure_report() {
        let result: EnvResult<String> = Err(EnvError::KeyNotFound {
            key: "API_TOKEN_X".to_string(),
        });
        let report = Report::from(result);
        insta::assert_snapshot!(serde_json::to_string(&report).unwrap(), @r#"{"ok":false,"kind":"key_not_found","message":"key not found: API_TOKEN_X"}"#);

        let result: EnvResult<()> = Err(EnvError::UnsupportedRuntime {
            runtime: Runtime::Browser,
        });
        let report = Report::from(result);
        assert!(!report.ok);
        assert_eq!(report.kind, Some(ErrorKind::UnsupportedRuntime));
        assert_eq!(report.message.as_deref(), Some("unsupported runtime: browser"));
    }
}
