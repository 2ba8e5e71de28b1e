use thiserror::Error;

use crate::domains::request::RequestKind;

#[derive(Debug, Error)]
pub enum MeowError {
    #[error("failed to read request body: {0}")]
    ReadFailure(#[source] std::io::Error),
    #[error("malformed envelope: {}", describe(.0))]
    MalformedEnvelope(#[source] serde_json::Error),
    #[error("message of unknown type: {0:?}")]
    UnknownVariant(String),
    #[error("malformed {kind} payload: {}", describe(.source))]
    MalformedPayload {
        kind: RequestKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("configuration error: {0}")]
    Config(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl MeowError {
    pub fn kind(&self) -> &'static str {
        match self {
            MeowError::ReadFailure(_) => "read_failure",
            MeowError::MalformedEnvelope(_) => "malformed_envelope",
            MeowError::UnknownVariant(_) => "unknown_variant",
            MeowError::MalformedPayload { .. } => "malformed_payload",
            MeowError::Config(_) => "config",
            MeowError::Runtime(_) => "runtime",
        }
    }
}

// serde_json messages quote the offending value, which may be a credential.
fn describe(err: &serde_json::Error) -> String {
    let category = match err.classify() {
        serde_json::error::Category::Io => "io",
        serde_json::error::Category::Syntax => "syntax",
        serde_json::error::Category::Data => "data",
        serde_json::error::Category::Eof => "eof",
    };
    // Errors raised outside the byte parser carry no position.
    if err.line() == 0 {
        format!("{category} error")
    } else {
        format!("{category} error at line {} column {}", err.line(), err.column())
    }
}

pub type Result<T> = std::result::Result<T, MeowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hides_offending_values() {
        let source = serde_json::from_str::<String>("12345").unwrap_err();
        let err = MeowError::MalformedPayload {
            kind: RequestKind::NewDebt,
            source,
        };
        let text = format!("{err}");
        assert!(text.contains("NewDebtRequest"));
        assert!(text.contains("data error"));
        assert!(!text.contains("12345"));
        assert!(text.contains("at line 1 column"));
        assert_eq!(err.kind(), "malformed_payload");
    }

    #[test]
    fn display_omits_missing_position() {
        use serde::de::Error as _;

        let source = serde_json::Error::invalid_type(serde::de::Unexpected::Seq, &"a JSON object");
        let err = MeowError::MalformedEnvelope(source);
        assert_eq!(format!("{err}"), "malformed envelope: data error");
    }

    #[test]
    fn unknown_variant_names_discriminant() {
        let err = MeowError::UnknownVariant("Bogus".to_string());
        assert!(format!("{err}").contains("\"Bogus\""));
        assert_eq!(err.kind(), "unknown_variant");
        let err = MeowError::Config("x".to_string());
        assert!(format!("{err}").contains("configuration error"));
    }
}
