use std::io::Read;

use serde::de::{Error as _, Unexpected};
use serde::Deserialize;
use serde_json::Value;

use crate::domains::header::{MeowHeader, MeowRequest};
use crate::domains::request::{Request, RequestKind};
use crate::error::{MeowError, Result};

/// Default upper bound on a request body.
pub const DEFAULT_BODY_LIMIT: u64 = 1024 * 1024;

/// Reads one request document from `reader` and decodes it.
///
/// The reader is consumed and dropped before this returns, on success and
/// on every failure path. At most `limit` bytes are accepted; a longer
/// body is a [`MeowError::ReadFailure`].
pub fn read_and_parse<R: Read>(reader: R, limit: u64) -> Result<Request> {
    let body = read_body(reader, limit)?;
    parse(&body)
}

fn read_body<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(MeowError::ReadFailure)?;
    if body.len() as u64 > limit {
        return Err(MeowError::ReadFailure(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("request body exceeds {limit} bytes"),
        )));
    }
    Ok(body)
}

/// Decodes the envelope, then the concrete request its `type` names.
///
/// The bytes are parsed once; both stages read the same document, so a
/// repeated key resolves to its last occurrence in each of them.
pub fn parse(bytes: &[u8]) -> Result<Request> {
    let document = parse_document(bytes)?;
    let header = envelope_from(&document)?;
    dispatch(&document, &header)
}

/// Extracts only the shared header fields; everything else is ignored.
pub fn decode_envelope(bytes: &[u8]) -> Result<MeowHeader> {
    envelope_from(&parse_document(bytes)?)
}

/// Re-decodes the full payload into the shape selected by `header`.
pub fn decode_request(bytes: &[u8], header: &MeowHeader) -> Result<Request> {
    let kind = known_kind(header)?;
    let document = parse_document(bytes)?;
    decode_kind(&document, kind)
}

fn parse_document(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(MeowError::MalformedEnvelope)
}

fn envelope_from(document: &Value) -> Result<MeowHeader> {
    let header = match document {
        Value::Null => MeowHeader::default(),
        Value::Object(_) => {
            MeowHeader::deserialize(document).map_err(MeowError::MalformedEnvelope)?
        }
        other => {
            return Err(MeowError::MalformedEnvelope(serde_json::Error::invalid_type(
                unexpected(other),
                &"a JSON object",
            )))
        }
    };
    tracing::debug!(
        request_type = %header.request_type(),
        meow_version = %header.meow_version(),
        user = %header.user(),
        "decoded request envelope"
    );
    Ok(header)
}

fn dispatch(document: &Value, header: &MeowHeader) -> Result<Request> {
    let kind = known_kind(header)?;
    decode_kind(document, kind)
}

fn known_kind(header: &MeowHeader) -> Result<RequestKind> {
    RequestKind::from_discriminant(header.request_type()).ok_or_else(|| {
        tracing::debug!(request_type = %header.request_type(), "unknown request type");
        MeowError::UnknownVariant(header.request_type().to_string())
    })
}

fn decode_kind(document: &Value, kind: RequestKind) -> Result<Request> {
    let request = match kind {
        RequestKind::RefData => Request::RefData(decode_as(document, kind)?),
        RequestKind::Debts => Request::Debts(decode_as(document, kind)?),
        RequestKind::NewDebt => Request::NewDebt(decode_as(document, kind)?),
        RequestKind::CancelDebt => Request::CancelDebt(decode_as(document, kind)?),
        RequestKind::NotificationsList => Request::NotificationsList(decode_as(document, kind)?),
    };
    tracing::debug!(request_type = %kind, user = %request.user(), "decoded request");
    Ok(request)
}

fn decode_as<'a, T: Deserialize<'a>>(document: &'a Value, kind: RequestKind) -> Result<T> {
    T::deserialize(document).map_err(|source| MeowError::MalformedPayload { kind, source })
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(_) => Unexpected::Other("string"),
        Value::Array(_) => Unexpected::Seq,
        Value::Null => Unexpected::Unit,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_ignores_variant_fields() {
        let header = decode_envelope(
            br#"{"type":"NewDebtRequest","amount":"not a number","user":"alice"}"#,
        )
        .unwrap();
        assert_eq!(header.request_type(), "NewDebtRequest");
        assert_eq!(header.user(), "alice");
    }

    #[test]
    fn envelope_rejects_non_object_documents() {
        for input in [&b"[1,2]"[..], b"42", b"\"DebtsRequest\"", b"true"] {
            let err = decode_envelope(input).unwrap_err();
            assert!(matches!(err, MeowError::MalformedEnvelope(_)), "{input:?}");
        }
    }

    #[test]
    fn envelope_rejects_mistyped_header_field() {
        let err = decode_envelope(br#"{"type":7}"#).unwrap_err();
        assert!(matches!(err, MeowError::MalformedEnvelope(_)));
    }

    #[test]
    fn null_document_is_an_unknown_variant() {
        let err = parse(b"null").unwrap_err();
        assert!(matches!(err, MeowError::UnknownVariant(ref d) if d.is_empty()));
    }

    #[test]
    fn mistyped_password_does_not_leak_into_error() {
        let err = parse(br#"{"type":"RefDataRequest","password":987654}"#).unwrap_err();
        assert!(matches!(err, MeowError::MalformedEnvelope(_)));
        assert!(!err.to_string().contains("987654"));
    }

    #[test]
    fn body_over_limit_is_a_read_failure() {
        let body = br#"{"type":"RefDataRequest"}"#;
        let err = read_and_parse(&body[..], 4).unwrap_err();
        assert!(matches!(err, MeowError::ReadFailure(_)));

        let request = read_and_parse(&body[..], body.len() as u64).unwrap();
        assert_eq!(request.kind(), RequestKind::RefData);
    }
}
