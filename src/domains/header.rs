use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domains::nullable::zero_if_null;
use crate::domains::request::RequestKind;

/// Fields carried by every request.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeowHeader {
    #[serde(rename = "type", deserialize_with = "zero_if_null")]
    pub kind: String,
    #[serde(rename = "meowVersion", deserialize_with = "zero_if_null")]
    pub meow_version: String,
    #[serde(rename = "user", deserialize_with = "zero_if_null")]
    pub user: String,
    #[serde(rename = "password", deserialize_with = "zero_if_null")]
    pub password: String,
}

impl MeowHeader {
    pub fn new(
        kind: RequestKind,
        meow_version: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            meow_version: meow_version.into(),
            user: user.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for MeowHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeowHeader")
            .field("kind", &self.kind)
            .field("meow_version", &self.meow_version)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Read access to the envelope, independent of the concrete request shape.
pub trait MeowRequest {
    fn header(&self) -> &MeowHeader;

    fn request_type(&self) -> &str {
        &self.header().kind
    }

    fn meow_version(&self) -> &str {
        &self.header().meow_version
    }

    fn user(&self) -> &str {
        &self.header().user
    }

    fn password(&self) -> &str {
        &self.header().password
    }
}

impl MeowRequest for MeowHeader {
    fn header(&self) -> &MeowHeader {
        self
    }
}
