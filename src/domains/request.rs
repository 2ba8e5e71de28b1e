use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domains::header::{MeowHeader, MeowRequest};
use crate::domains::nullable::zero_if_null;

/// The closed set of request discriminants understood by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    RefData,
    Debts,
    NewDebt,
    CancelDebt,
    NotificationsList,
}

impl RequestKind {
    pub const ALL: [RequestKind; 5] = [
        RequestKind::RefData,
        RequestKind::Debts,
        RequestKind::NewDebt,
        RequestKind::CancelDebt,
        RequestKind::NotificationsList,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::RefData => "RefDataRequest",
            RequestKind::Debts => "DebtsRequest",
            RequestKind::NewDebt => "NewDebtRequest",
            RequestKind::CancelDebt => "CancelDebtRequest",
            RequestKind::NotificationsList => "NotificationsListRequest",
        }
    }

    /// Exact, case-sensitive lookup of a `type` value.
    pub fn from_discriminant(value: &str) -> Option<Self> {
        match value {
            "RefDataRequest" => Some(RequestKind::RefData),
            "DebtsRequest" => Some(RequestKind::Debts),
            "NewDebtRequest" => Some(RequestKind::NewDebt),
            "CancelDebtRequest" => Some(RequestKind::CancelDebt),
            "NotificationsListRequest" => Some(RequestKind::NotificationsList),
            _ => None,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefDataRequest {
    #[serde(flatten)]
    pub header: MeowHeader,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsListRequest {
    #[serde(flatten)]
    pub header: MeowHeader,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtsRequest {
    #[serde(flatten)]
    pub header: MeowHeader,
    #[serde(rename = "currency", deserialize_with = "zero_if_null")]
    pub currency: String,
    #[serde(rename = "offeree", deserialize_with = "zero_if_null")]
    pub offeree: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewDebtRequest {
    #[serde(flatten)]
    pub header: MeowHeader,
    #[serde(rename = "lender", deserialize_with = "zero_if_null")]
    pub lender: String,
    #[serde(rename = "borrower", deserialize_with = "zero_if_null")]
    pub borrower: String,
    #[serde(rename = "currency", deserialize_with = "zero_if_null")]
    pub currency: String,
    /// Minor currency units.
    #[serde(rename = "amount", deserialize_with = "zero_if_null")]
    pub amount: i64,
    #[serde(rename = "text", deserialize_with = "zero_if_null")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelDebtRequest {
    #[serde(flatten)]
    pub header: MeowHeader,
    #[serde(rename = "lender", deserialize_with = "zero_if_null")]
    pub lender: String,
    #[serde(rename = "borrower", deserialize_with = "zero_if_null")]
    pub borrower: String,
    #[serde(rename = "debtid", deserialize_with = "zero_if_null")]
    pub debt_id: String,
}

macro_rules! impl_meow_request {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MeowRequest for $ty {
                fn header(&self) -> &MeowHeader {
                    &self.header
                }
            }
        )+
    };
}

impl_meow_request!(
    RefDataRequest,
    NotificationsListRequest,
    DebtsRequest,
    NewDebtRequest,
    CancelDebtRequest,
);

/// A decoded request. The `type` key lives in each arm's header, so the
/// enum encodes untagged and produces the variant's own wire document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Request {
    RefData(RefDataRequest),
    Debts(DebtsRequest),
    NewDebt(NewDebtRequest),
    CancelDebt(CancelDebtRequest),
    NotificationsList(NotificationsListRequest),
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::RefData(_) => RequestKind::RefData,
            Request::Debts(_) => RequestKind::Debts,
            Request::NewDebt(_) => RequestKind::NewDebt,
            Request::CancelDebt(_) => RequestKind::CancelDebt,
            Request::NotificationsList(_) => RequestKind::NotificationsList,
        }
    }
}

impl MeowRequest for Request {
    fn header(&self) -> &MeowHeader {
        match self {
            Request::RefData(inner) => &inner.header,
            Request::Debts(inner) => &inner.header,
            Request::NewDebt(inner) => &inner.header,
            Request::CancelDebt(inner) => &inner.header,
            Request::NotificationsList(inner) => &inner.header,
        }
    }
}

impl From<RefDataRequest> for Request {
    fn from(value: RefDataRequest) -> Self {
        Request::RefData(value)
    }
}

impl From<DebtsRequest> for Request {
    fn from(value: DebtsRequest) -> Self {
        Request::Debts(value)
    }
}

impl From<NewDebtRequest> for Request {
    fn from(value: NewDebtRequest) -> Self {
        Request::NewDebt(value)
    }
}

impl From<CancelDebtRequest> for Request {
    fn from(value: CancelDebtRequest) -> Self {
        Request::CancelDebt(value)
    }
}

impl From<NotificationsListRequest> for Request {
    fn from(value: NotificationsListRequest) -> Self {
        Request::NotificationsList(value)
    }
}
