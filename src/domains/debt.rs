use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domains::header::{MeowHeader, MeowRequest};
use crate::domains::nullable::zero_if_null;

/// A debt between two users. `amount` is in minor currency units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Debt {
    #[serde(rename = "id", deserialize_with = "zero_if_null")]
    pub id: String,
    #[serde(rename = "lender", deserialize_with = "zero_if_null")]
    pub lender: String,
    #[serde(rename = "borrower", deserialize_with = "zero_if_null")]
    pub borrower: String,
    #[serde(rename = "currency", deserialize_with = "zero_if_null")]
    pub currency: String,
    #[serde(rename = "amount", deserialize_with = "zero_if_null")]
    pub amount: i64,
    #[serde(rename = "date", deserialize_with = "zero_if_null")]
    pub date: String,
    #[serde(rename = "status", deserialize_with = "zero_if_null")]
    pub status: String,
    #[serde(rename = "text", deserialize_with = "zero_if_null")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    #[serde(flatten)]
    pub debt: Debt,
    #[serde(rename = "notification_id", deserialize_with = "zero_if_null")]
    pub notification_id: String,
    #[serde(rename = "notification_type", deserialize_with = "zero_if_null")]
    pub notification_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefDataResponse {
    #[serde(rename = "Users", deserialize_with = "zero_if_null")]
    pub users: Vec<String>,
    #[serde(rename = "Currencies", deserialize_with = "zero_if_null")]
    pub currencies: Vec<String>,
}

/// Per-currency, per-status totals in minor units.
pub type DebtStats = BTreeMap<String, BTreeMap<String, i64>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebtsResponse {
    #[serde(rename = "DebtsList", deserialize_with = "zero_if_null")]
    pub debts_list: Vec<Debt>,
    #[serde(rename = "Stats", deserialize_with = "zero_if_null")]
    pub stats: DebtStats,
}

/// Built by the ledger layer; the request parser never produces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsListResponse {
    #[serde(flatten)]
    pub header: MeowHeader,
    #[serde(rename = "Notifications", deserialize_with = "zero_if_null")]
    pub notifications: Vec<Notification>,
}

impl MeowRequest for NotificationsListResponse {
    fn header(&self) -> &MeowHeader {
        &self.header
    }
}
