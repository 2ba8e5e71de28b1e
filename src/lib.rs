pub mod config;
pub mod daemon;
pub mod domains;
pub mod error;
pub mod interfaces;
pub mod services;

pub use crate::config::Config;
pub use crate::domains::debt::{
    Debt, DebtStats, DebtsResponse, Notification, NotificationsListResponse, RefDataResponse,
};
pub use crate::domains::header::{MeowHeader, MeowRequest};
pub use crate::domains::request::{
    CancelDebtRequest, DebtsRequest, NewDebtRequest, NotificationsListRequest, RefDataRequest,
    Request, RequestKind,
};
pub use crate::error::{MeowError, Result};
pub use crate::services::parser::{decode_envelope, decode_request, parse, read_and_parse};
