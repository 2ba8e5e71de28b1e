use async_trait::async_trait;
use serde_json::{json, Value};

use crate::domains::header::MeowRequest;
use crate::domains::request::Request;
use crate::error::Result;

/// Consumes a decoded request and produces the JSON reply body.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: Request) -> Result<Value>;
}

/// Acknowledges every request without touching any ledger.
pub struct AcknowledgeHandler;

#[async_trait]
impl RequestHandler for AcknowledgeHandler {
    async fn handle(&self, request: Request) -> Result<Value> {
        Ok(json!({
            "status": "accepted",
            "type": request.request_type(),
            "user": request.user(),
        }))
    }
}
