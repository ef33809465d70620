use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A successfully decoded answer from the dispatch endpoint.
///
/// Any status code counts as long as the body is JSON; the status is kept so
/// callers can tell a server-side rejection from an accepted alert.
#[derive(Debug, Clone)]
pub struct SosAck {
    pub status: StatusCode,
    pub body: Value,
}

impl SosAck {
    /// Typed view of the body, if it has the dispatch server's reply shape.
    pub fn reply(&self) -> Option<SosReply> {
        SosReply::from_value(&self.body)
    }
}

/// Reply body sent by the dispatch server.
///
/// `{"ok": true, "to": "<driver email>"}` when a driver was alerted,
/// `{"ok": false, "msg": "<reason>"}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SosReply {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl SosReply {
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}
