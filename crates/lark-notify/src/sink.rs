use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde_json::Value;

use crate::error::DeliveryError;
use crate::message::Message;
use crate::signer::SignaturePair;

/// Raw HTTP response from the webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkResponse {
    pub status: u16,
    pub body: String,
}

/// Transport for one JSON POST.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn post_json(
        &self,
        endpoint: &Url,
        body: Vec<u8>,
    ) -> Result<SinkResponse, DeliveryError>;
}

/// reqwest-backed sink with the client's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct HttpSink {
    client: reqwest::Client,
}

impl HttpSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WebhookSink for HttpSink {
    async fn post_json(
        &self,
        endpoint: &Url,
        body: Vec<u8>,
    ) -> Result<SinkResponse, DeliveryError> {
        let resp = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(Box::new(e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| DeliveryError::Transport(Box::new(e)))?;
        Ok(SinkResponse { status, body })
    }
}

/// Serialize a message, adding `timestamp` and `sign` at the top level when
/// a signature is supplied.
pub fn encode_payload(
    message: &Message,
    signature: Option<&SignaturePair>,
) -> Result<Vec<u8>, serde_json::Error> {
    let mut value = serde_json::to_value(message)?;
    if let (Some(sig), Value::Object(map)) = (signature, &mut value) {
        map.insert("timestamp".into(), Value::String(sig.timestamp.clone()));
        map.insert("sign".into(), Value::String(sig.sign.clone()));
    }
    serde_json::to_vec(&value)
}

/// Post an encoded payload once and interpret the reply.
pub async fn deliver(
    sink: &dyn WebhookSink,
    endpoint: &Url,
    payload: Vec<u8>,
) -> Result<(), DeliveryError> {
    tracing::debug!(
        host = endpoint.host_str().unwrap_or(""),
        bytes = payload.len(),
        "posting notification"
    );
    let resp = sink.post_json(endpoint, payload).await?;
    tracing::debug!(status = resp.status, "webhook responded");
    interpret_response(resp.status, &resp.body)
}

/// Non-2xx fails; a 2xx JSON body with a non-zero numeric `code` is a
/// rejection. Bodies that are not JSON count as success.
pub fn interpret_response(status: u16, body: &str) -> Result<(), DeliveryError> {
    if !(200..300).contains(&status) {
        return Err(DeliveryError::HttpStatus {
            code: status,
            body: body.to_string(),
        });
    }

    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return Ok(());
    };
    if let Some(Value::Number(code)) = parsed.get("code") {
        if code.as_f64().is_some_and(|c| c != 0.0) {
            return Err(DeliveryError::RemoteRejected {
                code: code.clone(),
                body: body.to_string(),
            });
        }
    }
    Ok(())
}
