//! In-memory transport for exercising the dispatch path.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::transport::{Transport, TransportError};

#[derive(Debug, Clone)]
pub struct Call {
    pub service_group: String,
    pub method: String,
    pub body: Vec<u8>,
}

impl Call {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Replies with a canned body (or error) and records every request.
pub struct MockTransport {
    reply: Mutex<Option<Result<Vec<u8>, TransportError>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn replying(body: &str) -> Self {
        Self {
            reply: Mutex::new(Some(Ok(body.as_bytes().to_vec()))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        Self {
            reply: Mutex::new(Some(Err(err))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls().pop().expect("no call recorded")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn invoke(
        &self,
        service_group: &str,
        method: &str,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(Call {
            service_group: service_group.to_string(),
            method: method.to_string(),
            body,
        });

        // Errors are not Clone, so a failing mock only fails once.
        let mut reply = self.reply.lock().unwrap();
        if let Some(Ok(bytes)) = reply.as_ref() {
            return Ok(bytes.clone());
        }
        reply
            .take()
            .unwrap_or_else(|| Err(TransportError::Other("mock exhausted".into())))
    }
}
