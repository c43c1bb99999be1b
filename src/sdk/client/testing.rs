//! Scripted transport for unit tests

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Method;
use std::collections::{HashMap, VecDeque};

/// Replies from per-path queues and records every request
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: Mutex<HashMap<String, VecDeque<ApiResponse>>>,
    calls: Mutex<Vec<ApiRequest>>,
    yield_before_reply: bool,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Yield to the runtime before each reply so concurrent calls interleave
    pub(crate) fn interleaved() -> Self {
        Self {
            yield_before_reply: true,
            ..Self::default()
        }
    }

    pub(crate) fn reply(self, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .entry(path.to_string())
            .or_default()
            .push_back(ApiResponse::new(status, body));
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().clone()
    }

    pub(crate) fn calls_to(&self, path: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.path == path).count()
    }

    pub(crate) fn last_call(&self) -> Option<ApiRequest> {
        self.calls.lock().last().cloned()
    }

    pub(crate) fn methods_to(&self, path: &str) -> Vec<Method> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.path == path)
            .map(|c| c.method.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.calls.lock().push(request.clone());
        if self.yield_before_reply {
            tokio::task::yield_now().await;
        }
        let reply = self
            .replies
            .lock()
            .get_mut(&request.path)
            .and_then(|queue| queue.pop_front());
        reply.ok_or_else(|| ClientError::network(format!("no scripted reply for {}", request.path)))
    }
}
