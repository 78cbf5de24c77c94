#![allow(dead_code)]

use async_trait::async_trait;
use restdns_application::ports::{BackendReply, BackendRequest, LookupBackend};
use restdns_domain::DomainError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Backend double keyed by lookup key. Unknown keys answer 404.
#[derive(Clone, Default)]
pub struct MockLookupBackend {
    replies: Arc<Mutex<HashMap<String, Result<BackendReply, DomainError>>>>,
    calls: Arc<Mutex<Vec<BackendRequest>>>,
}

impl MockLookupBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_json(&self, lookup_key: &str, body: &str) {
        self.set_reply(lookup_key, 200, body);
    }

    pub fn set_reply(&self, lookup_key: &str, status: u16, body: &str) {
        self.replies.lock().unwrap().insert(
            lookup_key.to_string(),
            Ok(BackendReply::new(status, body.to_string())),
        );
    }

    pub fn set_error(&self, lookup_key: &str, error: DomainError) {
        self.replies
            .lock()
            .unwrap()
            .insert(lookup_key.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<BackendRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupBackend for MockLookupBackend {
    async fn fetch(&self, request: &BackendRequest) -> Result<BackendReply, DomainError> {
        self.calls.lock().unwrap().push(request.clone());

        self.replies
            .lock()
            .unwrap()
            .get(request.lookup_key.as_ref())
            .cloned()
            .unwrap_or_else(|| Ok(BackendReply::new(404, "not found")))
    }
}
