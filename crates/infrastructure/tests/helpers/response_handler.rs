#![allow(dead_code)]
use hickory_proto::op::Header;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponse;
use hickory_server::server::{ResponseHandler, ResponseInfo};
use std::io;
use std::sync::{Arc, Mutex};

/// Records the header of every response the handler tries to write.
/// With `failing()` every write returns an I/O error instead.
#[derive(Clone, Default)]
pub struct RecordingResponseHandler {
    sent: Arc<Mutex<Vec<Header>>>,
    fail: bool,
}

impl RecordingResponseHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Header> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ResponseHandler for RecordingResponseHandler {
    async fn send_response<'a>(
        &mut self,
        response: MessageResponse<
            '_,
            'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
            impl Iterator<Item = &'a Record> + Send + 'a,
        >,
    ) -> io::Result<ResponseInfo> {
        let header = *response.header();
        self.sent.lock().unwrap().push(header);

        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"));
        }
        Ok(ResponseInfo::from(header))
    }
}
