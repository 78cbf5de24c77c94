pub mod backend_stub;
pub mod response_handler;

pub use backend_stub::MockRestBackend;
pub use response_handler::RecordingResponseHandler;
