mod lookup_backend;

pub use lookup_backend::{BackendReply, BackendRequest, LookupBackend};
