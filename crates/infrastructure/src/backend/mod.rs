pub mod http;

pub use http::HttpLookupBackend;
