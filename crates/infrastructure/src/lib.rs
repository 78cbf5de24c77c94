//! restdns infrastructure: HTTP lookup backend and hickory DNS adapters
pub mod backend;
pub mod dns;
