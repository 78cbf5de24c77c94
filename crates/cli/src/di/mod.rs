mod dns;

pub use dns::build_dns_handler;
