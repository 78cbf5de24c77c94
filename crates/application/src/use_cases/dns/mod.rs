mod handle_dns_query;
mod interpret_reply;
mod resolve_query;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use interpret_reply::ReplyInterpreter;
pub use resolve_query::{QueryResolver, Resolution, COMBINED_ENDPOINT};
