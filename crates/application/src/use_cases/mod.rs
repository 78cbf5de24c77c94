pub mod dns;

pub use dns::{HandleDnsQueryUseCase, QueryResolver, ReplyInterpreter, Resolution};
