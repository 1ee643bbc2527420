pub mod answer_policy;
pub mod errors;
pub mod listen;
pub mod responder;

pub use answer_policy::AnswerPolicy;
pub use errors::ConfigError;
pub use listen::parse_listen_addr;
pub use responder::{ConfigArgs, ResponderConfig};
