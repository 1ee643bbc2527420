pub mod answer_builder;
pub mod record_type_map;
pub mod server;

pub use answer_builder::AnswerBuilder;
pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
