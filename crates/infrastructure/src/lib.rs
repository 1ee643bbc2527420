pub mod dns;
pub mod records;
