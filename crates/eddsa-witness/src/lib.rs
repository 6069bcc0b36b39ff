pub mod message;
pub mod witness_builder;
