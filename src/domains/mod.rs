pub mod debt;
pub mod header;
pub mod nullable;
pub mod request;
