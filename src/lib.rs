pub mod checkout;
pub mod cmd;
pub mod error;
pub mod index;
pub mod objects;
pub mod path;
pub mod refs;
pub mod repository;
