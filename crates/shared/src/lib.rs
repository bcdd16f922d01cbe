pub mod contact;
mod error;

pub use error::*;
