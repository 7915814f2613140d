pub mod col;
pub mod constant;
pub mod error;
pub mod interceptor;
pub mod metadata;
mod opts;
pub mod protocol;

pub use col::Field;
pub use metadata::ResultSetMetadata;
pub use opts::Opts;

#[cfg(test)]
mod constant_test;
#[cfg(test)]
mod interceptor_test;
