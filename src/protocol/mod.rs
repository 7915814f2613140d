pub mod command;
pub mod primitive;

#[cfg(test)]
mod primitive_test;
