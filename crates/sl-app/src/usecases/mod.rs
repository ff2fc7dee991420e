//! Business logic use cases

pub mod imaging;
