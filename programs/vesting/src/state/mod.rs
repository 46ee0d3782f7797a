pub mod employee;
pub mod vest;

pub use employee::*;
pub use vest::*;
