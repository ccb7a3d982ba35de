pub mod fixed;
pub mod frankfurter;
