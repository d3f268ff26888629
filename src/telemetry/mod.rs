pub mod loader;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use loader::*;
pub use models::*;
pub use validation::*;
