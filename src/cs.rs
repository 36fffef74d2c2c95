pub mod dynamic;
pub mod search;

// Re-export all modules
pub use dynamic::*;
pub use search::*;
