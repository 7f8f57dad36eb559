pub(crate) mod errors;
pub mod share_link;

// Re-export the module here for easy import elsewhere.
pub use share_link::*;
