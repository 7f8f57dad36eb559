pub mod profile;

// Re-export the modules here for easy import elsewhere.
pub use profile::*;
