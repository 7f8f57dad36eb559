pub mod model;
pub mod parser;

// re‑export ergonomic entry points
pub use model::profile::ServerProfile;
pub use parser::share_link::parse_all;
