mod dependencies;
mod site;

// Dependency commands
pub use dependencies::ensure_dependencies;

// Site lifecycle commands
pub use site::{create_site, delete_site, disable_site, enable_site};
