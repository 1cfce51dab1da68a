pub mod config;
pub mod constants;
pub mod dependency;
pub mod error;
pub mod hosts;
pub mod manifest;
pub mod runner;
pub mod site;
pub mod stack;

pub use error::{Result, StackError};
pub use site::SiteName;
pub use stack::StackManager;
