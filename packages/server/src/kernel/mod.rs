//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod mailer;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use mailer::MailjetClient;
pub use traits::*;
