// HTTP routes
pub mod condolences;
pub mod health;
pub mod submissions;

pub use condolences::*;
pub use health::*;
pub use submissions::*;
