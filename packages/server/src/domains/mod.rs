// Domain modules
pub mod condolences;
pub mod notifications;
pub mod submissions;
