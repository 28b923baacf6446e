//! Form submissions: wire payloads, validation, pricing and email rendering.
//!
//! Each endpoint deserializes a liberal wire payload (the front-end sends
//! numbers as strings in places), then `validate()` turns it into a typed
//! submission or a `ValidationError`. Rendering is one templating function
//! parameterized by the `Submission` variant.

mod models;
mod render;

pub use models::*;
pub use render::*;
