pub mod secret;

pub use secret::{EMPTY_MARKER, REDACTED, Secret};
