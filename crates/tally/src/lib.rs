//! Top-level facade crate for tally.
//!
//! Re-exports core types and the API service library so users can depend on a single crate.

pub mod core {
    pub use tally_core::*;
}

pub mod api {
    pub use tally_api::*;
}
