//! Domain types and pure logic for the ProFashion generation pipeline.
//!
//! Everything in this crate is synchronous and side-effect free except for
//! the [`store::GalleryStore`] trait, which defines the seam between the
//! pipeline and the persistence backend.

pub mod catalog;
pub mod config;
pub mod consistency;
pub mod error;
pub mod framing;
pub mod poses;
pub mod prompt;
pub mod shot;
pub mod store;

pub use error::CoreError;
