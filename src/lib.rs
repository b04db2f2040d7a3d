//! Generation of keys for content-model configuration objects.
//!
//! A key tags a field group, a field, or a flexible-content layout and
//! has the form `<category>_<slug>_<suffix>`, e.g.
//! `field_hero_title_x7k2p9`. The slug is derived deterministically
//! from a human-readable name; the suffix is random and exists only to
//! make accidental collisions unlikely. Keys are never checked for
//! uniqueness against anything.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod commands;
pub mod key;

pub use key::Category;
pub use key::generate_key;
