// src/lib.rs
//! Card list + XML card database → Magic Workstation spoiler text.

#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod card;
pub mod cli;
pub mod file;
pub mod index;
pub mod normalize;
pub mod progress;
pub mod runner;
pub mod spoiler;

pub use card::CardRecord;
pub use error::{Result, SpoilerError};
pub use index::DocumentIndex;
pub use normalize::{ColorCode, Rarity};
pub use spoiler::SpoilerEntry;
