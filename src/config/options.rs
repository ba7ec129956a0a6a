// src/config/options.rs
use std::path::PathBuf;

use super::consts::{DEFAULT_CARDS_PATH, DEFAULT_LIST_PATH};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub cards_path: PathBuf,         // XML card database
    pub list_path: PathBuf,          // one requested card per line
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cards_path: PathBuf::from(DEFAULT_CARDS_PATH),
            list_path: PathBuf::from(DEFAULT_LIST_PATH),
        }
    }
}

impl RunOptions {
    pub fn new(cards_path: impl Into<PathBuf>, list_path: impl Into<PathBuf>) -> Self {
        Self { cards_path: cards_path.into(), list_path: list_path.into() }
    }
}
