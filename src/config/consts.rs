// src/config/consts.rs

// Inputs (working directory, same names the old hand-run workflow used)
pub const DEFAULT_CARDS_PATH: &str = "cards.xml";
pub const DEFAULT_LIST_PATH: &str = "cardlist.txt";

// Debug log; skipped silently if the directory does not exist
pub const LOG_FILE: &str = ".store/debug.log";

// Spoiler placeholders
pub const COLLECTOR_NUMBER: &str = "79/79";

// Color codes
pub const ARTIFACT_CODE: &str = "Art";
pub const GOLD_CODE: &str = "Gld";

// Request-line rarity prefix: "C: ", "U: ", "R: "
pub const RARITY_PREFIX_LEN: usize = 3;
