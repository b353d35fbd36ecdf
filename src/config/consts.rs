// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.goodreads.com";
pub const SEARCH_PATH: &str = "/search";
pub const USER_AGENT: &str = concat!("author_graph/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const RETAIL_SEARCH_URL: &str = "https://www.amazon.com/s";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const STORE_FILE: &str = "myauthors.json";

// Export
pub const GRAPH_DOT_FILE: &str = "author_graph.dot";

// Seeding for a fresh session
pub const DEFAULT_AUTHORS: [&str; 4] = [
    "Haruki Murakami",
    "Charlotte Bronte",
    "Agatha Christie",
    "Bram Stoker",
];
