// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Sources
pub const LOGO_INDEX_URL: &str = "https://1000logos.net/american-colleges-ncaa/?az={shard}";
pub const LOGO_FALLBACK_BASE: &str = "https://1000logos.net/";
pub const PLAYER_SITE: &str = "https://www.sports-reference.com";
pub const PLAYER_INDEX_URL: &str = "https://www.sports-reference.com/cbb/players/{shard}-index.html";
pub const COLORS_URL: &str = "https://teamcolorcodes.com/{slug}";
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

// Politeness
pub const SETTLE_MS: u64 = 2_000; // wait after each page render
pub const PROFILE_SPACING_MS: u64 = 1_200; // min gap between profile/page fetches

// Output
pub const UNKNOWN: &str = "Unknown";
pub const ASSET_SEP: char = '_';
pub const DEFAULT_ASSET_DIR: &str = "src/assets/logos";
pub const DEFAULT_LOGO_MAP: &str = "src/data/processed/logo_map.json";
pub const DEFAULT_BIOS: &str = "src/data/processed/bio.json";
pub const DEFAULT_POSITIONS_OUT: &str = "src/data/processed/scraped_positions.json";
pub const DEFAULT_COLORS_OUT: &str = "src/data/school_colors_logos.json";

// Colors
pub const DEFAULT_PRIMARY: &str = "#e0e7ff";
pub const DEFAULT_SECONDARY: &str = "#ffffff";

// Profile page
pub const POSITION_LABEL: &str = "Position";
