// Inventory
pub const MAX_INVENTORY_SIZE: usize = 20;

// XP and leveling
pub const XP_PER_LEVEL: u64 = 100;
pub const LEVEL_UP_MAX_HEALTH: i64 = 10;
pub const LEVEL_UP_STRENGTH: i64 = 2;
pub const LEVEL_UP_MAGIC: i64 = 2;

// New characters
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_GOLD: u64 = 100;

// Shop
pub const SELL_PRICE_DIVISOR: u64 = 2;

// Save files
pub const SAVE_FILE_SUFFIX: &str = "_save.txt";
pub const SAVE_DIR_ENV_VAR: &str = "CHRONICLES_SAVE_DIR";
pub const SAVE_DIR_NAME: &str = "save_games";
