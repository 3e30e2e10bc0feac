/// Directory that holds all quantitative data, one level above the base directory
pub const QUANT_DATA_DIR_NAME: &str = "quant_data";

/// Sub-directory of [`QUANT_DATA_DIR_NAME`] that receives the per-symbol output files
pub const OUTPUT_DIR_NAME: &str = "7_days_data";

pub const SYMBOLS_CSV_FILE_NAME: &str = "top_100_trending_crypto.csv";

/// Start of the fetch window, in `YYYY-MM-DD HH:MM:SS` form
pub const START_TIME: &str = "2024-10-26 01:00:00";

/// Length of the fetch window in days
pub const NUM_DAYS: u32 = 7;

/// Cap on the number of symbols to process
pub const NUM_SYMBOLS_TO_FETCH: usize = 100;

pub const READY_MESSAGE: &str = "Configuration is set up.";

pub const DEFAULT_LOG_FILTER: &str = "quant_data_config=info";
