use std::{path::PathBuf, time::Duration};

use clap::Parser;
use scryfall::{Category, API_BASE};

/// Export deduplicated card art listings from Scryfall, one JSON file per category.
#[derive(Debug, Clone, Parser)]
#[command(name = "import-cards", version)]
pub struct Config {
    /// Categories to import, in order: counterspell, beast, burn, terror, wrath, set or basic.
    /// Defaults to counterspell, beast, burn, set, basic.
    #[arg(short, long = "category")]
    pub categories: Vec<Category>,

    /// Directory the `<category>.json` files are written to.
    #[arg(long, env = "IMPORT_OUT_DIR", default_value = "jsons")]
    pub out_dir: PathBuf,

    /// Pause after every request, in milliseconds. 0 disables pacing.
    #[arg(long, env = "IMPORT_DELAY_MS", default_value_t = 100)]
    pub delay_ms: u64,

    #[arg(long, env = "SCRYFALL_API_BASE", default_value = API_BASE)]
    pub api_base: String,

    #[arg(long, default_value = concat!("card-art-importer/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}

impl Config {
    /// Parses the command line, after loading `.env` if one is present.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Config::parse();
        if config.categories.is_empty() {
            config.categories = Category::DEFAULT_RUN.to_vec();
        }
        config
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
