pub mod config;
pub mod error;
pub mod io;
pub mod seed;

pub use config::{CleanOptions, Config, OutputOrder};
pub use error::SeedError;
pub use seed::{check_seed, clean_seed, Cleaned};
