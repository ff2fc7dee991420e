pub mod config;
pub mod fs;
pub mod http;
pub mod imaging;
pub mod placeholder;
pub mod time;

pub use config::ImagingConfig;
pub use time::SystemClock;
