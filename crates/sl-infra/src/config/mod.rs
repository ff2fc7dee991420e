mod imaging_config;

pub use imaging_config::{ImagingConfig, ImagingSection, PlaceholderSection, ProgressSection};
