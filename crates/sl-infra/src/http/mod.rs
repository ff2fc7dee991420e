mod progress_reporter;

pub use progress_reporter::{DisabledProgressReporter, HttpProgressReporter};
