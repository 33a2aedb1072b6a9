mod batch;
mod config;
mod locator;
mod summary;

pub use batch::BatchConfig;
pub use config::Config;
pub use locator::LocatorConfig;
pub use summary::SummaryConfig;
