pub mod analyzers;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod output;
pub mod prompt;
pub mod session;
pub mod stats;
pub mod trip;

pub use error::{BikeshareError, Result};
pub use loader::{Dataset, load};
