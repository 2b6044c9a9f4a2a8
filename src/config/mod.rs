/// Static site metadata
pub mod website;

pub use website::{WEBSITE, Website};
