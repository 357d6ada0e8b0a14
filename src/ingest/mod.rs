mod errors;
mod loader;

pub use errors::IngestError;
pub use loader::{load_batch, parse_batch, Format};
