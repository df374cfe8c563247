mod command;
mod seed;
mod store;

pub use command::*;
pub use seed::Seed;
pub use store::{MemoryStore, RecordStore};
