mod memory;
mod payload;

pub use memory::MemoryStore;
pub use payload::PayloadClient;
