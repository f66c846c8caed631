pub mod invalidator;
pub mod lru;
pub mod noop;

pub use invalidator::RecordCache;
pub use lru::LruRecordCache;
pub use noop::NoopCache;
