use crate::core::types::ComponentId;
use crate::error::Result;

/// Discovery collaborator: enumerates every component id known to the
/// application instance, in a stable order.
pub trait ComponentEnumerator {
    fn list_all(&self) -> Result<Vec<ComponentId>>;
}

/// Outward message channel. The engine describes planning and execution
/// progress through this; formatting, destination and level filtering are
/// the sink's business.
pub trait MessageSink {
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warning(&self, msg: &str);
}

/// Sink that discards everything. Handy for embedding and tests.
pub struct NullSink;

impl MessageSink for NullSink {
    fn debug(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn warning(&self, _msg: &str) {}
}
