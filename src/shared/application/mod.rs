/// Shared application layer patterns
///
/// Types used across bounded contexts: every catalog query is paginated the
/// same way.
pub mod pagination;

pub use pagination::*;
