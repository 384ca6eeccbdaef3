use thiserror::Error;

/// Failures while parsing a configured layout. Both are fatal at
/// construction time; stored layouts are never validated this strictly,
/// an unreadable store entry just reads as absent.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("layout JSON does not match the breakpoint map schema: {0}")]
    InvalidShape(#[source] serde_json::Error),
}
