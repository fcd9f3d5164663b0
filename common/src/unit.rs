//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing a completion of some process.
#[derive(Clone, Copy, Debug)]
pub struct Completion;

/// Marker type describing a cancellation of some process.
#[derive(Clone, Copy, Debug)]
pub struct Cancellation;
