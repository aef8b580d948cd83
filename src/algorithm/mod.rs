/// Grid building and regeneration over a persisted snapshot
pub mod builder;
/// Rejection-sampling tile selection under neighbor constraints
pub mod selection;
