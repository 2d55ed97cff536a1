//! UseCase 層

pub mod fetch;
pub mod probe;

pub use fetch::TimeFetcher;
pub use probe::ProbeUseCase;
