mod betting;
pub mod dispatch;
pub mod request;

#[cfg(test)]
pub(crate) mod mock;

pub use dispatch::{dispatch, SERVICE_GROUP};
pub use request::{FixedProjection, Operation};
