// pipesign-domain library entry point
pub mod command;
pub mod errors;
pub mod group;
pub mod pipeline;
pub mod signature;
pub mod step;
pub mod unknown;

pub use command::{CommandStep, Matrix, Plugin};
pub use errors::DomainError;
pub use group::GroupStep;
pub use pipeline::Pipeline;
pub use signature::Signature;
pub use step::Step;
pub use unknown::UnknownStep;
