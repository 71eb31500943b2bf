//! Precondition resolution.
//!
//! For each test about to run, class-level markers are resolved once per
//! class and cached, method-level markers are resolved every time, and all
//! violations of a kind are merged into one [`Outcome`].
//!
//! # Modules
//!
//! - [`event`] - Lifecycle events delivered by the host runner
//! - [`outcome`] - Continue, skip or fail
//! - [`runner`] - The per-run context owning collaborators and tracers
//! - [`tracer`] - Cache, aggregate and decide for one marker kind

pub mod event;
pub mod outcome;
pub mod runner;
pub mod tracer;

pub use event::TestEvent;
pub use outcome::Outcome;
pub use runner::PreconditionRunner;
pub use tracer::Tracer;
