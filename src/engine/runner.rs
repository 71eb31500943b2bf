//! Per-run precondition context.

use super::event::TestEvent;
use super::outcome::Outcome;
use super::tracer::Tracer;
use crate::config::BehaviorSettings;
use crate::environment::Environment;
use crate::error::Result;
use crate::packages::PackageIndex;
use crate::reflection::MarkerSource;
use crate::requirements::{CheckContext, MarkerKind};

/// Owns the collaborators and tracers for one test run.
///
/// Tracers are consulted in registration order; the first one that does not
/// answer [`Outcome::Continue`] decides the test.
pub struct PreconditionRunner {
    source: Box<dyn MarkerSource>,
    environment: Box<dyn Environment>,
    packages: Box<dyn PackageIndex>,
    tracers: Vec<Tracer>,
}

impl PreconditionRunner {
    /// Create a runner with no tracers registered.
    pub fn new(
        source: Box<dyn MarkerSource>,
        environment: Box<dyn Environment>,
        packages: Box<dyn PackageIndex>,
    ) -> Self {
        Self {
            source,
            environment,
            packages,
            tracers: Vec::new(),
        }
    }

    /// Register one tracer per marker kind with the configured defaults.
    pub fn with_builtin_tracers(mut self, settings: &BehaviorSettings) -> Self {
        for kind in MarkerKind::ALL {
            self.register(Tracer::for_kind(kind, settings.behavior(kind)));
        }
        self
    }

    pub fn register(&mut self, tracer: Tracer) {
        tracing::debug!(
            "Registered {} tracer (default: {})",
            tracer.kind(),
            tracer.default_behavior()
        );
        self.tracers.push(tracer);
    }

    pub fn tracers(&self) -> &[Tracer] {
        &self.tracers
    }

    /// Feed one lifecycle event through every tracer.
    ///
    /// For `Prepared`, the class-level checks of every kind run (usually from
    /// cache) before any method-level check.
    pub fn handle(&mut self, event: &TestEvent<'_>) -> Result<Outcome> {
        let outcome = self.prepare_classes(event.class())?;
        if !outcome.is_continue() {
            tracing::debug!("{} decided at class level", event);
            return Ok(outcome);
        }
        match *event {
            TestEvent::BeforeTestMethodCalled { .. } => Ok(Outcome::Continue),
            TestEvent::Prepared { class, method } => self.prepare_methods(class, method),
        }
    }

    /// Run both lifecycle events for one test method.
    pub fn prepare_test(&mut self, class: &str, method: &str) -> Result<Outcome> {
        let outcome = self.handle(&TestEvent::BeforeTestMethodCalled { class })?;
        if !outcome.is_continue() {
            return Ok(outcome);
        }
        self.handle(&TestEvent::Prepared { class, method })
    }

    fn prepare_classes(&mut self, class: &str) -> Result<Outcome> {
        let ctx = CheckContext::new(self.environment.as_ref(), self.packages.as_ref());
        for tracer in &mut self.tracers {
            let outcome = tracer.prepare_class(class, self.source.as_ref(), &ctx)?;
            if !outcome.is_continue() {
                tracing::debug!("{} decided by {} tracer", class, tracer.kind());
                return Ok(outcome);
            }
        }
        Ok(Outcome::Continue)
    }

    fn prepare_methods(&self, class: &str, method: &str) -> Result<Outcome> {
        let ctx = CheckContext::new(self.environment.as_ref(), self.packages.as_ref());
        for tracer in &self.tracers {
            let outcome = tracer.prepare_method(class, method, self.source.as_ref(), &ctx)?;
            if !outcome.is_continue() {
                tracing::debug!("{}::{} decided by {} tracer", class, method, tracer.kind());
                return Ok(outcome);
            }
        }
        Ok(Outcome::Continue)
    }
}
