//! One resolution engine per marker kind.
//!
//! A [`Tracer`] reflects markers of its kind, validates them, and turns the
//! violations into an [`Outcome`]. Class-level violations are cached per
//! class for the lifetime of the tracer; method-level ones never are.

use std::collections::HashMap;

use super::event::TestEvent;
use super::outcome::Outcome;
use crate::error::Result;
use crate::reflection::{MarkerSource, Scope};
use crate::requirements::{
    validator_for, CheckContext, MarkerKind, OutcomeBehavior, Validator, Violation, Violations,
};

/// Checks markers of one kind across a test run.
pub struct Tracer {
    kind: MarkerKind,
    validator: Box<dyn Validator>,
    default_behavior: OutcomeBehavior,
    cache: HashMap<String, Violations>,
}

impl Tracer {
    pub fn new(
        kind: MarkerKind,
        validator: Box<dyn Validator>,
        default_behavior: OutcomeBehavior,
    ) -> Self {
        Self {
            kind,
            validator,
            default_behavior,
            cache: HashMap::new(),
        }
    }

    /// Tracer using the built-in validator for `kind`.
    pub fn for_kind(kind: MarkerKind, default_behavior: OutcomeBehavior) -> Self {
        Self::new(kind, validator_for(kind), default_behavior)
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    pub fn default_behavior(&self) -> OutcomeBehavior {
        self.default_behavior
    }

    /// Cached class-level violations, if the class was already prepared.
    pub fn cached(&self, class: &str) -> Option<&Violations> {
        self.cache.get(class)
    }

    /// Dispatch a lifecycle event.
    ///
    /// `Prepared` checks class-level markers (usually from cache) before the
    /// method-level ones, so it is decisive even without a preceding
    /// `BeforeTestMethodCalled`.
    pub fn trace(
        &mut self,
        event: &TestEvent<'_>,
        source: &dyn MarkerSource,
        ctx: &CheckContext<'_>,
    ) -> Result<Outcome> {
        match *event {
            TestEvent::BeforeTestMethodCalled { class } => self.prepare_class(class, source, ctx),
            TestEvent::Prepared { class, method } => {
                let outcome = self.prepare_class(class, source, ctx)?;
                if !outcome.is_continue() {
                    return Ok(outcome);
                }
                self.prepare_method(class, method, source, ctx)
            }
        }
    }

    /// Check class-level markers.
    ///
    /// The first call for a class validates and caches the result, even when
    /// nothing was violated. Later calls replay the cached decision without
    /// reflecting or validating again.
    pub fn prepare_class(
        &mut self,
        class: &str,
        source: &dyn MarkerSource,
        ctx: &CheckContext<'_>,
    ) -> Result<Outcome> {
        if let Some(cached) = self.cache.get(class) {
            tracing::debug!(
                "{}: cache hit for {} ({} violations)",
                self.kind,
                class,
                cached.len()
            );
            return Ok(self.decide(cached));
        }

        tracing::debug!("{}: cache miss for {}", self.kind, class);
        let violations = self.collect(Scope::Class(class), source, ctx)?;
        let outcome = self.decide(&violations);
        self.cache.insert(class.to_string(), violations);
        Ok(outcome)
    }

    /// Check method-level markers. Always evaluated fresh.
    pub fn prepare_method(
        &self,
        class: &str,
        method: &str,
        source: &dyn MarkerSource,
        ctx: &CheckContext<'_>,
    ) -> Result<Outcome> {
        let violations = self.collect(Scope::Method { class, method }, source, ctx)?;
        Ok(self.decide(&violations))
    }

    fn collect(
        &self,
        scope: Scope<'_>,
        source: &dyn MarkerSource,
        ctx: &CheckContext<'_>,
    ) -> Result<Violations> {
        let markers = source.markers(scope, self.kind)?;
        tracing::debug!("{}: {} marker(s) on {}", self.kind, markers.len(), scope);

        let mut violations = Violations::new();
        for marker in &markers {
            if let Some(message) = self.validator.validate(marker, ctx)? {
                let behavior = marker.behavior.unwrap_or(self.default_behavior);
                violations.push(Violation::new(message, behavior));
            }
        }
        Ok(violations)
    }

    fn decide(&self, violations: &Violations) -> Outcome {
        let outcome = Outcome::decide(violations, self.default_behavior);
        if !outcome.is_continue() {
            tracing::debug!("{}: {}", self.kind, outcome.status());
        }
        outcome
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer")
            .field("kind", &self.kind)
            .field("default_behavior", &self.default_behavior)
            .field("cached_classes", &self.cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequisiteError;
    use crate::packages::InstalledPackages;
    use crate::reflection::{MarkerRegistry, TestClass, TestMethod};
    use crate::requirements::validator::tests::MockEnvironment;
    use crate::requirements::Marker;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Delegates to the built-in validator and counts calls.
    struct CountingValidator {
        inner: Box<dyn Validator>,
        calls: Rc<Cell<usize>>,
    }

    impl Validator for CountingValidator {
        fn validate(
            &self,
            marker: &Marker,
            ctx: &CheckContext<'_>,
        ) -> Result<Option<String>> {
            self.calls.set(self.calls.get() + 1);
            self.inner.validate(marker, ctx)
        }
    }

    fn counting_tracer(kind: MarkerKind, default: OutcomeBehavior) -> (Tracer, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let validator = CountingValidator {
            inner: validator_for(kind),
            calls: Rc::clone(&calls),
        };
        (Tracer::new(kind, Box::new(validator), default), calls)
    }

    fn registry() -> MarkerRegistry {
        MarkerRegistry::from_classes(vec![
            TestClass::new("FooTest")
                .with_marker(Marker::requires_class("Missing\\One"))
                .with_marker(Marker::requires_class("Missing\\Two"))
                .with_method(TestMethod::new("testA"))
                .with_method(
                    TestMethod::new("testB")
                        .with_marker(Marker::requires_class("Missing\\Three")),
                ),
            TestClass::new("CleanTest")
                .with_method(TestMethod::new("testA"))
                .with_method(
                    TestMethod::new("testB")
                        .with_marker(Marker::requires_class("Missing\\Four")),
                ),
        ])
    }

    #[test]
    fn class_violations_are_cached_and_replayed() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let (mut tracer, calls) = counting_tracer(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        let first = tracer.prepare_class("FooTest", &source, &ctx).unwrap();
        assert_eq!(calls.get(), 2);
        let second = tracer.prepare_class("FooTest", &source, &ctx).unwrap();
        assert_eq!(calls.get(), 2);

        assert_eq!(first, second);
        assert_eq!(
            first,
            Outcome::Skip(
                "Class \"Missing\\One\" is required.\nClass \"Missing\\Two\" is required."
                    .to_string()
            )
        );
        assert_eq!(tracer.cached("FooTest").map(Violations::len), Some(2));
    }

    #[test]
    fn empty_class_result_is_cached() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let (mut tracer, _) = counting_tracer(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        let outcome = tracer.prepare_class("CleanTest", &source, &ctx).unwrap();
        assert!(outcome.is_continue());
        assert!(tracer.cached("CleanTest").is_some_and(Violations::is_empty));
    }

    #[test]
    fn cache_is_authoritative_after_environment_change() {
        let mut env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let source = registry();
        let (mut tracer, _) = counting_tracer(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        {
            let ctx = CheckContext::new(&env, &packages);
            assert!(tracer.prepare_class("FooTest", &source, &ctx).unwrap().is_skip());
        }

        env.classes.insert("Missing\\One".to_string());
        env.classes.insert("Missing\\Two".to_string());
        let ctx = CheckContext::new(&env, &packages);
        assert!(tracer.prepare_class("FooTest", &source, &ctx).unwrap().is_skip());
    }

    #[test]
    fn method_violations_are_never_cached() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let (tracer, calls) = counting_tracer(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        assert!(tracer
            .prepare_method("CleanTest", "testA", &source, &ctx)
            .unwrap()
            .is_continue());
        assert!(tracer
            .prepare_method("CleanTest", "testB", &source, &ctx)
            .unwrap()
            .is_skip());
        assert!(tracer
            .prepare_method("CleanTest", "testB", &source, &ctx)
            .unwrap()
            .is_skip());
        assert_eq!(calls.get(), 2);
        assert!(tracer.cached("CleanTest").is_none());
    }

    #[test]
    fn default_behavior_applies_without_override() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let mut tracer = Tracer::for_kind(MarkerKind::RequiresClass, OutcomeBehavior::Fail);

        assert!(tracer.prepare_class("FooTest", &source, &ctx).unwrap().is_fail());
    }

    #[test]
    fn marker_override_beats_default() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = MarkerRegistry::from_classes(vec![TestClass::new("T").with_marker(
            Marker::requires_class("Nope").with_behavior(OutcomeBehavior::Skip),
        )]);
        let mut tracer = Tracer::for_kind(MarkerKind::RequiresClass, OutcomeBehavior::Fail);

        assert!(tracer.prepare_class("T", &source, &ctx).unwrap().is_skip());
    }

    #[test]
    fn identical_messages_render_once_but_all_behaviors_merge() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = MarkerRegistry::from_classes(vec![TestClass::new("T")
            .with_marker(Marker::requires_class("Nope").with_behavior(OutcomeBehavior::Skip))
            .with_marker(Marker::requires_class("Nope").with_behavior(OutcomeBehavior::Fail))]);
        let mut tracer = Tracer::for_kind(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        assert_eq!(
            tracer.prepare_class("T", &source, &ctx).unwrap(),
            Outcome::Fail("Class \"Nope\" is required.".to_string())
        );
    }

    #[test]
    fn other_kinds_are_ignored() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let mut tracer = Tracer::for_kind(MarkerKind::RequiresEnv, OutcomeBehavior::Fail);

        assert!(tracer.prepare_class("FooTest", &source, &ctx).unwrap().is_continue());
    }

    #[test]
    fn reflection_errors_propagate() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let mut tracer = Tracer::for_kind(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        assert!(matches!(
            tracer.prepare_class("NoSuchTest", &source, &ctx),
            Err(RequisiteError::UnknownTestClass { .. })
        ));
        assert!(matches!(
            tracer.prepare_method("FooTest", "testMissing", &source, &ctx),
            Err(RequisiteError::UnknownTestMethod { .. })
        ));
        assert!(tracer.cached("NoSuchTest").is_none());
    }

    #[test]
    fn malformed_constraint_propagates() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new().with_package("acme/core", "1.0.0");
        let ctx = CheckContext::new(&env, &packages);
        let source = MarkerRegistry::from_classes(vec![TestClass::new("T")
            .with_marker(Marker::requires_package("acme/core").with_version("not a version"))]);
        let mut tracer = Tracer::for_kind(MarkerKind::RequiresPackage, OutcomeBehavior::Skip);

        assert!(matches!(
            tracer.prepare_class("T", &source, &ctx),
            Err(RequisiteError::InvalidVersionConstraint { .. })
        ));
    }

    #[test]
    fn trace_dispatches_events() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let mut tracer = Tracer::for_kind(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        let class_event = TestEvent::BeforeTestMethodCalled { class: "CleanTest" };
        let method_event = TestEvent::Prepared {
            class: "CleanTest",
            method: "testB",
        };
        assert!(tracer.trace(&class_event, &source, &ctx).unwrap().is_continue());
        assert!(tracer.trace(&method_event, &source, &ctx).unwrap().is_skip());
    }

    #[test]
    fn prepared_alone_checks_class_markers_first() {
        let env = MockEnvironment::default();
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(&env, &packages);
        let source = registry();
        let (mut tracer, calls) = counting_tracer(MarkerKind::RequiresClass, OutcomeBehavior::Skip);

        let event = TestEvent::Prepared {
            class: "FooTest",
            method: "testB",
        };
        let outcome = tracer.trace(&event, &source, &ctx).unwrap();
        assert_eq!(
            outcome.message(),
            Some("Class \"Missing\\One\" is required.\nClass \"Missing\\Two\" is required.")
        );
        assert_eq!(calls.get(), 2);

        tracer.trace(&event, &source, &ctx).unwrap();
        assert_eq!(calls.get(), 2);
    }
}
