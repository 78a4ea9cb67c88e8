//! # Fragment Selection
//!
//! Conditional selection of pre-authored text for the templating stage.
//!
//! * A [`PredicatedFragment`] picks one of two strings depending on a predicate.
//! * A [`Pattern`] bundles an ordered list of fragments with a gate predicate. The gate
//!   decides whether the pattern's block is emitted at all, the fragment predicates decide
//!   the wording inside it. The two are evaluated independently.
//!
//! Fragments are opaque: nothing here parses or expands them.
//!
//! ```rust
//! use protorules_core::fragment::{Pattern, PredicatedFragment};
//! use protorules_core::predicate::Predicate;
//!
//! let small = Predicate::new(|n: &u32| *n < 10);
//! let pattern = Pattern::new(
//!     vec![
//!         PredicatedFragment::always("value is "),
//!         PredicatedFragment::new(small.clone(), "small", "large"),
//!     ],
//!     Predicate::always(),
//! );
//!
//! assert_eq!(pattern.render(&3).as_deref(), Some("value is small"));
//! assert_eq!(pattern.body(&30), "value is large");
//! ```
use crate::predicate::Predicate;

/// A predicate paired with the text to emit when it holds and when it does not.
#[derive(Debug, Clone)]
pub struct PredicatedFragment<T: ?Sized> {
    predicate: Predicate<T>,
    when_true: String,
    when_false: String,
}

impl<T: ?Sized> PredicatedFragment<T> {
    pub fn new(
        predicate: impl Into<Predicate<T>>,
        when_true: impl Into<String>,
        when_false: impl Into<String>,
    ) -> Self {
        Self {
            predicate: predicate.into(),
            when_true: when_true.into(),
            when_false: when_false.into(),
        }
    }

    /// Emits `when_true` if the predicate holds, nothing otherwise.
    pub fn when(predicate: impl Into<Predicate<T>>, when_true: impl Into<String>) -> Self {
        Self::new(predicate, when_true, String::new())
    }

    /// Unconditional text.
    pub fn always(text: impl Into<String>) -> Self {
        Self::new(Predicate::always(), text, String::new())
    }

    pub fn evaluate(&self, value: &T) -> &str {
        if self.predicate.evaluate(value) {
            &self.when_true
        } else {
            &self.when_false
        }
    }
}

/// An ordered sequence of [`PredicatedFragment`]s behind a gate predicate.
#[derive(Debug, Clone)]
pub struct Pattern<T: ?Sized> {
    fragments: Vec<PredicatedFragment<T>>,
    predicate: Predicate<T>,
}

impl<T: ?Sized> Pattern<T> {
    pub fn new(fragments: Vec<PredicatedFragment<T>>, predicate: impl Into<Predicate<T>>) -> Self {
        Self {
            fragments,
            predicate: predicate.into(),
        }
    }

    /// Evaluates the gate: should this pattern's block be emitted for `value`?
    pub fn evaluate(&self, value: &T) -> bool {
        self.predicate.evaluate(value)
    }

    /// The fragments, in declaration order.
    pub fn fragments(&self) -> &[PredicatedFragment<T>] {
        &self.fragments
    }

    /// Concatenates every fragment evaluated against `value`, in order.
    ///
    /// The gate is not consulted.
    pub fn body(&self, value: &T) -> String {
        self.fragments
            .iter()
            .map(|fragment| fragment.evaluate(value))
            .collect()
    }

    /// Returns the body if the gate holds for `value`.
    pub fn render(&self, value: &T) -> Option<String> {
        self.evaluate(value).then(|| self.body(value))
    }

    /// Returns the first pattern, in order, whose gate holds for `value`.
    pub fn first_match<'a>(patterns: &'a [Pattern<T>], value: &T) -> Option<&'a Pattern<T>> {
        patterns.iter().find(|pattern| pattern.evaluate(value))
    }
}
