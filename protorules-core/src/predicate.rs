//! # Predicate Algebra
//!
//! Generic boolean combinators over unary predicates.
//!
//! A [`Predicate<T>`] wraps any `Fn(&T) -> bool` so that predicates can be stored, cloned
//! and passed around as data. Every combinator takes predicates and returns a new
//! [`Predicate<T>`], so they nest to arbitrary depth:
//!
//! ```rust
//! use protorules_core::predicate::{Predicate, all_of, any_of, not};
//!
//! let even = Predicate::new(|n: &i32| n % 2 == 0);
//! let positive = Predicate::new(|n: &i32| *n > 0);
//!
//! let odd_or_negative = any_of([not(even.clone()), not(positive.clone())]);
//! assert!(odd_or_negative.evaluate(&-4));
//! assert!(!odd_or_negative.evaluate(&4));
//!
//! assert!(all_of([even, positive]).evaluate(&4));
//! ```
//!
//! The n-ary combinators take any ordered collection. Over an empty collection
//! [`all_of`] is `true` and [`any_of`] is `false`.
use std::fmt::Debug;
use std::sync::Arc;

/// A shareable, thread-safe unary predicate over `T`.
pub struct Predicate<T: ?Sized> {
    f: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Predicate<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// A predicate that holds for every value.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// A predicate that holds for no value.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    pub fn evaluate(&self, value: &T) -> bool {
        (self.f)(value)
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T: ?Sized> Debug for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Predicate")
    }
}

impl<T, F> From<F> for Predicate<T>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<T: ?Sized + 'static> std::ops::Not for Predicate<T> {
    type Output = Predicate<T>;

    fn not(self) -> Self::Output {
        not(self)
    }
}

/// `not(p)(x) == !p(x)`
pub fn not<T: ?Sized + 'static>(p: impl Into<Predicate<T>>) -> Predicate<T> {
    let p = p.into();
    Predicate::new(move |value| !p.evaluate(value))
}

/// `and(p, q)(x) == p(x) && q(x)`
pub fn and<T: ?Sized + 'static>(
    p: impl Into<Predicate<T>>,
    q: impl Into<Predicate<T>>,
) -> Predicate<T> {
    let (p, q) = (p.into(), q.into());
    Predicate::new(move |value| p.evaluate(value) && q.evaluate(value))
}

/// `or(p, q)(x) == p(x) || q(x)`
pub fn or<T: ?Sized + 'static>(
    p: impl Into<Predicate<T>>,
    q: impl Into<Predicate<T>>,
) -> Predicate<T> {
    let (p, q) = (p.into(), q.into());
    Predicate::new(move |value| p.evaluate(value) || q.evaluate(value))
}

/// Holds iff every predicate holds. Vacuously true for an empty collection.
pub fn all_of<T: ?Sized + 'static>(
    predicates: impl IntoIterator<Item = Predicate<T>>,
) -> Predicate<T> {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |value| predicates.iter().all(|p| p.evaluate(value)))
}

/// Holds iff at least one predicate holds. False for an empty collection.
pub fn any_of<T: ?Sized + 'static>(
    predicates: impl IntoIterator<Item = Predicate<T>>,
) -> Predicate<T> {
    let predicates: Vec<_> = predicates.into_iter().collect();
    Predicate::new(move |value| predicates.iter().any(|p| p.evaluate(value)))
}
