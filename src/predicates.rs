//! Composable predicates: a trait with default combinators plus a blanket
//! impl so any `Fn(&T) -> bool` closure is a predicate.

pub trait Predicate<T: ?Sized> {
    fn test(&self, value: &T) -> bool;

    fn and<P>(self, other: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And(self, other)
    }

    fn or<P>(self, other: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or(self, other)
    }

    fn negate(self) -> Negate<Self>
    where
        Self: Sized,
    {
        Negate(self)
    }
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn test(&self, value: &T) -> bool {
        self.0.test(value) && self.1.test(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn test(&self, value: &T) -> bool {
        self.0.test(value) || self.1.test(value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Negate<A>(A);

impl<T: ?Sized, A: Predicate<T>> Predicate<T> for Negate<A> {
    fn test(&self, value: &T) -> bool {
        !self.0.test(value)
    }
}

/// Predicate that matches values equal to `target`.
pub fn is_equal<T: PartialEq>(target: T) -> impl Predicate<T> {
    move |value: &T| *value == target
}

pub fn filter<'a, T, P>(items: &'a [T], predicate: &P) -> Vec<&'a T>
where
    P: Predicate<T>,
{
    items.iter().filter(|item| predicate.test(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{sample_people, Person};

    #[test]
    fn closures_are_predicates() {
        let even = |n: &i32| n % 2 == 0;
        assert!(even.test(&4));
        assert!(!even.test(&5));
    }

    #[test]
    fn combinators_compose() {
        let positive = |n: &i32| *n > 0;
        let even = |n: &i32| n % 2 == 0;

        let positive_and_even = positive.and(even);
        assert!(positive_and_even.test(&2));
        assert!(!positive_and_even.test(&-2));

        let positive_or_even = positive.or(even);
        assert!(positive_or_even.test(&-2));
        assert!(!positive_or_even.test(&-3));

        let odd = even.negate();
        assert!(odd.test(&3));
    }

    #[test]
    fn filter_people() {
        let people = sample_people();
        let adult = |p: &Person| p.is_adult();
        let starts_with_a = |p: &Person| p.name.starts_with('A');

        let adults = filter(&people, &adult);
        assert_eq!(adults.len(), 4);

        let minors_or_anna = filter(&people, &adult.negate().or(starts_with_a));
        let names: Vec<&str> = minors_or_anna.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Anna", "Ben", "David"]);
    }

    #[test]
    fn is_equal_matches_target() {
        let words = ["tea", "coffee", "tea"];
        let hits = filter(&words, &is_equal("tea"));
        assert_eq!(hits.len(), 2);
    }
}
