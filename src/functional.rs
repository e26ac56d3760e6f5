//! Closures and the `Fn`/`FnMut`/`FnOnce` traits.

use std::collections::BTreeMap;

pub type Supplier<T> = Box<dyn Fn() -> T>;
pub type Consumer<T> = Box<dyn Fn(&T)>;
pub type Function<A, B> = Box<dyn Fn(A) -> B>;
pub type BinaryOp = Box<dyn Fn(i64, i64) -> Option<i64>>;

/// `g` after `f`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

pub fn apply_twice<T>(f: impl Fn(T) -> T, x: T) -> T {
    f(f(x))
}

pub fn make_adder(n: i32) -> impl Fn(i32) -> i32 {
    move |x| x + n
}

/// Each call returns the next number; the count lives in the closure.
pub fn make_counter() -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

pub fn consume<F>(f: F) -> String
where
    F: FnOnce() -> String,
{
    f()
}

/// Binary operators looked up by symbol.
pub struct OperationTable {
    ops: BTreeMap<&'static str, BinaryOp>,
}

impl OperationTable {
    pub fn new() -> Self {
        OperationTable {
            ops: BTreeMap::new(),
        }
    }

    pub fn standard() -> Self {
        let mut table = OperationTable::new();
        table.register("+", Box::new(|a: i64, b: i64| a.checked_add(b)));
        table.register("-", Box::new(|a: i64, b: i64| a.checked_sub(b)));
        table.register("*", Box::new(|a: i64, b: i64| a.checked_mul(b)));
        table.register("/", Box::new(|a: i64, b: i64| a.checked_div(b)));
        table
    }

    pub fn register(&mut self, symbol: &'static str, op: BinaryOp) {
        self.ops.insert(symbol, op);
    }

    /// `None` for an unknown symbol or an overflowing/undefined result.
    pub fn apply(&self, symbol: &str, a: i64, b: i64) -> Option<i64> {
        self.ops.get(symbol).and_then(|op| op(a, b))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &&'static str> {
        self.ops.keys()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_runs_left_to_right() {
        let parse_then_double = compose(|s: &str| s.len(), |n: usize| n * 2);
        assert_eq!(parse_then_double("four"), 8);
    }

    #[test]
    fn apply_twice_and_adder() {
        assert_eq!(apply_twice(make_adder(3), 1), 7);
    }

    #[test]
    fn counter_keeps_state() {
        let mut next = make_counter();
        assert_eq!(next(), 1);
        assert_eq!(next(), 2);
        let mut other = make_counter();
        assert_eq!(other(), 1);
    }

    #[test]
    fn consume_moves_captured_value() {
        let owned = String::from("moved in");
        assert_eq!(consume(move || owned), "moved in");
    }

    #[test]
    fn boxed_aliases() {
        let supplier: Supplier<u8> = Box::new(|| 42);
        let to_upper: Function<&str, String> = Box::new(|s: &str| s.to_uppercase());
        let sink: Consumer<String> = Box::new(|s: &String| assert_eq!(s, "ABC"));
        assert_eq!(supplier(), 42);
        sink(&to_upper("abc"));
    }

    #[test]
    fn operation_table() {
        let table = OperationTable::standard();
        assert_eq!(table.apply("+", 2, 3), Some(5));
        assert_eq!(table.apply("/", 1, 0), None);
        assert_eq!(table.apply("%", 1, 1), None);
        assert_eq!(table.apply("*", i64::MAX, 2), None);
        assert_eq!(table.symbols().count(), 4);
    }
}
