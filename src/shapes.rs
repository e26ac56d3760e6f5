//! Polymorphic dispatch through a trait with a default method.

use std::f64::consts::PI;

/// Anything that covers a surface.
pub trait Area {
    fn area(&self) -> f64;

    fn name(&self) -> &'static str;

    // Default method: implementors get it for free, but may override.
    fn describe(&self) -> String {
        format!("{} with area {:.2}", self.name(), self.area())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }

    pub fn square(side: f64) -> Self {
        Rectangle::new(side, side)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &'static str {
        if self.is_square() {
            "Square"
        } else {
            "Rectangle"
        }
    }

    // Overrides the default to show the sides as well.
    fn describe(&self) -> String {
        format!(
            "{} {}x{} with area {:.2}",
            self.name(),
            self.width,
            self.height,
            self.area()
        )
    }
}

pub fn total_area(shapes: &[Box<dyn Area>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

pub fn largest(shapes: &[Box<dyn Area>]) -> Option<&dyn Area> {
    shapes
        .iter()
        .max_by(|a, b| a.area().total_cmp(&b.area()))
        .map(|s| s.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> Vec<Box<dyn Area>> {
        vec![
            Box::new(Circle::new(1.0)),
            Box::new(Rectangle::new(2.0, 3.0)),
            Box::new(Rectangle::square(2.0)),
        ]
    }

    #[test]
    fn default_describe_is_used_by_circle() {
        let circle = Circle::new(1.0);
        assert_eq!(circle.radius(), 1.0);
        assert_eq!(circle.describe(), "Circle with area 3.14");
    }

    #[test]
    fn rectangle_overrides_describe() {
        assert_eq!(
            Rectangle::new(2.0, 3.0).describe(),
            "Rectangle 2x3 with area 6.00"
        );
        assert_eq!(Rectangle::square(2.0).name(), "Square");
    }

    #[test]
    fn total_area_sums_through_dyn_dispatch() {
        let total = total_area(&shapes());
        assert!((total - (PI + 6.0 + 4.0)).abs() < 1e-9);
    }

    #[test]
    fn largest_picks_max_area() {
        let all = shapes();
        assert_eq!(largest(&all).map(|s| s.area()), Some(6.0));
        assert!(largest(&[]).is_none());
    }
}
