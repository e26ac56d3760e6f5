//! A small record type used as the subject for sorting and filtering.

use std::fmt;

pub const ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Anna", 34),
        Person::new("Ben", 17),
        Person::new("Clara", 52),
        Person::new("David", 12),
        Person::new("Emma", 34),
        Person::new("Felix", 18),
    ]
}

// `sort_by_key` is stable, so equal ages keep their input order.
pub fn sort_by_age(people: &mut [Person]) {
    people.sort_by_key(|p| p.age);
}

pub fn sort_by_name(people: &mut [Person]) {
    people.sort_by(|a, b| a.name.cmp(&b.name));
}

pub fn oldest(people: &[Person]) -> Option<&Person> {
    people.iter().max_by_key(|p| p.age)
}
