// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{animal::Animal, person::Person};
use lineutils_core::Value;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
}

impl TestData {
    /// Number used as a sort key: age for people, legs for animals.
    #[must_use]
    pub const fn rank(&self) -> u32 {
        match self {
            Self::Person(p) => p.age,
            Self::Animal(a) => a.legs,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Animal(a) => &a.species,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Person(p) => p.to_value(),
            Self::Animal(a) => a.to_value(),
        }
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(p) => write!(f, "{p}"),
            Self::Animal(a) => write!(f, "{a}"),
        }
    }
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice".to_string(), 25))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob".to_string(), 30))
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person::new("Charlie".to_string(), 35))
}

pub fn person_diane() -> TestData {
    TestData::Person(Person::new("Diane".to_string(), 40))
}

pub fn person_dave() -> TestData {
    TestData::Person(Person::new("Dave".to_string(), 28))
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal::new("Dog".to_string(), 4))
}

pub fn animal_cat() -> TestData {
    TestData::Animal(Animal::new("Cat".to_string(), 4))
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal::new("Spider".to_string(), 8))
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal::new("Bird".to_string(), 2))
}

/// `{ n: <n> }`
pub fn point(n: i32) -> Value {
    Value::object([("n", Value::from(n))])
}

/// Render fixtures as dynamic values.
pub fn values(data: &[TestData]) -> Vec<Value> {
    data.iter().map(TestData::to_value).collect()
}
