use super::Pet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Person<'a> {
    name: &'a str,
    age: i32,
    pets: &'a [Pet<'a>],
}

impl<'a> Person<'a> {
    pub fn new(name: &'a str, age: i32, pets: &'a [Pet<'a>]) -> Self {
        Self { name, age, pets }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn pets(&self) -> &'a [Pet<'a>] {
        self.pets
    }
}

impl core::fmt::Display for Person<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}", self.name, self.age)?;
        if !self.pets.is_empty() {
            write!(f, " with {} pet(s)", self.pets.len())?;
        }
        Ok(())
    }
}

/// Fluent builder for [`Person`]. Unset fields default to an empty name, age 0 and no pets.
#[derive(Clone, Copy, Debug)]
pub struct PersonBuilder<'a> {
    age: i32,
    name: &'a str,
    pets: &'a [Pet<'a>],
}

impl<'a> PersonBuilder<'a> {
    pub fn new() -> Self {
        Self {
            age: 0,
            name: "",
            pets: &[],
        }
    }

    pub fn with_age(mut self, value: i32) -> Self {
        self.age = value;
        self
    }

    pub fn with_name(mut self, value: &'a str) -> Self {
        self.name = value;
        self
    }

    pub fn with_pets(mut self, value: &'a [Pet<'a>]) -> Self {
        self.pets = value;
        self
    }

    pub fn build(&self) -> Person<'a> {
        Person::new(self.name, self.age, self.pets)
    }
}

impl Default for PersonBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Dog, DogBuilder};

    #[test]
    fn chained_fields() {
        let person = PersonBuilder::new().with_age(1).with_name("Chris").build();

        assert_eq!(person.age(), 1);
        assert_eq!(person.name(), "Chris");
        assert!(person.pets().is_empty());
    }

    #[test]
    fn defaults() {
        let person = PersonBuilder::new().build();
        assert_eq!(person, Person::new("", 0, &[]));
        assert_eq!(PersonBuilder::default().build(), person);
    }

    #[test]
    fn build_twice_gives_equal_values() {
        let builder = PersonBuilder::new().with_name("Chris").with_age(30);
        let first = builder.build();
        let second = builder.build();
        assert_eq!(first, second);
    }

    #[test]
    fn builder_keeps_accumulating_after_build() {
        let builder = PersonBuilder::new().with_name("Chris");
        let before = builder.build();
        let after = builder.with_age(2).build();

        assert_eq!(before.age(), 0, "earlier value is unaffected");
        assert_eq!(after.age(), 2);
        assert_eq!(after.name(), "Chris");
    }

    #[test]
    fn with_pets() {
        let pets = [
            Pet::from(DogBuilder::new().with_name("Rex").build()),
            Dog::new("Fido").into(),
        ];
        let person = PersonBuilder::new()
            .with_name("Chris")
            .with_pets(&pets)
            .build();

        assert_eq!(person.pets().len(), 2);
        assert_eq!(person.pets()[0].name(), "Rex");
        assert_eq!(person.pets()[1].species(), "dog");
        assert_eq!(person.to_string(), "Chris, 0 with 2 pet(s)");
    }

    #[test]
    fn display_without_pets() {
        let person = PersonBuilder::new().with_age(1).with_name("Chris").build();
        assert_eq!(person.to_string(), "Chris, 1");
    }
}
