pub const DOG_SPECIES: &str = "dog";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dog<'a> {
    name: &'a str,
    species: &'static str,
}

impl<'a> Dog<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            species: DOG_SPECIES,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn species(&self) -> &'static str {
        self.species
    }
}

impl core::fmt::Display for Dog<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.species)
    }
}

/// Fluent builder for [`Dog`]. `build` can be called any number of times.
#[derive(Clone, Copy, Debug)]
pub struct DogBuilder<'a> {
    name: &'a str,
}

impl<'a> DogBuilder<'a> {
    pub fn new() -> Self {
        Self { name: "" }
    }

    pub fn with_name(mut self, value: &'a str) -> Self {
        self.name = value;
        self
    }

    pub fn build(&self) -> Dog<'a> {
        Dog::new(self.name)
    }
}

impl Default for DogBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn named_dog() {
        let dog = DogBuilder::new().with_name("Rex").build();
        assert_eq!(dog.name(), "Rex");
        assert_eq!(dog.species(), "dog");
    }

    #[test]
    fn unnamed_dog() {
        let dog = DogBuilder::default().build();
        assert_eq!(dog.name(), "");
        assert_eq!(dog.species(), DOG_SPECIES);
    }

    #[test]
    fn last_name_wins() {
        let dog = DogBuilder::new().with_name("Rex").with_name("Fido").build();
        assert_eq!(dog, Dog::new("Fido"));
    }

    #[test]
    fn display() {
        assert_eq!(Dog::new("Rex").to_string(), "Rex (dog)");
    }
}
