mod dog;
pub use dog::*;

mod person;
pub use person::*;

/// Anything a [`Person`] can own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pet<'a> {
    Dog(Dog<'a>),
}

impl<'a> Pet<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Self::Dog(dog) => dog.name(),
        }
    }

    pub fn species(&self) -> &'static str {
        match self {
            Self::Dog(dog) => dog.species(),
        }
    }
}

impl<'a> From<Dog<'a>> for Pet<'a> {
    fn from(value: Dog<'a>) -> Self {
        Self::Dog(value)
    }
}

impl core::fmt::Display for Pet<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dog(dog) => core::fmt::Display::fmt(dog, f),
        }
    }
}
