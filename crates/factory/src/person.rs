use std::fmt;

use tracing::debug;

use crate::{Factory, FactoryError, InputSource};

pub const NAME_PROMPT: &str = "Enter name: ";
pub const AGE_PROMPT: &str = "Enter age: ";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} years old", self.name, self.age)
    }
}

/// Builds a [`Person`] from two answers: a name, then an age.
///
/// A malformed age fails the call with [`FactoryError::InvalidAge`]; asking
/// again is left to the caller.
#[derive(Debug)]
pub struct PersonFactory<I> {
    input: I,
}

impl<I: InputSource> PersonFactory<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: InputSource> Factory for PersonFactory<I> {
    type Output = Person;
    type Error = FactoryError;

    fn create(&mut self) -> Result<Person, FactoryError> {
        let name = self.input.read_line(NAME_PROMPT)?;
        let raw_age = self.input.read_line(AGE_PROMPT)?;
        let age = parse_age(&raw_age)?;

        debug!(name = %name, age, "person created");
        Ok(Person { name, age })
    }
}

fn parse_age(raw: &str) -> Result<i32, FactoryError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|source| FactoryError::InvalidAge {
            input: trimmed.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedInput;

    #[test]
    fn display_matches_console_format() {
        assert_eq!(Person::new("Ann", 30).to_string(), "Ann, 30 years old");
    }

    #[test]
    fn asks_for_name_then_age() {
        let mut factory = PersonFactory::new(ScriptedInput::new(["Ann", " 30 "]));
        assert_eq!(factory.create().unwrap(), Person::new("Ann", 30));
        assert_eq!(factory.input().prompts(), [NAME_PROMPT, AGE_PROMPT]);
    }

    #[test]
    fn negative_age_parses() {
        let mut factory = PersonFactory::new(ScriptedInput::new(["Ann", "-1"]));
        assert_eq!(factory.create().unwrap().age, -1);
    }

    #[test]
    fn rejects_non_integer_age() {
        for bad in ["thirty", "", "3.5", "99999999999"] {
            let mut factory = PersonFactory::new(ScriptedInput::new(["Ann", bad]));
            match factory.create() {
                Err(FactoryError::InvalidAge { input, .. }) => assert_eq!(input, bad),
                other => panic!("expected InvalidAge for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_age_is_end_of_input() {
        let mut factory = PersonFactory::new(ScriptedInput::new(["Ann"]));
        assert!(matches!(factory.create(), Err(FactoryError::EndOfInput)));
    }
}
