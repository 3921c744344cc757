
use super::Role;
use crate::domain::errors::ValidationError;

/// Shortest accepted name, counted in characters after trimming
pub const MIN_NAME_LEN: usize = 3;

/// Represents a person in the directory
///
/// Fields are private: a `Person` only exists once its invariants hold, and
/// only changes through methods that re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: String,
    name: String,
    email: String,
    role: Role,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        name: impl AsRef<str>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name.as_ref())?;
        Ok(Self {
            id: id.into(),
            name,
            email: email.into(),
            role,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Rename, leaving the current name untouched if `new_name` is rejected
    pub fn change_name(&mut self, new_name: impl AsRef<str>) -> Result<(), ValidationError> {
        self.name = validate_name(new_name.as_ref())?;
        Ok(())
    }

    pub fn change_role(&mut self, role: Role) {
        self.role = role;
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    let actual = trimmed.chars().count();
    if actual < MIN_NAME_LEN {
        return Err(ValidationError::NameTooShort {
            min: MIN_NAME_LEN,
            actual,
        });
    }
    Ok(trimmed.to_string())
}
