use crate::utils::error::{Field, Result};
use crate::utils::validation::validate_required_text;

/// Read access shared by every entity that carries a person's name.
pub trait PersonDetails {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }
}

/// A person with a non-empty first and last name.
///
/// Fields are private: every write goes through a setter that validates,
/// so an instance with an empty name component cannot be observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Result<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_required_text(Field::FirstName, &first_name)?;
        validate_required_text(Field::LastName, &last_name)?;
        Ok(Self {
            first_name,
            last_name,
        })
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate_required_text(Field::FirstName, &value)?;
        self.first_name = value;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate_required_text(Field::LastName, &value)?;
        self.last_name = value;
        Ok(())
    }
}

impl PersonDetails for Person {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// A person registered for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    person: Person,
    course_name: String,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Result<Self> {
        let person = Person::new(first_name, last_name)?;
        let course_name = course_name.into();
        validate_required_text(Field::CourseName, &course_name)?;
        Ok(Self {
            person,
            course_name,
        })
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<()> {
        self.person.set_last_name(value)
    }

    pub fn set_course_name(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        validate_required_text(Field::CourseName, &value)?;
        self.course_name = value;
        Ok(())
    }
}

impl PersonDetails for Student {
    fn first_name(&self) -> &str {
        self.person.first_name()
    }

    fn last_name(&self) -> &str {
        self.person.last_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RegistrarError;

    fn field_of(err: RegistrarError) -> Field {
        match err {
            RegistrarError::ValidationError { field } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_student_construction() {
        let student = Student::new("Jane", "Doe", "CS101").unwrap();
        assert_eq!(student.first_name(), "Jane");
        assert_eq!(student.last_name(), "Doe");
        assert_eq!(student.course_name(), "CS101");
        assert_eq!(student.full_name(), "Jane Doe");
    }

    #[test]
    fn test_each_empty_field_is_rejected() {
        assert_eq!(field_of(Student::new("", "Doe", "CS101").unwrap_err()), Field::FirstName);
        assert_eq!(field_of(Student::new("Jane", "", "CS101").unwrap_err()), Field::LastName);
        assert_eq!(field_of(Student::new("Jane", "Doe", "").unwrap_err()), Field::CourseName);
        assert_eq!(field_of(Person::new("Jane", "").unwrap_err()), Field::LastName);
    }

    #[test]
    fn test_first_failing_field_wins() {
        assert_eq!(field_of(Student::new("", "", "").unwrap_err()), Field::FirstName);
    }

    #[test]
    fn test_model_does_not_trim() {
        let student = Student::new(" ", "Doe", "CS101").unwrap();
        assert_eq!(student.first_name(), " ");
    }

    #[test]
    fn test_setters_validate_and_keep_previous_value() {
        let mut student = Student::new("Jane", "Doe", "CS101").unwrap();

        assert!(student.set_course_name("").is_err());
        assert_eq!(student.course_name(), "CS101");
        assert!(student.set_first_name("").is_err());
        assert_eq!(student.first_name(), "Jane");
        assert_eq!(field_of(student.set_last_name("").unwrap_err()), Field::LastName);
        assert_eq!(student.last_name(), "Doe");

        student.set_last_name("Smith").unwrap();
        student.set_course_name("MATH200").unwrap();
        assert_eq!(student.last_name(), "Smith");
        assert_eq!(student.course_name(), "MATH200");
    }

    #[test]
    fn test_person_setters_validate() {
        let mut person = Person::new("Jane", "Doe").unwrap();
        assert_eq!(field_of(person.set_first_name("").unwrap_err()), Field::FirstName);
        assert_eq!(field_of(person.set_last_name("").unwrap_err()), Field::LastName);
        person.set_first_name("Janet").unwrap();
        assert_eq!(person.full_name(), "Janet Doe");
    }
}
