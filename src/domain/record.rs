use crate::domain::model::{PersonDetails, Student};
use crate::utils::error::{Field, RegistrarError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat key-value form of a [`Student`], as stored in the backing file.
///
/// Kept as a raw JSON object so that a missing key can be told apart from
/// an empty value when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn encode(student: &Student) -> Self {
        let mut data = Map::new();
        data.insert(
            Field::FirstName.key().to_string(),
            Value::String(student.first_name().to_string()),
        );
        data.insert(
            Field::LastName.key().to_string(),
            Value::String(student.last_name().to_string()),
        );
        data.insert(
            Field::CourseName.key().to_string(),
            Value::String(student.course_name().to_string()),
        );
        Self { data }
    }

    /// Builds a [`Student`], re-running entity validation. Keys other than
    /// the three known ones are ignored.
    pub fn decode(&self) -> Result<Student> {
        let first_name = self.text(Field::FirstName)?;
        let last_name = self.text(Field::LastName)?;
        let course_name = self.text(Field::CourseName)?;
        Student::new(first_name, last_name, course_name)
    }

    fn text(&self, field: Field) -> Result<&str> {
        match self.data.get(field.key()) {
            None => Err(RegistrarError::MissingFieldError { field: field.key() }),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(RegistrarError::InvalidFieldTypeError { field: field.key() }),
        }
    }
}

impl From<&Student> for Record {
    fn from(student: &Student) -> Self {
        Record::encode(student)
    }
}

impl TryFrom<&Record> for Student {
    type Error = RegistrarError;

    fn try_from(record: &Record) -> Result<Self> {
        record.decode()
    }
}
