use crate::app::menu::MENU;
use crate::domain::model::{PersonDetails, Student};
use crate::utils::error::{Field, RegistrarError, Result};
use std::io::{BufRead, ErrorKind, Write};

/// Prompts and messages for the registration menu.
///
/// Generic over its streams so the loop can run against stdin/stdout or
/// in-memory buffers.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn output_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", MENU)?;
        Ok(())
    }

    pub fn output_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn output_error_messages(
        &mut self,
        message: &str,
        error: Option<&RegistrarError>,
    ) -> Result<()> {
        writeln!(self.output, "ERROR: {}", message)?;
        if let Some(error) = error {
            writeln!(self.output, "Details: {}", error)?;
        }
        Ok(())
    }

    pub fn output_student_courses(&mut self, students: &[Student]) -> Result<()> {
        if students.is_empty() {
            writeln!(self.output, "No registrations found.")?;
            return Ok(());
        }
        for student in students {
            writeln!(
                self.output,
                "{} {} - {}",
                student.first_name(),
                student.last_name(),
                student.course_name()
            )?;
        }
        Ok(())
    }

    /// Shows `prompt` and reads one trimmed line. `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is consumed and reported as
    /// `InputError`; the next call reads the following line.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(RegistrarError::InputError(e)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn input_menu_choice(&mut self) -> Result<Option<String>> {
        self.prompt("Enter your choice (1-4): ")
    }

    /// Asks for the three fields in order, stopping at the first empty answer.
    /// `Ok(None)` means the input ended before all fields were given.
    pub fn input_student_data(&mut self) -> Result<Option<Student>> {
        let Some(first_name) = self.required("Enter the student's first name: ", Field::FirstName)?
        else {
            return Ok(None);
        };
        let Some(last_name) = self.required("Enter the student's last name: ", Field::LastName)?
        else {
            return Ok(None);
        };
        let Some(course_name) = self.required("Enter the course name: ", Field::CourseName)?
        else {
            return Ok(None);
        };
        Student::new(first_name, last_name, course_name).map(Some)
    }

    fn required(&mut self, prompt: &str, field: Field) -> Result<Option<String>> {
        match self.prompt(prompt)? {
            Some(value) if value.is_empty() => Err(RegistrarError::ValidationError { field }),
            other => Ok(other),
        }
    }
}
