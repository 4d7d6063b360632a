use crate::app::console::Console;
use crate::app::menu::MenuChoice;
use crate::core::persistence::EnrollmentStore;
use crate::domain::model::Student;
use crate::domain::ports::Storage;
use crate::utils::error::{ErrorCategory, RegistrarError, Result};
use std::io::{BufRead, Write};

/// Owns the in-memory registrations for the life of the process and runs
/// the menu against them.
pub struct Registrar<S: Storage> {
    store: EnrollmentStore<S>,
    file_name: String,
    students: Vec<Student>,
}

impl<S: Storage> Registrar<S> {
    pub fn new(store: EnrollmentStore<S>, file_name: impl Into<String>) -> Self {
        Self {
            store,
            file_name: file_name.into(),
            students: Vec::new(),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Replaces the in-memory collection with the backing file's content.
    /// Failures are reported on the console and leave the collection empty.
    pub fn load_existing<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        self.students.clear();
        match self.store.load(&self.file_name) {
            Ok(students) => {
                tracing::info!("Loaded {} registrations", students.len());
                self.students = students;
            }
            Err(e) if e.category() == ErrorCategory::NotFound => {
                tracing::info!("{}", e);
                console.output_message(&e.to_string())?;
            }
            Err(e) => {
                tracing::warn!("Load failed: {} ({})", e, e.recovery_suggestion());
                console.output_error_messages(
                    "An unexpected error occurred while reading the file.",
                    Some(&e),
                )?;
            }
        }
        Ok(())
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Unreadable answers are reported and the menu is shown again. Only
    /// failures of the console streams themselves are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            console.output_menu()?;
            let answer = match console.input_menu_choice() {
                Ok(Some(answer)) => answer,
                Ok(None) => {
                    tracing::debug!("Input closed, leaving menu loop");
                    break;
                }
                Err(e @ RegistrarError::InputError(_)) => {
                    tracing::warn!("Unreadable menu choice: {}", e);
                    console.output_error_messages(
                        "An unexpected error occurred while getting menu choice.",
                        Some(&e),
                    )?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Register) => self.register(console)?,
                Some(MenuChoice::Show) => console.output_student_courses(&self.students)?,
                Some(MenuChoice::Save) => self.save(console)?,
                Some(MenuChoice::Exit) => {
                    console.output_message("Exiting program. Goodbye!")?;
                    break;
                }
                None => {
                    tracing::debug!("Rejected menu input {:?}", answer);
                    console.output_message("Invalid choice. Please select a valid option (1-4).")?;
                }
            }
        }
        Ok(())
    }

    fn register<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        match console.input_student_data() {
            Ok(Some(student)) => {
                tracing::debug!("Registered {:?}", student);
                self.students.push(student);
            }
            Ok(None) => {}
            Err(e) if e.category() == ErrorCategory::Validation => {
                tracing::warn!("Registration rejected: {}", e);
                console.output_error_messages(&e.user_friendly_message(), Some(&e))?;
            }
            Err(e @ RegistrarError::InputError(_)) => {
                tracing::warn!("Unreadable student data: {}", e);
                console.output_error_messages(
                    "An unexpected error occurred while getting student data.",
                    Some(&e),
                )?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn save<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        match self.store.save(&self.file_name, &self.students) {
            Ok(()) => {
                let path = self.store.display_path(&self.file_name);
                console.output_message(&format!("Data saved to '{}'.", path))?;
            }
            Err(e) => {
                tracing::warn!("Save failed: {} ({})", e, e.recovery_suggestion());
                console.output_error_messages(
                    "An unexpected error occurred while writing to the file.",
                    Some(&e),
                )?;
            }
        }
        Ok(())
    }
}
