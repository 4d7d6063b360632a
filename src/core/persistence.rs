use crate::domain::model::Student;
use crate::domain::ports::Storage;
use crate::domain::record::Record;
use crate::utils::error::{RegistrarError, Result};
use std::io::ErrorKind;

/// Loads and saves the whole enrollment collection as one JSON array.
pub struct EnrollmentStore<S: Storage> {
    storage: S,
}

impl<S: Storage> EnrollmentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads every student from `path`.
    ///
    /// A missing file yields `NotFoundError`; the caller continues with an
    /// empty collection. Any bad record aborts the whole load and nothing
    /// decoded so far is returned.
    pub fn load(&self, path: &str) -> Result<Vec<Student>> {
        let bytes = self.storage.read_file(path).map_err(|e| match e {
            RegistrarError::IoError(io) if io.kind() == ErrorKind::NotFound => {
                RegistrarError::NotFoundError {
                    path: self.storage.display_path(path),
                }
            }
            other => other,
        })?;

        let records: Vec<Record> = serde_json::from_slice(&bytes)?;
        let students = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .decode()
                    .map_err(|source| RegistrarError::MalformedRecordError {
                        index,
                        source: Box::new(source),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} students from {}", students.len(), path);
        Ok(students)
    }

    /// Overwrites `path` with the given students, replacing prior content.
    pub fn save(&self, path: &str, students: &[Student]) -> Result<()> {
        let records: Vec<Record> = students.iter().map(Record::from).collect();
        let data = serde_json::to_vec(&records)?;
        self.storage.write_file(path, &data)?;

        tracing::debug!("Saved {} students to {}", students.len(), path);
        Ok(())
    }

    pub fn display_path(&self, path: &str) -> String {
        self.storage.display_path(path)
    }
}
