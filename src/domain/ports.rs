use crate::utils::error::Result;

/// Whole-file byte access. Implementations open and release the file
/// within each call; no handle outlives an operation.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Human-readable location of `path`, used in console messages.
    fn display_path(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn file_name(&self) -> &str;
}
