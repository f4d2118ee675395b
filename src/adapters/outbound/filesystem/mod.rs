/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;

pub use file_reader::FileInputSource;
pub use file_writer::{default_output_path, FileSystemWriter};
