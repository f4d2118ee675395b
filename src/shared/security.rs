use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum AI-BOM input size (100 MB)
/// Protects against feeding a runaway file into the in-memory parser
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is checked, not its target.
/// A path that does not exist yet passes: there is nothing to follow.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(VisualizerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Pass the real path instead of a symbolic link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file within the size limit
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| VisualizerError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(VisualizerError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input file is a symbolic link".to_string(),
            hint: "Pass the real path of the AI-BOM file".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(VisualizerError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(VisualizerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "AI-BOM documents are expected to be well below this limit".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_not_symlink(&file_path, "write").is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("not-yet-written.html");
        assert!(validate_not_symlink(&path, "write").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.html");
        let link = temp_dir.path().join("link.html");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_not_symlink(&link, "write");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Security violation"));
    }

    #[test]
    fn test_validate_input_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "{}").unwrap();

        assert!(validate_input_file(&file_path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_input_file_missing() {
        let result = validate_input_file(Path::new("/nonexistent/bom.json"), MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_validate_input_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_input_file(temp_dir.path(), MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Not a regular file"));
    }

    #[test]
    fn test_validate_input_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bom.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_input_file(&file_path, 5);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/bom.json");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
        assert!(validate_file_size(MAX_FILE_SIZE, &path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/bom.json");
        let result = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
