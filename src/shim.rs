// In: src/shim.rs

//! The file-access shim sitting between the CLI and the core pipeline.
//!
//! The core works purely on byte buffers; this module is the only place that
//! touches the filesystem. A missing input path is surfaced as its own error
//! kind before the core ever runs, matching the boundary contract.

use std::path::Path;

use crate::error::DelaceError;

/// Reads the whole input file into a byte buffer.
pub fn read_input(path: &Path) -> Result<Vec<u8>, DelaceError> {
    if !path.is_file() {
        return Err(DelaceError::InputNotFound(path.display().to_string()));
    }
    Ok(std::fs::read(path)?)
}

/// Writes the whole output buffer to the given path.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), DelaceError> {
    std::fs::write(path, bytes)?;
    Ok(())
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_its_own_error_kind() {
        let result = read_input(Path::new("/definitely/not/a/real/input.jpeg"));
        assert!(matches!(result, Err(DelaceError::InputNotFound(_))));
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = std::env::temp_dir().join("delace_shim_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("roundtrip.bin");

        write_output(&path, &[1, 2, 3, 4]).unwrap();
        assert_eq!(read_input(&path).unwrap(), vec![1, 2, 3, 4]);

        std::fs::remove_file(&path).unwrap();
    }
}
