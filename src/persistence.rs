// File: src/persistence.rs
use crate::core::curriculum::Curriculum;
use crate::error::{LessonError, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `value` as pretty JSON, replacing `path` only once the whole
/// document is on disk.
pub fn save_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

pub fn save_curriculum(curriculum: &Curriculum, path: &Path) -> Result<()> {
    save_json(curriculum, path)
}

pub fn load_curriculum(path: &Path) -> Result<Curriculum> {
    if !path.is_file() {
        return Err(LessonError::MissingInput(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
