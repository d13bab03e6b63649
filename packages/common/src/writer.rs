use crate::error::CommonError;
use crate::generator::GeneratedFiles;
use crate::result::CommonResult;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Destination for generated files
pub trait OutputSink {
    /// Write `content` at `relative`, creating parent directories as needed
    fn write(&mut self, relative: &Path, content: &str) -> Result<PathBuf, std::io::Error>;
}

/// Writes files below a root directory on disk
pub struct FileSystemSink {
    root: PathBuf,
}

impl FileSystemSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FileSystemSink {
    fn write(&mut self, relative: &Path, content: &str) -> Result<PathBuf, std::io::Error> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// In-memory sink for testing
#[derive(Default)]
pub struct MemorySink {
    pub files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, relative: &Path, content: &str) -> Result<PathBuf, std::io::Error> {
        self.files.insert(relative.to_path_buf(), content.to_string());
        Ok(relative.to_path_buf())
    }
}

/// Turn a `/`-separated generated key into a relative path, rejecting keys
/// that would escape the output root
pub fn output_path(key: &str) -> CommonResult<PathBuf> {
    if key.is_empty() || key.starts_with('/') || key.starts_with('\\') {
        return Err(CommonError::InvalidOutputPath(key.to_string()));
    }

    let mut path = PathBuf::new();
    for segment in key.split('/').filter(|s| !s.is_empty()) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => path.push(part),
            _ => return Err(CommonError::InvalidOutputPath(key.to_string())),
        }
    }
    Ok(path)
}

/// Persist every generated file into `sink`, returning the written paths
///
/// All keys are validated before anything is written.
pub fn write_files(sink: &mut dyn OutputSink, files: &GeneratedFiles) -> CommonResult<Vec<PathBuf>> {
    let resolved = files
        .iter()
        .map(|(key, content)| output_path(key).map(|path| (path, content)))
        .collect::<CommonResult<Vec<_>>>()?;

    let mut written = Vec::with_capacity(resolved.len());
    for (relative, content) in resolved {
        let path = sink.write(&relative, content)?;
        debug!(path = %path.display(), bytes = content.len(), "Wrote generated file");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(entries: &[(&str, &str)]) -> GeneratedFiles {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_output_path_splits_on_slash() {
        let path = output_path("com/example/model/Trade.sample").unwrap();
        let expected: PathBuf = ["com", "example", "model", "Trade.sample"].iter().collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_output_path_rejects_escapes() {
        for key in ["", "/etc/passwd", "../Trade.sample", "model/../../x", "model/./x"] {
            assert!(
                matches!(output_path(key), Err(CommonError::InvalidOutputPath(_))),
                "{} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_write_files_to_memory() {
        let mut sink = MemorySink::new();
        let written = write_files(
            &mut sink,
            &files(&[("model/A.sample", "a"), ("model/B.sample", "b")]),
        )
        .unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(sink.files[&PathBuf::from("model").join("A.sample")], "a");
    }

    #[test]
    fn test_invalid_key_writes_nothing() {
        let mut sink = MemorySink::new();
        let result = write_files(
            &mut sink,
            &files(&[("model/A.sample", "a"), ("../B.sample", "b")]),
        );

        assert!(result.is_err());
        assert!(sink.files.is_empty());
    }

    #[test]
    fn test_write_files_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSystemSink::new(dir.path());

        write_files(&mut sink, &files(&[("com/example/Trade.sample", "class Trade {}\n")])).unwrap();

        let content =
            std::fs::read_to_string(dir.path().join("com/example/Trade.sample")).unwrap();
        assert_eq!(content, "class Trade {}\n");
        assert_eq!(sink.root(), dir.path());
    }
}
