//! Implements ReportSinkPort by writing reports into a directory.
//!
//! Never overwrites: a clash gets a ` (n)` suffix, like a browser download.

use crate::adapters::api::DEFAULT_REPORT_FILENAME;
use crate::domain::{DomainError, ReportFile};
use crate::ports::ReportSinkPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Directory-backed report storage.
pub struct ReportDir {
    dir: PathBuf,
}

impl ReportDir {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Final path component only; server-supplied names must not escape the directory.
    fn safe_name(filename: &str) -> String {
        Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty() && *n != "." && *n != "..")
            .unwrap_or(DEFAULT_REPORT_FILENAME)
            .to_string()
    }

    /// Candidate names: `name`, then `stem (1).ext`, `stem (2).ext`, ...
    fn candidate(&self, name: &str, n: u32) -> PathBuf {
        if n == 0 {
            return self.dir.join(name);
        }
        let path = Path::new(name);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);
        let numbered = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        self.dir.join(numbered)
    }

    /// Claim the first free name by creating it exclusively. The empty placeholder
    /// is replaced by the finished report; nobody else can claim the same name.
    async fn reserve_path(&self, name: &str) -> Result<PathBuf, DomainError> {
        let mut n = 0u32;
        loop {
            let candidate = self.candidate(name, n);
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate)
                .await
            {
                Ok(_) => return Ok(candidate),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => n += 1,
                Err(e) => {
                    return Err(DomainError::Report(format!(
                        "reserve {}: {}",
                        candidate.display(),
                        e
                    )));
                }
            }
        }
    }

    async fn write_into(&self, target: &Path, bytes: &[u8]) -> Result<(), DomainError> {
        let mut temp_name = target.file_name().unwrap_or_default().to_os_string();
        temp_name.push(".part");
        let temp_path = target.with_file_name(temp_name);

        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Report(format!("create temp file: {}", e)))?;
        f.write_all(bytes)
            .await
            .map_err(|e| DomainError::Report(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Report(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, target)
            .await
            .map_err(|e| DomainError::Report(format!("rename failed: {}", e)))
    }
}

#[async_trait::async_trait]
impl ReportSinkPort for ReportDir {
    /// Reserve a free name, then write-replace it: temp file, sync, rename.
    async fn save(&self, report: &ReportFile) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::Report(format!("create reports dir: {}", e)))?;

        let target = self.reserve_path(&Self::safe_name(&report.filename)).await?;
        if let Err(e) = self.write_into(&target, &report.bytes).await {
            let _ = fs::remove_file(&target).await;
            return Err(e);
        }

        let abs_path = target.canonicalize().unwrap_or_else(|_| target.clone());
        info!(path = %abs_path.display(), size = report.bytes.len(), "report saved");
        Ok(abs_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("loanvista-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_safe_name_strips_directories() {
        assert_eq!(ReportDir::safe_name("../../etc/passwd"), "passwd");
        assert_eq!(ReportDir::safe_name("report.png"), "report.png");
        assert_eq!(ReportDir::safe_name(".."), DEFAULT_REPORT_FILENAME);
        assert_eq!(ReportDir::safe_name(""), DEFAULT_REPORT_FILENAME);
    }

    #[tokio::test]
    async fn test_save_never_overwrites() {
        let dir = scratch_dir("save");
        let _ = fs::remove_dir_all(&dir).await;
        let sink = ReportDir::new(&dir);
        let report = ReportFile {
            filename: "r.png".to_string(),
            bytes: vec![1, 2, 3],
        };

        let first = sink.save(&report).await.unwrap();
        let second = sink.save(&report).await.unwrap();

        assert_eq!(first.file_name().unwrap(), "r.png");
        assert_eq!(second.file_name().unwrap(), "r (1).png");
        assert_eq!(fs::read(&second).await.unwrap(), vec![1, 2, 3]);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_existing_file_is_left_alone() {
        let dir = scratch_dir("existing");
        let _ = fs::remove_dir_all(&dir).await;
        fs::create_dir_all(&dir).await.unwrap();
        fs::write(dir.join("loan_application_report.png"), b"mine")
            .await
            .unwrap();
        let sink = ReportDir::new(&dir);

        let saved = sink
            .save(&ReportFile {
                filename: "loan_application_report.png".to_string(),
                bytes: vec![9],
            })
            .await
            .unwrap();

        assert_eq!(
            saved.file_name().unwrap(),
            "loan_application_report (1).png"
        );
        assert_eq!(
            fs::read(dir.join("loan_application_report.png")).await.unwrap(),
            b"mine".to_vec()
        );

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_reserved_names_are_distinct() {
        let dir = scratch_dir("reserve");
        let _ = fs::remove_dir_all(&dir).await;
        fs::create_dir_all(&dir).await.unwrap();
        let sink = ReportDir::new(&dir);

        let a = sink.reserve_path("r.png").await.unwrap();
        let b = sink.reserve_path("r.png").await.unwrap();
        let c = sink.reserve_path("notes").await.unwrap();
        let d = sink.reserve_path("notes").await.unwrap();

        assert_eq!(a.file_name().unwrap(), "r.png");
        assert_eq!(b.file_name().unwrap(), "r (1).png");
        assert_eq!(c.file_name().unwrap(), "notes");
        assert_eq!(d.file_name().unwrap(), "notes (1)");

        let _ = fs::remove_dir_all(&dir).await;
    }
}
