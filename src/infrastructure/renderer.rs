// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::Builder;
use tracing::{debug, instrument};

/// Puts rendered pages where a browser can read them
#[derive(Debug, Default)]
pub struct ContentRenderer {
    // Keep last temp dir alive to prevent deletion
    _temp_dir: Option<Arc<tempfile::TempDir>>,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self { _temp_dir: None }
    }

    pub fn create_temp_file(&mut self, file_name: &str, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("articleview-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join(file_name);
        Self::write_file(&file_path, content)?;

        self._temp_dir = Some(Arc::new(temp_dir));

        Ok(file_path)
    }

    /// Write `content` to `path`, creating parent directories
    pub fn write_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        File::create(path)
            .with_context(|| format!("Failed to create file at {}", path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write page content")?;

        debug!(?path, bytes = content.len(), "Wrote page");
        Ok(())
    }

    #[instrument(level = "debug")]
    pub fn open_in_browser(&mut self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // The browser reads the file after we return; keep the temp dir a moment longer
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_page_when_creating_temp_file_then_file_holds_content() {
        let mut renderer = ContentRenderer::new();

        let path = renderer
            .create_temp_file("articles.html", "<html></html>")
            .expect("temp file");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
        assert!(path.ends_with("articles.html"));
    }

    #[test]
    fn given_nested_output_path_when_writing_then_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/site/article-42.html");

        ContentRenderer::write_file(&path, "<p>hi</p>").expect("written");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }
}
