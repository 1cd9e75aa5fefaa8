//! Workspace definition and helper
use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
    process::Command,
};

use crate::{cli::Cli, Error};

/// Workspace, where output products are generated
pub struct Workspace {
    /// Root Fullpath
    pub root: PathBuf,
}

impl Workspace {
    /// Builds a new workspace either
    ///  1. from -w workspace CLI argument
    ///  2. or defaults to ./WORKSPACE
    pub fn new(cli: &Cli) -> Result<Self, Error> {
        let root = match cli.workspace() {
            Some(path) => path.to_path_buf(),
            None => Path::new("WORKSPACE").to_path_buf(),
        };
        Self::from_root(root)
    }

    fn from_root(root: PathBuf) -> Result<Self, Error> {
        // make sure workspace does exists, otherwise create it
        create_dir_all(&root).map_err(|source| Error::Workspace {
            path: root.clone(),
            source,
        })?;
        info!("workspace is \"{}\"", root.display());
        Ok(Self { root })
    }

    /// Creates new file within this workspace.
    pub fn create_file(&self, filename: &str) -> Result<File, Error> {
        let fullpath = self.root.join(filename);
        let fd = File::create(&fullpath).map_err(|source| Error::Workspace {
            path: fullpath.clone(),
            source,
        })?;
        debug!("\"{}\" created", fullpath.display());
        Ok(fd)
    }

    /// Opens given file with prefered web browser
    #[cfg(target_os = "linux")]
    pub fn open_with_web_browser(&self, filename: &str) {
        let fullpath = self.root.join(filename).to_string_lossy().to_string();
        let web_browsers = vec!["firefox", "chromium"];
        for browser in web_browsers {
            let child = Command::new(browser).arg(fullpath.clone()).spawn();
            if child.is_ok() {
                return;
            }
        }
        warn!("no web browser to open \"{}\"", fullpath);
    }

    /// Opens given file with prefered web browser
    #[cfg(target_os = "macos")]
    pub fn open_with_web_browser(&self, filename: &str) {
        let fullpath = self.root.join(filename).to_string_lossy().to_string();
        if let Err(e) = Command::new("open").args([fullpath]).output() {
            warn!("can't open HTML content automatically: {}", e);
        }
    }

    /// Opens given file with prefered web browser
    #[cfg(target_os = "windows")]
    pub fn open_with_web_browser(&self, filename: &str) {
        let fullpath = self.root.join(filename).to_string_lossy().to_string();
        if let Err(e) = Command::new("cmd")
            .arg("/C")
            .arg(format!(r#"start {}"#, fullpath))
            .output()
        {
            warn!("failed to open generated HTML content: {}", e);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    #[test]
    fn workspace_creation() {
        let root = std::env::temp_dir()
            .join("gnss-trials-cli-workspace")
            .join("session");
        let workspace = Workspace::from_root(root.clone()).unwrap();
        assert!(root.is_dir());

        let mut fd = workspace.create_file("test.html").unwrap();
        write!(fd, "<html></html>").unwrap();
        assert!(root.join("test.html").is_file());

        let _ = std::fs::remove_dir_all(root);
    }
}
