//! Persistence of rendered diagrams.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error, info};

use crate::{
    DiagramError,
    catalog::{INDEX_DESCRIPTION, INDEX_TITLE},
    descriptor::DiagramDescriptor,
};

/// File name of the aggregated Markdown document.
pub const INDEX_FILE: &str = "index.md";

/// Writes descriptors as files under one output directory.
///
/// Existing files are replaced without warning.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes every descriptor to `<dir>/<name>.<extension>`, in order.
    ///
    /// The directory is created first if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Write`] for the first file that cannot be
    /// written, or [`DiagramError::Io`] when the directory cannot be created.
    pub fn write_all(&self, descriptors: &[DiagramDescriptor]) -> Result<Vec<PathBuf>, DiagramError> {
        self.ensure_dir()?;

        let mut written = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let path = self.dir.join(descriptor.file_name());
            self.write_file(&path, descriptor.content())?;
            written.push(path);
        }

        info!(
            dir:? = self.dir,
            files = written.len();
            "Diagrams written"
        );
        Ok(written)
    }

    /// Writes the descriptors and then `index.md` aggregating all of them.
    ///
    /// # Errors
    ///
    /// See [`OutputWriter::write_all`].
    pub fn write_all_with_index(
        &self,
        descriptors: &[DiagramDescriptor],
    ) -> Result<Vec<PathBuf>, DiagramError> {
        let mut written = self.write_all(descriptors)?;

        let path = self.dir.join(INDEX_FILE);
        self.write_file(&path, &render_index(descriptors))?;
        written.push(path);

        Ok(written)
    }

    fn ensure_dir(&self) -> Result<(), DiagramError> {
        if !self.dir.is_dir() {
            debug!(dir:? = self.dir; "Creating output directory");
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), DiagramError> {
        debug!(path:? = path, bytes = content.len(); "Writing file");
        fs::write(path, content).map_err(|err| {
            error!(path:? = path, err:err; "Failed to write file");
            DiagramError::write(path, err)
        })
    }
}

/// Builds the index document: a heading, a description, then one section per
/// descriptor in order.
pub fn render_index(descriptors: &[DiagramDescriptor]) -> String {
    let mut index = format!("# {INDEX_TITLE}\n\n{INDEX_DESCRIPTION}\n\n");
    for descriptor in descriptors {
        index.push_str(&format!(
            "## {}\n\n{}\n\n",
            descriptor.title(),
            descriptor.content()
        ));
    }
    index
}
