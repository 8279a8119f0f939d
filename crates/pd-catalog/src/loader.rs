use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use serde::de::DeserializeOwned;

use crate::types::{AssistantItem, Catalog, PromptItem};

/// Prompt documents, in display order (the grid never sorts).
pub const PROMPT_FILES: &[&str] =
    &["prompts/prompt-1.json", "prompts/prompt-2.json", "prompts/prompt-3.json"];

/// Assistant documents, in display order.
pub const ASSISTANT_FILES: &[&str] = &["gpts/gpt-1.json", "gpts/gpt-2.json", "gpts/gpt-3.json"];

#[derive(Debug)]
pub enum LoadError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
    /// A reader thread panicked before producing a result.
    Worker(PathBuf),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(path, e) => write!(f, "{}: {}", path.display(), e),
            LoadError::Parse(path, e) => write!(f, "{}: invalid JSON: {}", path.display(), e),
            LoadError::Worker(path) => write!(f, "{}: reader thread panicked", path.display()),
        }
    }
}

impl std::error::Error for LoadError {}

/// Load the full catalog from `root`. Each kind's batch reads its files on
/// worker threads; results are collected in configured file order.
///
/// All-or-nothing: any single read or parse failure fails the whole load.
/// No retry and no partial success; the caller logs the error and keeps an
/// empty catalog.
pub fn load_catalog(root: &Path) -> Result<Catalog, LoadError> {
    let prompts = read_batch::<PromptItem>(root, PROMPT_FILES)?;
    let assistants = read_batch::<AssistantItem>(root, ASSISTANT_FILES)?;
    Ok(Catalog { prompts, assistants })
}

/// Read and parse one batch of documents in parallel, preserving `files` order.
fn read_batch<T>(root: &Path, files: &[&str]) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned + Send,
{
    thread::scope(|s| {
        let handles: Vec<_> = files
            .iter()
            .map(|file| {
                let path = root.join(file);
                (path.clone(), s.spawn(move || read_one::<T>(&path)))
            })
            .collect();

        let mut items = Vec::with_capacity(handles.len());
        for (path, handle) in handles {
            match handle.join() {
                Ok(result) => items.push(result?),
                Err(_) => return Err(LoadError::Worker(path)),
            }
        }
        Ok(items)
    })
}

fn read_one<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&content).map_err(|e| LoadError::Parse(path.to_path_buf(), e))
}
