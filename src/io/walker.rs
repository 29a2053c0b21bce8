use crate::config::{ErrorPolicy, ExtensionMode, EXCLUDED_DIR_FRAGMENTS};
use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Recursive file discovery under a root directory.
///
/// Traversal is plain filesystem order with the standard gitignore-style
/// filters disabled; the extension allow-list and the fixed directory
/// fragments decide what is kept. A root that does not exist yields an
/// empty result rather than an error.
pub struct FileWalker {
    root: PathBuf,
    mode: ExtensionMode,
    exclude_patterns: Vec<String>,
    error_policy: ErrorPolicy,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            mode: ExtensionMode::default(),
            exclude_patterns: vec![],
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExtensionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            debug!("root {} does not exist, nothing to discover", self.root.display());
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(&self.root).standard_filters(false).build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => match self.error_policy {
                    ErrorPolicy::Abort => return Err(err.into()),
                    ErrorPolicy::Skip => {
                        warn!("skipping unreadable path: {err}");
                        continue;
                    }
                },
            };

            let path = entry.path();
            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        if !self.mode.allows(ext) {
            return false;
        }

        // Fragments match the parent directory path, so a file merely
        // named `conda.md` at the root is still discovered
        if let Some(parent) = path.parent() {
            let parent_str = normalize_separators(parent);
            if EXCLUDED_DIR_FRAGMENTS
                .iter()
                .any(|fragment| parent_str.contains(fragment))
            {
                debug!("excluding {} (directory fragment)", path.display());
                return false;
            }
        }

        let path_str = normalize_separators(path);
        for pattern in &self.exclude_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                debug!("excluding {} (pattern {pattern})", path.display());
                return false;
            }
        }

        true
    }
}

/// Path rendered with forward slashes regardless of platform.
pub fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// The last `n` slash-separated segments of a path, slash-joined; shorter
/// paths come back whole.
pub fn tail_segments(path: &Path, n: usize) -> String {
    let normalized = normalize_separators(path);
    let segments: Vec<&str> = normalized.split('/').collect();
    let start = segments.len().saturating_sub(n);
    segments[start..].join("/")
}
