//! Outcome of a seeding pass

use lexle_core::errors::ExError;
use lexle_core_types::PassId;

/// Step of `import_one` at which a file was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStage {
    Read,
    Parse,
    Lookup,
    SaveCategory,
}

impl ImportStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStage::Read => "read",
            ImportStage::Parse => "parse",
            ImportStage::Lookup => "lookup",
            ImportStage::SaveCategory => "save_category",
        }
    }
}

impl std::fmt::Display for ImportStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to one definition file
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// Category was created; some words may have failed
    Created {
        category_id: String,
        words_created: usize,
        words_failed: usize,
    },
    /// A category with the same name already existed; nothing was written
    Skipped { existing_category_id: String },
    /// The file was abandoned at `stage`
    Failed { stage: ImportStage, error: ExError },
}

/// Outcome of one file, keyed by its file name
#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub outcome: FileOutcome,
}

/// Summary of one `import_all` pass
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub pass_id: PassId,
    /// Files in processing order
    pub files: Vec<FileReport>,
    /// Set when the directory could not be listed; `files` is then empty
    pub listing_error: Option<ExError>,
}

impl ImportReport {
    pub fn new(pass_id: PassId) -> Self {
        Self {
            pass_id,
            files: Vec::new(),
            listing_error: None,
        }
    }

    pub fn push(&mut self, file: impl Into<String>, outcome: FileOutcome) {
        self.files.push(FileReport {
            file: file.into(),
            outcome,
        });
    }

    /// Outcome recorded for a file name
    pub fn outcome_for(&self, file: &str) -> Option<&FileOutcome> {
        self.files
            .iter()
            .find(|r| r.file == file)
            .map(|r| &r.outcome)
    }

    pub fn categories_created(&self) -> usize {
        self.files
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Created { .. }))
            .count()
    }

    pub fn words_created(&self) -> usize {
        self.files
            .iter()
            .map(|r| match r.outcome {
                FileOutcome::Created { words_created, .. } => words_created,
                _ => 0,
            })
            .sum()
    }

    pub fn words_failed(&self) -> usize {
        self.files
            .iter()
            .map(|r| match r.outcome {
                FileOutcome::Created { words_failed, .. } => words_failed,
                _ => 0,
            })
            .sum()
    }

    /// Files skipped because their category already existed
    pub fn files_skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Skipped { .. }))
            .count()
    }

    pub fn files_failed(&self) -> usize {
        self.files
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Failed { .. }))
            .count()
    }
}
