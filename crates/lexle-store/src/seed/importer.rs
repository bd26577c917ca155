//! Seed importer
//!
//! Walks a directory of definition files and creates each described category
//! and its words, unless a category with the same name already exists.
//!
//! Every failure is local: a file that cannot be listed, read, parsed or
//! saved is logged and skipped, and a word that cannot be saved is logged
//! and skipped without touching its siblings or its category. Nothing here
//! returns an error to the caller.

use crate::errors::{io_error, Result};
use crate::seed::parser::{parse_definition_bytes, DefinitionFormat};
use crate::seed::report::{FileOutcome, ImportReport, ImportStage};
use lexle_core::errors::ExError;
use lexle_core::ops::RecordStore;
use lexle_core::{log_op_end, log_op_skip, log_op_start};
use lexle_core_types::PassId;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

const OP_IMPORT_ALL: &str = "seed_import_all";
const OP_IMPORT_FILE: &str = "seed_import_file";
const OP_SAVE_WORD: &str = "seed_save_word";

/// Import every definition file in `dir`
///
/// Files are processed in ascending file-name order. A directory that cannot
/// be listed yields a report with `listing_error` set and no files.
///
/// The existence check and the create that follows are not atomic: the
/// caller must be the only writer to `store` for the duration of the pass,
/// and should run one pass per process start.
pub fn import_all<S: RecordStore + ?Sized>(store: &mut S, dir: &Path) -> ImportReport {
    let pass_id = PassId::new();
    let span = tracing::info_span!("seeding_pass", pass_id = %pass_id);
    let _entered = span.enter();

    let started = Instant::now();
    log_op_start!(OP_IMPORT_ALL, dir = %dir.display());

    let mut report = ImportReport::new(pass_id);

    let paths = match list_definition_files(dir) {
        Ok(paths) => paths,
        Err(err) => {
            log_op_skip!(OP_IMPORT_ALL, err.clone(), dir = %dir.display());
            report.listing_error = Some(err);
            log_op_end!(
                OP_IMPORT_ALL,
                duration_ms = started.elapsed().as_millis() as u64,
                files = 0u64
            );
            return report;
        }
    };

    for path in paths {
        let outcome = import_one(store, &path);
        report.push(file_label(&path), outcome);
    }

    log_op_end!(
        OP_IMPORT_ALL,
        duration_ms = started.elapsed().as_millis() as u64,
        files = report.files.len() as u64,
        categories_created = report.categories_created() as u64,
        words_created = report.words_created() as u64,
        words_failed = report.words_failed() as u64
    );

    report
}

/// Import a single definition file
///
/// Creates the category and then each word in file order. Returns
/// `Skipped` without writing anything when a category of the same name is
/// already stored, whatever its flags or words.
pub fn import_one<S: RecordStore + ?Sized>(store: &mut S, path: &Path) -> FileOutcome {
    let file = file_label(path);

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return abandon(&file, ImportStage::Read, io_error("read_definition", e)),
    };

    let definition = match parse_definition_bytes(&bytes, DefinitionFormat::from_path(path)) {
        Ok(definition) => definition,
        Err(err) => return abandon(&file, ImportStage::Parse, err),
    };

    match store.find_category_by_name(&definition.name) {
        Ok(Some(existing)) => {
            tracing::debug!(
                file = %file,
                category = %definition.name,
                category_id = %existing.id,
                "Category already present, skipping file"
            );
            return FileOutcome::Skipped {
                existing_category_id: existing.id,
            };
        }
        Ok(None) => {}
        Err(err) => return abandon(&file, ImportStage::Lookup, err),
    }

    tracing::info!(file = %file, category = %definition.name, "Importing category");

    let category = match store.save_category(&definition.to_new_category()) {
        Ok(category) => category,
        Err(err) => return abandon(&file, ImportStage::SaveCategory, err),
    };

    let mut words_created = 0;
    let mut words_failed = 0;
    for word in &definition.words {
        match store.save_word(&word.to_new_word(&category.id)) {
            Ok(_) => words_created += 1,
            Err(err) => {
                words_failed += 1;
                log_op_skip!(
                    OP_SAVE_WORD,
                    err.with_file(file.as_str()),
                    file = %file,
                    category = %definition.name,
                    word = %word.word
                );
            }
        }
    }

    tracing::debug!(
        file = %file,
        category_id = %category.id,
        words_created,
        words_failed,
        "Category imported"
    );

    FileOutcome::Created {
        category_id: category.id,
        words_created,
        words_failed,
    }
}

/// Entries of `dir`, sorted by file name
fn list_definition_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()
        })
        .map_err(|e| io_error("list_definitions", e).with_file(dir.display().to_string()))?;

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn abandon(file: &str, stage: ImportStage, err: ExError) -> FileOutcome {
    let error = err.with_file(file);
    log_op_skip!(OP_IMPORT_FILE, error.clone(), file = %file, stage = %stage);
    FileOutcome::Failed { stage, error }
}
