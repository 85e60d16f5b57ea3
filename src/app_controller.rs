/*!
 * Application controller.
 *
 * Drives the two user-facing operations: suggesting a title for a document and
 * renaming the document with the suggested title. Rename supports a dry-run
 * mode and an interactive overwrite confirmation.
 */

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::analysis::AnalysisService;
use crate::app_config::Config;
use crate::file_utils::FileManager;

/// Main application controller
pub struct Controller {
    /// Analysis service for the document pipeline
    service: AnalysisService,
}

impl Controller {
    /// Create a controller from a validated configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = AnalysisService::new(config.to_analysis_config())?;
        Ok(Self { service })
    }

    /// Analyze a document and print the suggested title
    pub async fn suggest(&self, input_file: &Path) -> Result<()> {
        info!(
            "Processing {:?} with model {}...",
            input_file,
            self.service.config().model
        );

        let title = self.service.analyze_document(input_file).await?;
        println!("Suggested title: {}", title);

        Ok(())
    }

    /// Analyze a document and rename it with the suggested title.
    ///
    /// In dry-run mode the intended rename is reported without touching the
    /// file system. When the target path already exists, the user is asked to
    /// confirm the overwrite unless `assume_yes` is set.
    pub async fn rename(&self, input_file: &Path, dry_run: bool, assume_yes: bool) -> Result<()> {
        info!(
            "Processing {:?} with model {}...",
            input_file,
            self.service.config().model
        );

        let title = self.service.analyze_document(input_file).await?;
        let title = FileManager::sanitize_title(&title);
        let new_path = FileManager::build_renamed_path(input_file, &title);

        if dry_run {
            println!("Would rename: {} -> {}", input_file.display(), new_path.display());
            return Ok(());
        }

        if FileManager::file_exists(&new_path) && !assume_yes && !confirm_overwrite(&new_path)? {
            println!("Rename cancelled.");
            return Ok(());
        }

        fs::rename(input_file, &new_path)
            .with_context(|| format!("Failed to rename {:?} to {:?}", input_file, new_path))?;

        println!("Renamed: {} -> {}", input_file.display(), new_path.display());

        Ok(())
    }
}

/// Ask the user to confirm overwriting an existing file
fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!("{} already exists. Overwrite? [y/N] ", path.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation input")?;

    Ok(answer.trim().eq_ignore_ascii_case("y") || answer.trim().eq_ignore_ascii_case("yes"))
}
