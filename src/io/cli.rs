//! Command-line interface for batch merging of skin PNG files

use crate::io::configuration::{
    DEFAULT_OUTPUT_DIR_NAME, DONE_MESSAGE, DONE_TITLE, ERROR_TITLE, INPUT_EXTENSION,
};
use crate::io::error::{Result, SkinError, invalid_target};
use crate::io::notify::{ConsoleNotifier, Notifier};
use crate::io::progress::ProgressManager;
use crate::overlay::processor::{SkinOutcome, process_skin};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "skinmerge")]
#[command(
    author,
    version,
    about = "Merge Minecraft skin head overlays into the base layer"
)]
/// Command-line arguments for the skin merger
pub struct Cli {
    /// Input PNG files or directories to process
    #[arg(value_name = "TARGET")]
    pub targets: Vec<PathBuf>,

    /// After merging keep only the head
    #[arg(short = 'k', long)]
    pub head_only: bool,

    /// Output directory (defaults to `edited` beside the executable)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Tally of a finished batch
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files that were written
    pub written: Vec<PathBuf>,
    /// Inputs skipped because they are not skin-sized
    pub skipped: Vec<PathBuf>,
    /// Inputs that failed, with the reason
    pub failed: Vec<(PathBuf, SkinError)>,
}

impl BatchReport {
    /// Number of input files the batch went through
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failed.len()
    }
}

/// Orchestrates batch processing of skin files with progress and notifications
pub struct FileProcessor<N: Notifier = ConsoleNotifier> {
    cli: Cli,
    notifier: N,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor<ConsoleNotifier> {
    /// Create a new file processor reporting to the console
    pub fn new(cli: Cli) -> Self {
        Self::with_notifier(cli, ConsoleNotifier)
    }
}

impl<N: Notifier> FileProcessor<N> {
    /// Create a new file processor reporting to `notifier`
    pub fn with_notifier(cli: Cli, notifier: N) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            notifier,
            progress_manager,
        }
    }

    /// Notification sink used by this processor
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Process every selected file according to the CLI arguments
    ///
    /// A file that cannot be read, decoded or written is recorded in the
    /// report and the batch moves on to the next file.
    ///
    /// # Errors
    ///
    /// Returns an error, after notifying it, if:
    /// - A target does not exist or is not a PNG file or directory
    /// - No input files were found
    /// - The output directory is empty or cannot be created
    pub fn process(&mut self) -> Result<BatchReport> {
        match self.prepare() {
            Ok((files, output_dir)) => Ok(self.run_batch(&files, &output_dir)),
            Err(error) => {
                self.notifier.error(ERROR_TITLE, &error.to_string());
                Err(error)
            }
        }
    }

    fn prepare(&self) -> Result<(Vec<PathBuf>, PathBuf)> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Err(SkinError::NoFilesSelected);
        }

        let output_dir = self.output_dir()?;
        std::fs::create_dir_all(&output_dir).map_err(|e| SkinError::FileSystem {
            path: output_dir.clone(),
            operation: "create directory",
            source: e,
        })?;

        Ok((files, output_dir))
    }

    fn run_batch(&mut self, files: &[PathBuf], output_dir: &Path) -> BatchReport {
        let mut report = BatchReport::default();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            match Self::process_file(file, output_dir, self.cli.head_only) {
                Ok((SkinOutcome::Written, output_path)) => report.written.push(output_path),
                Ok((SkinOutcome::SkippedDimensions { .. }, _)) => {
                    report.skipped.push(file.clone());
                }
                Err(error) => {
                    log::warn!("{error}");
                    report.failed.push((file.clone(), error));
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        log::info!(
            "Processed {} file(s): {} written, {} skipped, {} failed",
            report.total(),
            report.written.len(),
            report.skipped.len(),
            report.failed.len()
        );
        self.notifier.success(DONE_TITLE, DONE_MESSAGE);

        report
    }

    fn process_file(
        input_path: &Path,
        output_dir: &Path,
        head_only: bool,
    ) -> Result<(SkinOutcome, PathBuf)> {
        let output_path = Self::get_output_path(input_path, output_dir)?;
        let outcome = process_skin(input_path, &output_path, head_only)?;
        Ok((outcome, output_path))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for target in &self.cli.targets {
            if target.is_file() {
                if has_input_extension(target) {
                    files.push(target.clone());
                } else {
                    return Err(invalid_target(target, &"target file must be a PNG image"));
                }
            } else if target.is_dir() {
                files.extend(Self::collect_directory(target)?);
            } else {
                return Err(invalid_target(
                    target,
                    &"target must be a PNG file or directory",
                ));
            }
        }

        Ok(files)
    }

    fn collect_directory(dir: &Path) -> Result<Vec<PathBuf>> {
        let read_error = |e: std::io::Error| SkinError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory",
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && has_input_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn output_dir(&self) -> Result<PathBuf> {
        match self.cli.output {
            Some(ref dir) if dir.as_os_str().is_empty() => Err(SkinError::NoOutputDirectory),
            Some(ref dir) => Ok(dir.clone()),
            None => default_output_dir(),
        }
    }

    fn get_output_path(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
        input_path
            .file_name()
            .map(|name| output_dir.join(name))
            .ok_or_else(|| invalid_target(input_path, &"input has no file name"))
    }
}

/// Directory named `edited` next to the running executable
///
/// # Errors
///
/// Returns an error if the executable location cannot be determined
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| SkinError::FileSystem {
        path: PathBuf::from("<executable>"),
        operation: "locate executable",
        source: e,
    })?;

    let base = exe.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    Ok(base.join(DEFAULT_OUTPUT_DIR_NAME))
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}
