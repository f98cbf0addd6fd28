//! Progress bar display for downloads and installs

use std::io::Read;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a single download
pub struct TransferProgress {
    pb: ProgressBar,
}

impl TransferProgress {
    /// Bar when the size is known, spinner otherwise
    pub fn new(total_bytes: Option<u64>, url: &str) -> Self {
        let pb = match total_bytes {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("#>-"),
                );
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner} {bytes} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb
            }
        };
        pb.set_message(truncate(url));

        Self { pb }
    }

    /// Wrap a reader so reads advance the bar
    pub fn wrap_read<R: Read>(&self, reader: R) -> impl Read {
        self.pb.wrap_read(reader)
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

/// Progress display while copying validated primitives
pub struct InstallProgress {
    pb: ProgressBar,
}

impl InstallProgress {
    pub fn new(total_files: u64) -> Self {
        let pb = ProgressBar::new(total_files);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        Self { pb }
    }

    pub fn update_file(&self, file_name: &str) {
        self.pb.set_message(truncate(file_name));
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

/// Truncate long paths for display
fn truncate(text: &str) -> String {
    const MAX: usize = 50;
    let count = text.chars().count();
    if count > MAX {
        let tail: String = text.chars().skip(count - (MAX - 3)).collect();
        format!("...{tail}")
    } else {
        text.to_string()
    }
}
