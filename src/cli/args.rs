//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Kemono/coomer post archiver CLI.
#[derive(Parser, Debug)]
#[command(
    name = "kemono-archiver",
    version,
    about = "Archive a creator's posts and media from kemono/coomer style sites",
    long_about = "Lists every post of a creator profile and saves each post's text, \
                  primary file and attachments into a directory per post.\n\n\
                  Posts that fail are written to an error file which can be replayed \
                  with --from-file."
)]
pub struct Args {
    /// Creator profile URL, e.g. https://kemono.su/patreon/user/58531325
    pub profile_url: Option<String>,

    /// Platform name (kemono, coomer, or one defined in the config).
    /// Inferred from the profile URL when omitted.
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Directory posts are archived into.
    #[arg(short, long = "output")]
    pub output_directory: Option<PathBuf>,

    /// Where failed posts are written.
    #[arg(short, long)]
    pub error_file: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Milliseconds to wait between listing pages.
    #[arg(long)]
    pub page_interval_ms: Option<u64>,

    /// Milliseconds to wait after each download and each post.
    #[arg(long)]
    pub download_interval_ms: Option<u64>,

    /// Process the posts in this JSON file (e.g. a previous error file)
    /// instead of listing the profile.
    #[arg(long)]
    pub from_file: Option<PathBuf>,

    /// Save the full post listing to this JSON file before downloading.
    #[arg(long)]
    pub save_posts: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.output_directory {
            config.options.output_directory = dir.clone();
        }

        if let Some(path) = &self.error_file {
            config.options.error_file = path.clone();
        }

        if let Some(ms) = self.page_interval_ms {
            config.options.page_interval_ms = ms;
        }

        if let Some(ms) = self.download_interval_ms {
            config.options.download_interval_ms = ms;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
