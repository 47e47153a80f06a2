//! Kemono Archiver - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use kemono_archiver::{
    api::ArchiveClient,
    cli::Args,
    config::{parse_profile_url, validate_config, validate_platform, Config},
    download::{download_all, list_all_posts, DownloadContext, Pacer},
    error::{exit_codes, Error, Result},
    fs::{read_posts, write_posts},
    output::{
        print_banner, print_batch_stats, print_config_summary, print_error, print_info,
        print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::InvalidProfileUrl(_)
                | Error::UnknownPlatform(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Api(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        tracing::debug!(
            "Configuration file not found: {}, using defaults",
            args.config.display()
        );
        Config::default()
    };

    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let (platform_name, platform) =
        config.resolve_platform(args.platform.as_deref(), args.profile_url.as_deref())?;
    validate_platform(&platform_name, &platform)?;

    let source = match (&args.from_file, &args.profile_url) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(url)) => url.clone(),
        (None, None) => {
            return Err(Error::MissingConfig(
                "profile URL (or --from-file with a saved post list)".to_string(),
            ))
        }
    };

    print_config_summary(
        &source,
        &platform_name,
        &config.options.output_directory.display().to_string(),
        &config.options.error_file.display().to_string(),
    );

    let client = ArchiveClient::new(&config.options.user_agent, config.request_timeout())?;

    // Collect the posts to process
    let posts = match &args.from_file {
        Some(path) => {
            let posts = read_posts(path).await?;
            print_info(&format!("Loaded {} posts from {}", posts.len(), path.display()));
            posts
        }
        None => {
            let profile = parse_profile_url(&source)?;
            let pacer = Pacer::new(config.page_interval(), config.jitter());
            list_all_posts(&client, &platform.listing_base, &profile, pacer).await?
        }
    };

    if let Some(path) = &args.save_posts {
        write_posts(path, &posts).await?;
        print_info(&format!("Saved post listing to {}", path.display()));
    }

    let ctx = DownloadContext::new(
        &client,
        &platform,
        Pacer::new(config.download_interval(), config.jitter()),
    );

    let report = download_all(
        &ctx,
        posts,
        &config.options.output_directory,
        &config.options.error_file,
        config.options.show_progress,
    )
    .await?;

    print_batch_stats(&report);

    if !report.failed.is_empty() {
        print_warning(&format!(
            "Retry the failed posts with: --platform {} --from-file {}",
            platform_name,
            config.options.error_file.display()
        ));
    }

    Ok(())
}
