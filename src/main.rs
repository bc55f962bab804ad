use std::path::{Path, PathBuf};

use anyhow::bail;
use chrono::DateTime;
use clap::Parser;
use filestat::fs::{self, Metadata, Timestamp};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const MILLIS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f UTC";

/// Print the metadata of files, to compare against stat(1).
#[derive(Debug, Parser)]
#[command(name = "filestat", version)]
struct Args {
    /// Examine symlinks themselves rather than their targets.
    #[arg(long)]
    no_follow: bool,

    /// Also print each timestamp truncated to milliseconds, in UTC.
    #[arg(long)]
    millis: bool,

    /// Paths to examine.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut failed = 0_usize;

    for path in &args.paths {
        if let Err(e) = examine(path, &args) {
            warn!(path = %path.display(), status = e.status_code(), "could not examine file");
            eprintln!("Could not stat {}: {e}", path.display());
            failed += 1;
        }
        println!("=================");
    }

    if failed > 0 {
        bail!("{failed} of {} paths could not be examined", args.paths.len());
    }
    Ok(())
}

fn examine(path: &Path, args: &Args) -> Result<(), fs::StatError> {
    println!("Is symlink: {}", fs::is_symlink(path)?);

    let meta = fs::collect(path, !args.no_follow)?;
    print!("Stat {} (\n{meta}", path.display());
    print_dates(&meta);
    println!(")");

    if args.millis {
        print_millis(&meta);
    }
    Ok(())
}

fn print_dates(meta: &Metadata) {
    let rows: [(&str, Timestamp); 3] = [
        ("accessed at", meta.accessed()),
        ("modified at", meta.modified()),
        ("changed at", meta.changed()),
    ];

    for (label, time) in rows {
        let date = u32::try_from(time.nanos)
            .ok()
            .and_then(|nanos| DateTime::from_timestamp(time.secs, nanos));
        match date {
            Some(date) => println!("  {label:<14}: {}", date.format(DATE_FORMAT)),
            None => println!("  {label:<14}: {time} (out of range)"),
        }
    }
}

fn print_millis(meta: &Metadata) {
    let rows: [(&str, Timestamp); 3] = [
        ("atime", meta.accessed()),
        ("mtime", meta.modified()),
        ("ctime", meta.changed()),
    ];

    for (label, time) in rows {
        match time.as_millis().and_then(DateTime::from_timestamp_millis) {
            Some(date) => println!("  {label} millis: {}", date.format(MILLIS_FORMAT)),
            None => println!("  {label} millis: {time} (out of range)"),
        }
    }
}
