use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use walkdir::WalkDir;
use zip::{write::FileOptions, ZipWriter};

/// Publish one report into the target directory under a collision-avoiding name.
///
/// A directory report is packaged into a single zip archive named
/// `report-<project>-<dirname>.zip`; a file report is copied as
/// `report-<project>-<parentDirName>-<fileName>` so that same-named report
/// files from different task subdirectories stay distinct.
///
/// A report path that does not exist is not an error: a task can fail before
/// writing any output, so the call is a silent no-op and returns `Ok(None)`.
/// The target directory (including parents) is created on demand.
///
/// # Returns
///
/// * `Ok(Some(path))` - Path of the published artifact
/// * `Ok(None)` - Nothing to publish (report missing)
/// * `Err` - The destination could not be created or written
pub fn publish_report(
    report: &Path,
    target_dir: &Path,
    project_name: &str,
) -> Result<Option<PathBuf>> {
    if !report.exists() {
        debug!("Report {} does not exist, skipping", report.display());
        return Ok(None);
    }

    fs::create_dir_all(target_dir)
        .context(format!("Failed to create target directory {}", target_dir.display()))?;

    let dest = if report.is_dir() {
        let dir_name = file_name_of(report)?;
        let dest = target_dir.join(format!("report-{}-{}.zip", project_name, dir_name));
        zip_report(report, &dest)?;
        dest
    } else {
        let parent_name = report
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let file_name = file_name_of(report)?;
        let dest = target_dir.join(format!(
            "report-{}-{}-{}",
            project_name, parent_name, file_name
        ));
        fs::copy(report, &dest).context(format!(
            "Failed to copy report {} to {}",
            report.display(),
            dest.display()
        ))?;
        dest
    };

    info!("Published report {} to {}", report.display(), dest.display());
    Ok(Some(dest))
}

/// Zip every regular file under `src_dir` into `dest_zip`.
///
/// Entry names are paths relative to `src_dir` with forward slashes,
/// regardless of host path encoding. Symbolic links are not followed and
/// directories get no entries of their own. Files are visited in sorted
/// order so repeated runs over identical content produce identical entry
/// sets.
pub fn zip_report(src_dir: &Path, dest_zip: &Path) -> Result<()> {
    if let Some(parent) = dest_zip.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }

    let zip_file = fs::File::create(dest_zip)
        .context(format!("Failed to create zip file {}", dest_zip.display()))?;
    let mut zip = ZipWriter::new(zip_file);
    let options = FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let walker = WalkDir::new(src_dir)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.context(format!("Failed to walk {}", src_dir.display()))?;
        // file_type() is symlink-aware here, so links are never treated as files
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry
            .path()
            .strip_prefix(src_dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");

        zip.start_file(rel_path.clone(), options)
            .context(format!("Failed to start zip entry {}", rel_path))?;
        let mut reader = fs::File::open(entry.path())
            .context(format!("Failed to open {}", entry.path().display()))?;
        io::copy(&mut reader, &mut zip)
            .context(format!("Failed to write zip entry {}", rel_path))?;

        debug!("Added {} to {}", rel_path, dest_zip.display());
    }

    zip.finish()
        .context(format!("Failed to finalize zip file {}", dest_zip.display()))?;
    Ok(())
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .context(format!("Report path {} has no file name", path.display()))
}
