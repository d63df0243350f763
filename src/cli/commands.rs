// CLI command implementations
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine as _;
use serde_json::{json, Value};
use tracing::debug;

use crate::cli::output::{OutputFormatter, ProgressBar};
use crate::cli::{CliError, CliResult};
use oggwave::{ogg, VorbisAudioInfo, OGG_FORMAT};

/// Build the record printed for one file
pub fn info_record(path: &Path, info: &VorbisAudioInfo) -> Value {
    let comments: serde_json::Map<String, Value> = info
        .comment
        .comments
        .iter()
        .map(|(field, value)| (field.clone(), Value::String(value.clone())))
        .collect();

    json!({
        "file": path.display().to_string(),
        "channels": info.quality.num_channels,
        "sample_rate": info.quality.sample_rate,
        "duration": info.quality.duration,
        "sample_data_size": info.quality.sample_data_size,
        "total_frames": info.total_frames,
        "bitrate_nominal": info.bitrate_nominal,
        "vendor": info.comment.vendor_string,
        "comments": comments,
    })
}

fn read_info(path: &Path) -> Result<VorbisAudioInfo, String> {
    let data = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    ogg::read_vorbis_info(&data).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Print header info for each file; unreadable files are reported and skipped
fn print_infos(
    files: &[PathBuf],
    formatter: &OutputFormatter,
    writer: &mut impl Write,
    mut progress: Option<&mut ProgressBar>,
) -> CliResult<()> {
    let mut failed = 0;
    for path in files {
        match read_info(path) {
            Ok(info) => formatter.output_record(&info_record(path, &info), writer)?,
            Err(message) => {
                failed += 1;
                formatter.print_error(&message);
            }
        }
        if let Some(progress) = progress.as_deref_mut() {
            progress.increment();
        }
    }

    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

/// Show header info for files
pub fn command_info(files: &[PathBuf], formatter: &OutputFormatter, writer: &mut impl Write) -> CliResult<()> {
    if files.is_empty() {
        return Err(CliError::NoFiles);
    }
    print_infos(files, formatter, writer, None)
}

/// Classify a file as Ogg Vorbis, some other Ogg stream, or not Ogg
pub fn detect_kind(path: &Path) -> &'static str {
    if !ogg::is_ogg_file(path) {
        return "unknown";
    }
    match std::fs::read(path) {
        Ok(data) if ogg::read_vorbis_info(&data).is_ok() => "ogg-vorbis",
        _ => "ogg",
    }
}

/// Detect file format
pub fn command_detect(files: &[PathBuf], formatter: &OutputFormatter, writer: &mut impl Write) -> CliResult<()> {
    if files.is_empty() {
        return Err(CliError::NoFiles);
    }

    for path in files {
        let record = json!({
            "file": path.display().to_string(),
            "format": detect_kind(path),
        });
        formatter.output_record(&record, writer)?;
    }
    Ok(())
}

/// Expand a directory and pattern into matching files
pub fn find_files(directory: &str, pattern: &str) -> CliResult<Vec<PathBuf>> {
    let glob_pattern = if pattern.contains('*') || pattern.contains('?') {
        format!("{}/{}", directory, pattern)
    } else {
        format!("{}/**/{}", directory, pattern)
    };
    debug!(pattern = %glob_pattern, "scanning");

    let mut files = Vec::new();
    for entry in glob::glob(&glob_pattern).map_err(|e| CliError::Pattern(e.to_string()))? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => debug!("skipping unreadable entry: {}", e),
        }
    }
    files.sort();
    Ok(files)
}

/// Show header info for every matching file in a directory
pub fn command_scan(
    directory: &str,
    pattern: &str,
    formatter: &OutputFormatter,
    writer: &mut impl Write,
) -> CliResult<()> {
    let files = find_files(directory, pattern)?;
    if files.is_empty() {
        return Err(CliError::NoFiles);
    }

    let mut progress = ProgressBar::new(files.len(), !formatter.is_quiet());
    print_infos(&files, formatter, writer, Some(&mut progress))
}

/// Build the JSON document for an exported sound wave
pub fn export_document(file: &Path) -> CliResult<Value> {
    let wave = oggwave::sound_wave_from_file(file)?;

    let mut document = serde_json::to_value(&wave).map_err(std::io::Error::from)?;
    if let Some(obj) = document.as_object_mut() {
        let data = wave.compressed_format_data(OGG_FORMAT).unwrap_or_default();
        obj.insert("format".to_string(), Value::String(OGG_FORMAT.to_string()));
        obj.insert(
            "data".to_string(),
            Value::String(base64::engine::general_purpose::STANDARD.encode(data)),
        );
    }
    Ok(document)
}

/// Load a file as a sound wave and write it out as JSON
pub fn command_export(file: &Path, output: &Path, formatter: &OutputFormatter) -> anyhow::Result<()> {
    let document = export_document(file)?;

    let out = File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(out);
    serde_json::to_writer_pretty(&mut writer, &document)
        .with_context(|| format!("failed to write {}", output.display()))?;
    writer.flush()?;

    formatter.print_success(&format!("Exported {} to {}", file.display(), output.display()));
    Ok(())
}
