//! One generation run: holidays, pages, PDF bytes, output file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use agenda_core::calendar::validate_year;
use agenda_core::{build, HolidayError, HolidayResolver, SchoolHolidaySource};
use tempfile::Builder;
use tracing::{debug, info};

use crate::config::{Config, SchoolData};
use crate::error::{AgendaError, Result};
use crate::sources::{CsvFileSource, OpenDataSource};

/// Generates the agenda described by `config` and returns the written path.
///
/// Every input is validated and the whole PDF is rendered in memory before
/// the output file is touched.
pub fn run(config: &Config) -> Result<PathBuf> {
    let started = Instant::now();
    validate_year(config.year)?;
    let options = config.render_options();
    options.validate()?;

    info!(year = config.year, locale = %config.locale, "generating agenda");
    let resolver = resolver_for(config)?;
    let holidays = resolver.resolve(
        config.year,
        config.school_zone.as_deref(),
        config.bank_zone.as_deref(),
    )?;
    info!(holidays = holidays.len(), "resolved holidays");

    let document = build(config.year, &holidays)?;
    let bytes = agenda_pdf::render(&document, &options)?;
    write_atomic(&config.output, &bytes)?;

    info!(
        path = %config.output.display(),
        pages = document.len(),
        bytes = bytes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "agenda written"
    );
    Ok(config.output.clone())
}

/// Resolver with a school source only when a school zone was requested.
fn resolver_for(config: &Config) -> Result<HolidayResolver> {
    let resolver = HolidayResolver::new(config.locale);
    if config.school_zone.is_none() {
        return Ok(resolver);
    }

    let source: Box<dyn SchoolHolidaySource> = match &config.school_data {
        SchoolData::Csv(path) => Box::new(CsvFileSource::new(path)),
        SchoolData::OpenData(url) => Box::new(
            OpenDataSource::new(url.as_str(), config.http_timeout()).map_err(HolidayError::from)?,
        ),
    };
    debug!(source = source.name(), "school holiday source");
    Ok(resolver.with_school_source(source))
}

/// Writes `bytes` to a temporary file next to `path`, then renames it over
/// `path`. On failure `path` is left untouched and the temporary file removed.
///
/// A replaced file keeps its permissions. A new file gets the mode a plain
/// create would give it under the current umask.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let output_error = |source: std::io::Error| AgendaError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".agenda-").suffix(".pdf.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(output_error)?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(output_error)?;
    }
    file.write_all(bytes).map_err(output_error)?;
    file.as_file().sync_all().map_err(output_error)?;
    file.persist(path).map_err(|e| output_error(e.error))?;
    Ok(())
}
