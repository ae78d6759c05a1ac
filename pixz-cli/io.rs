//! Opening of the input and output byte streams.
//!
//! Standard streams are used when a path is absent. A named output file takes
//! the permission bits of a named input file; with standard input as the
//! source it is created under the process umask. Rust's standard streams never
//! translate line endings, so no binary-mode switch is needed on any platform.

use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;

use tracing::debug;

use crate::config::DEFAULT_BUFFER_SIZE;
use crate::error::{Error, Result};
use crate::resolve::ResolvedPaths;

/// The open streams of a run.
pub struct Streams {
    /// Source of the payload
    pub input: Box<dyn io::Read>,
    /// Destination of the payload
    pub output: Box<dyn io::Write>,
    /// Whether the output is an interactive terminal
    pub output_is_terminal: bool,
}

impl Streams {
    /// Opens both streams for the resolved paths, input first.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be opened, its permissions cannot
    /// be read, or the output cannot be created.
    pub fn open(paths: &ResolvedPaths) -> Result<Self> {
        let input = open_input(paths.input.as_deref())?;
        let (output, output_is_terminal) =
            open_output(paths.output.as_deref(), paths.input.as_deref())?;

        Ok(Self {
            input,
            output,
            output_is_terminal,
        })
    }
}

/// Opens an input reader for the given path, or stdin if there is none.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn io::Read>> {
    let Some(path) = path else {
        return Ok(Box::new(io::BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdin(),
        )));
    };

    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Box::new(io::BufReader::with_capacity(
        DEFAULT_BUFFER_SIZE,
        file,
    )))
}

/// Opens an output writer for the given path, or stdout if there is none.
///
/// `source` is the named input file, if any. A newly created output takes
/// exactly its permission bits; an existing output is truncated and keeps its
/// own. Also reports whether the output is a terminal.
///
/// # Errors
///
/// Returns [`Error::StatInput`] if the source permissions cannot be read and
/// [`Error::CreateOutput`] if the output cannot be created or opened.
pub fn open_output(
    path: Option<&Path>,
    source: Option<&Path>,
) -> Result<(Box<dyn io::Write>, bool)> {
    let Some(path) = path else {
        let is_terminal = io::stdout().is_terminal();
        return Ok((
            Box::new(io::BufWriter::with_capacity(
                DEFAULT_BUFFER_SIZE,
                io::stdout(),
            )),
            is_terminal,
        ));
    };

    let file = match source {
        Some(source) => create_like(path, source)?,
        None => File::create(path).map_err(|err| create_error(path, err))?,
    };

    let is_terminal = file.is_terminal();
    Ok((
        Box::new(io::BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file)),
        is_terminal,
    ))
}

fn create_error(path: &Path, source: io::Error) -> crate::error::CliError {
    Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    }
    .into()
}

/// Creates `path` with the permissions of `source`.
#[cfg(unix)]
fn create_like(path: &Path, source: &Path) -> Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let metadata = fs::metadata(source).map_err(|err| Error::StatInput {
        path: source.to_path_buf(),
        source: err,
    })?;
    let mode = metadata.permissions().mode() & 0o7777;

    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(mode)
        .open(path)
    {
        Ok(file) => {
            // The umask may have masked bits off at creation time.
            file.set_permissions(fs::Permissions::from_mode(mode))
                .map_err(|err| create_error(path, err))?;
            debug!(path = %path.display(), mode = format_args!("{mode:04o}"), "created output");
            Ok(file)
        }
        // Either a real file, or a dangling symlink whose target is created here.
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(mode)
            .open(path)
            .map_err(|err| create_error(path, err)),
        Err(err) => Err(create_error(path, err)),
    }
}

/// Creates `path`, carrying over the read-only attribute of `source`.
#[cfg(not(unix))]
fn create_like(path: &Path, source: &Path) -> Result<File> {
    let metadata = fs::metadata(source).map_err(|err| Error::StatInput {
        path: source.to_path_buf(),
        source: err,
    })?;

    let existed = path.exists();
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|err| create_error(path, err))?;
    if !existed && metadata.permissions().readonly() {
        file.set_permissions(metadata.permissions())
            .map_err(|err| create_error(path, err))?;
    }
    debug!(path = %path.display(), "created output");
    Ok(file)
}
