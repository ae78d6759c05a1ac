//! Tar-aware listing and member selection over a decompressed stream.

use std::io::{Read, Write};

use tracing::trace;

use crate::error::{Error, Result};

/// Writes the path of every archive member to `output`, one per line.
///
/// Returns the number of members listed.
pub(crate) fn list_members<R: Read>(reader: R, output: &mut dyn Write) -> Result<u64> {
    let mut archive = tar::Archive::new(reader);
    let mut count = 0u64;

    for entry in archive.entries()? {
        let entry = entry?;
        let path = entry.path()?;
        writeln!(output, "{}", path.display())?;
        count += 1;
    }

    Ok(count)
}

/// Re-emits the members selected by `members` as a new tar stream.
///
/// A member is selected when its path equals one of the names, or lies below
/// one of them when that name is a directory. Returns the underlying reader so
/// the caller can inspect how much was consumed.
///
/// # Errors
///
/// Fails with [`Error::MembersNotFound`] if any name matched no entry. The
/// entries that did match have already been written at that point.
pub(crate) fn extract_members<R: Read>(
    reader: R,
    output: &mut dyn Write,
    members: &[String],
) -> Result<R> {
    let wanted: Vec<&str> = members
        .iter()
        .map(|member| member.trim_end_matches('/'))
        .collect();
    let mut found = vec![false; wanted.len()];

    let mut archive = tar::Archive::new(reader);
    {
        let mut builder = tar::Builder::new(&mut *output);

        for entry in archive.entries()? {
            let mut entry = entry?;
            let path = entry.path()?.into_owned();
            let name = path.to_string_lossy();

            let mut selected = false;
            for (member, hit) in wanted.iter().zip(found.iter_mut()) {
                if member_matches(&name, member) {
                    *hit = true;
                    selected = true;
                }
            }
            if !selected {
                continue;
            }

            trace!(member = %name, "extracting");
            let mut header = entry.header().clone();
            builder.append_data(&mut header, &path, &mut entry)?;
        }

        builder.finish()?;
    }

    let missing: Vec<String> = wanted
        .iter()
        .zip(&found)
        .filter(|(_, found)| !**found)
        .map(|(name, _)| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MembersNotFound { members: missing });
    }

    Ok(archive.into_inner())
}

fn member_matches(path: &str, wanted: &str) -> bool {
    let path = path.trim_end_matches('/');
    match path.strip_prefix(wanted) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}
