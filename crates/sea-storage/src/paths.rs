//! Upload path generation for measurement files.

use std::path::PathBuf;

use sea_core::identity::Username;

use crate::error::StorageError;

const SUFFIX_LEN: usize = 10;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Relative path a new measurement upload is stored at:
/// `<username>/measurement/<filename>_<suffix>`.
///
/// The random suffix keeps repeated uploads of the same filename from
/// colliding. The caller joins the result onto the media root.
pub fn measurement_upload_path(
    owner: &Username,
    filename: &str,
) -> Result<PathBuf, StorageError> {
    let suffix = random_suffix()?;
    Ok(PathBuf::from(owner.as_str())
        .join("measurement")
        .join(format!("{filename}_{suffix}")))
}

/// Ten uppercase-alphanumeric characters from the system entropy source.
fn random_suffix() -> Result<String, StorageError> {
    let mut buf = [0u8; SUFFIX_LEN];
    getrandom::fill(&mut buf).map_err(|error| StorageError::Entropy(error.to_string()))?;
    Ok(buf
        .iter()
        .map(|byte| ALPHABET[usize::from(*byte) % ALPHABET.len()] as char)
        .collect())
}
