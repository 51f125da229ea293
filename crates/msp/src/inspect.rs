//! Trust inspection.
//!
//! Which admins a membership directory trusts is not recorded anywhere;
//! it is read back by scanning `admincerts`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{MspError, MspResult};
use crate::layout::ADMINCERTS;

/// One certificate found in an `admincerts` directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AdminCertificate {
    pub file_name: String,
    /// Hex BLAKE3 digest of the file contents.
    pub fingerprint: String,
}

/// Hex BLAKE3 digest of a file.
pub fn fingerprint_file(path: &Path) -> MspResult<String> {
    let contents = fs::read(path).map_err(|e| MspError::source_io(path, e))?;
    Ok(hex::encode(blake3::hash(&contents).as_bytes()))
}

/// Certificates in `<msp_dir>/admincerts`, sorted by file name.
///
/// A membership directory without `admincerts` trusts no admin.
pub fn admin_certificates(msp_dir: &Path) -> MspResult<Vec<AdminCertificate>> {
    let dir = msp_dir.join(ADMINCERTS);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(MspError::io(&dir, e)),
    };

    let mut certs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MspError::io(&dir, e))?;
        let path = entry.path();
        if !fs::metadata(&path)
            .map_err(|e| MspError::io(&path, e))?
            .is_file()
        {
            continue;
        }
        certs.push(AdminCertificate {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            fingerprint: fingerprint_file(&path)?,
        });
    }
    certs.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(certs)
}

/// Set of admin certificate contents trusted by a membership directory.
pub fn admin_fingerprints(msp_dir: &Path) -> MspResult<BTreeSet<String>> {
    Ok(admin_certificates(msp_dir)?
        .into_iter()
        .map(|cert| cert.fingerprint)
        .collect())
}
