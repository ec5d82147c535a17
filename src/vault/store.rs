//! The vault file and the operations on it.
//!
//! `VaultStore` binds a master key to a `StoreConfig` and exposes the
//! vault operations: clear, write (replace or append), read, export and
//! backup.  Each operation opens the files it needs and drops the
//! handles before returning, on success and on error alike.
//!
//! The vault file is either empty (no secrets yet) or exactly
//! `nonce || ciphertext` of the whole plaintext.  Every write truncates
//! and rewrites the file in one `write_all`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

use super::items::{self, DEFAULT_SEPARATOR};
use crate::crypto::encryption::{open, seal, NONCE_LEN};
use crate::crypto::keys::MasterKey;
use crate::errors::{PasscError, Result};

/// Where the vault lives and how items are framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// The encrypted vault file.
    pub vault_path: PathBuf,

    /// Destination of `backup`, a raw copy of the vault file.
    pub backup_path: PathBuf,

    /// Destination of `export`, a readable JSON array.
    pub export_path: PathBuf,

    /// String placed between items in the plaintext.
    pub separator: String,
}

impl StoreConfig {
    /// Default file names inside `dir`, with the default separator.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            vault_path: dir.join("vault.passc"),
            backup_path: dir.join("vault.passc.bak"),
            export_path: dir.join("passc_export.json"),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Handle to one vault file, unlocked with one key.
#[derive(Debug)]
pub struct VaultStore {
    key: MasterKey,
    config: StoreConfig,
}

impl VaultStore {
    /// Build a store whose key is the raw password bytes.
    ///
    /// Fails with `InvalidKeyLength` unless the password is 16, 24 or
    /// 32 bytes long.
    pub fn new(password: &[u8], config: StoreConfig) -> Result<Self> {
        let key = MasterKey::new(password.to_vec())?;
        Ok(Self::with_key(key, config))
    }

    /// Build a store from an already validated key.
    pub fn with_key(key: MasterKey, config: StoreConfig) -> Self {
        Self { key, config }
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.config.vault_path
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Truncate the vault to zero bytes, creating it if missing.
    pub fn clear(&self) -> Result<()> {
        clear_file(&self.config)
    }

    /// Seal `text` into the vault.
    ///
    /// With `append == false` the old contents are discarded.  With
    /// `append == true` and a non-empty vault, the current plaintext is
    /// decrypted first and `text` is placed in front of it.  If that
    /// decryption fails, the file is left untouched.
    pub fn write(&self, text: &str, append: bool) -> Result<()> {
        let path = &self.config.vault_path;
        ensure_parent_dir(path)?;

        let mut file = create_options()
            .read(true)
            .truncate(false)
            .open(path)
            .map_err(|e| PasscError::file("open", path, e))?;

        let plaintext = if append {
            match self.decrypt_contents(&mut file)? {
                Some(old) => {
                    let old = Zeroizing::new(old);
                    Zeroizing::new(items::prepend_item(text, &old, &self.config.separator))
                }
                None => Zeroizing::new(text.to_string()),
            }
        } else {
            Zeroizing::new(text.to_string())
        };

        let sealed = seal(self.key.as_bytes(), plaintext.as_bytes())?;

        file.set_len(0)
            .map_err(|e| PasscError::file("truncate", path, e))?;
        file.rewind()
            .map_err(|e| PasscError::file("seek", path, e))?;
        file.write_all(&sealed)
            .map_err(|e| PasscError::file("write", path, e))?;
        file.sync_all()
            .map_err(|e| PasscError::file("sync", path, e))?;

        debug!(
            append,
            bytes = sealed.len(),
            "sealed vault {}",
            path.display()
        );
        Ok(())
    }

    /// Decrypt and return the whole plaintext.
    ///
    /// An empty vault is `EmptyVault`, not a decryption failure.
    pub fn read(&self) -> Result<String> {
        let path = &self.config.vault_path;
        let mut file = File::open(path).map_err(|e| PasscError::file("open", path, e))?;

        self.decrypt_contents(&mut file)?
            .ok_or_else(|| PasscError::EmptyVault(path.clone()))
    }

    /// Write every item, pretty-printed, as one JSON array to the export
    /// path.  Returns the number of items exported.
    ///
    /// The document is rendered in memory first; if any item is not
    /// valid JSON nothing is written.
    pub fn export(&self) -> Result<usize> {
        let plaintext = Zeroizing::new(self.read()?);
        let parts = items::split_items(&plaintext, &self.config.separator);
        let document = Zeroizing::new(items::render_export(&parts)?);

        let path = &self.config.export_path;
        let mut file = create_options()
            .truncate(true)
            .open(path)
            .map_err(|e| PasscError::file("create", path, e))?;
        file.write_all(document.as_bytes())
            .map_err(|e| PasscError::file("write", path, e))?;

        debug!(items = parts.len(), "exported vault to {}", path.display());
        Ok(parts.len())
    }

    /// Copy the raw vault file to the backup path.
    ///
    /// Failures are logged and swallowed; the return value only tells
    /// whether a copy was made.
    pub fn backup(&self) -> bool {
        backup_file(&self.config)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Read the whole file from the start and decrypt it.
    ///
    /// Returns `None` for an empty file.
    fn decrypt_contents(&self, file: &mut File) -> Result<Option<String>> {
        let path = &self.config.vault_path;

        let mut data = Vec::new();
        file.rewind()
            .map_err(|e| PasscError::file("seek", path, e))?;
        file.read_to_end(&mut data)
            .map_err(|e| PasscError::file("read", path, e))?;

        if data.is_empty() {
            return Ok(None);
        }
        if data.len() < NONCE_LEN {
            return Err(PasscError::MalformedVault {
                path: path.clone(),
                len: data.len(),
            });
        }

        let plaintext = open(self.key.as_bytes(), &data)?;

        String::from_utf8(plaintext).map(Some).map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            PasscError::InvalidPlaintext
        })
    }
}

/// Truncate the vault file named by `config` to zero bytes, creating it
/// if missing.  Needs no key.
pub fn clear_file(config: &StoreConfig) -> Result<()> {
    let path = &config.vault_path;
    ensure_parent_dir(path)?;

    let file = create_options()
        .truncate(true)
        .open(path)
        .map_err(|e| PasscError::file("clear", path, e))?;
    file.sync_all()
        .map_err(|e| PasscError::file("sync", path, e))?;

    debug!("cleared vault {}", path.display());
    Ok(())
}

/// Copy the raw vault bytes named by `config` to its backup path.
///
/// Never decrypts, so no key is needed.  Errors are logged at `warn`
/// and reported only as `false`.
pub fn backup_file(config: &StoreConfig) -> bool {
    match copy_raw(&config.vault_path, &config.backup_path) {
        Ok(bytes) => {
            debug!(bytes, "backed up vault to {}", config.backup_path.display());
            true
        }
        Err(e) => {
            warn!("vault backup skipped: {e}");
            false
        }
    }
}

fn copy_raw(src: &Path, dst: &Path) -> Result<u64> {
    let mut src_file = File::open(src).map_err(|e| PasscError::file("open", src, e))?;

    ensure_parent_dir(dst)?;
    let mut dst_file = create_options()
        .truncate(true)
        .open(dst)
        .map_err(|e| PasscError::file("create", dst, e))?;

    let bytes =
        io::copy(&mut src_file, &mut dst_file).map_err(|e| PasscError::file("copy to", dst, e))?;
    dst_file
        .sync_all()
        .map_err(|e| PasscError::file("sync", dst, e))?;
    Ok(bytes)
}

/// Write + create, owner-only permissions on Unix.
fn create_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| PasscError::file("create directory", parent, e))
        }
        _ => Ok(()),
    }
}
