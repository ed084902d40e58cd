//! Encrypted single-value storage for the portal access token.
//!
//! Values are encrypted with AES-256-CBC under a key compiled into the binary
//! by `build.rs` and stored base64-encoded in the data directory.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    path: PathBuf,
}

impl Secret {
    pub fn new(file_name: &str, prompt: &str) -> Self {
        let path = DataStorage::new().get_path(file_name).unwrap_or_else(|_| PathBuf::from(file_name));

        Self {
            prompt: prompt.to_owned(),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored value, or a freshly prompted one when nothing readable is stored.
    pub fn get_or_prompt(&self) -> Result<String> {
        if self.path.exists() {
            if let Ok(value) = self.read() {
                return Ok(value);
            }
        }
        self.prompt()
    }

    pub fn prompt(&self) -> Result<String> {
        let value = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.prompt)
            .interact()?;
        self.store(&value)?;
        Ok(value)
    }

    pub fn store(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(APP_METADATA_ENCRYPTION_KEY, APP_METADATA_ENCRYPTION_IV)?;
        let encoded = BASE64_STANDARD.encode(cipher.encrypt_vec(value.as_bytes()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encoded)?;
        Ok(())
    }

    pub fn read(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(APP_METADATA_ENCRYPTION_KEY, APP_METADATA_ENCRYPTION_IV)?;
        Ok(String::from_utf8(cipher.decrypt_vec(&ciphertext)?)?)
    }

    /// Removes the stored value. Returns `false` when there was none.
    pub fn forget(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }
}
