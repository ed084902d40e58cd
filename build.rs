use dotenv::dotenv;
use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use toml::Value;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// Writes `APP_METADATA_*` constants into `$OUT_DIR/app_metadata.rs`.
struct MetadataWriter {
    file: File,
}

impl MetadataWriter {
    fn create() -> io::Result<Self> {
        let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
        let file = File::create(Path::new(&out_dir).join("app_metadata.rs"))?;
        Ok(Self { file })
    }

    fn string(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &str = {:?};",
            key.to_uppercase(),
            value
        )
    }

    fn bytes(&mut self, key: &str, value: &[u8]) -> io::Result<()> {
        let body = value.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ");
        writeln!(
            self.file,
            "#[allow(unused)]\npub const APP_METADATA_{}: &[u8; {}] = &[{}];",
            key.to_uppercase(),
            value.len(),
            body
        )
    }
}

/// Pads or truncates a seed to exactly `len` bytes.
fn fit(seed: String, len: usize) -> Vec<u8> {
    let mut bytes = seed.into_bytes();
    bytes.resize(len, b'!');
    bytes
}

fn token_keys() -> (Vec<u8>, Vec<u8>) {
    match (env::var("ENCRYPTION_KEY"), env::var("ENCRYPTION_IV")) {
        (Ok(key), Ok(iv)) => {
            if key.len() != KEY_LEN {
                panic!("ENCRYPTION_KEY must be exactly {} bytes long, got {} bytes", KEY_LEN, key.len());
            }
            if iv.len() != IV_LEN {
                panic!("ENCRYPTION_IV must be exactly {} bytes long, got {} bytes", IV_LEN, iv.len());
            }
            (key.into_bytes(), iv.into_bytes())
        }
        _ => {
            let package = env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "kekatime".to_string());
            println!("cargo:warning=ENCRYPTION_KEY/ENCRYPTION_IV not set, the access token is sealed with package-derived keys.");
            println!("cargo:warning=Put ENCRYPTION_KEY (32 bytes) and ENCRYPTION_IV (16 bytes) into .env for release builds.");
            (
                fit(format!("{}_access_token_sealing_key", package), KEY_LEN),
                fit(format!("{}_token_iv", package), IV_LEN),
            )
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenv();
    println!("cargo:rerun-if-env-changed=ENCRYPTION_KEY");
    println!("cargo:rerun-if-env-changed=ENCRYPTION_IV");
    println!("cargo:rerun-if-changed=Cargo.toml");

    let mut metadata = MetadataWriter::create()?;
    metadata.string("NAME", &env::var("CARGO_PKG_NAME").unwrap_or_default())?;
    metadata.string("VERSION", &env::var("CARGO_PKG_VERSION").unwrap_or_default())?;

    let manifest = fs::read_to_string("Cargo.toml")?;
    let manifest: Value = toml::from_str(&manifest).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(table) = manifest.get("package").and_then(|p| p.get("metadata")).and_then(|m| m.as_table()) {
        for (key, value) in table {
            if let Some(value) = value.as_str() {
                metadata.string(key, value)?;
            }
        }
    }

    let (key, iv) = token_keys();
    metadata.bytes("ENCRYPTION_KEY", &key)?;
    metadata.bytes("ENCRYPTION_IV", &iv)?;

    Ok(())
}
