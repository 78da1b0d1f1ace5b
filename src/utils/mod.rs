use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use log::trace;
use rust_embed::RustEmbed;

mod macros;

#[derive(RustEmbed)]
#[folder = "resources/"]
pub struct Resources;

impl Resources {
    pub const SAMPLE_CONFIG: &'static str = "sample_config.json";

    /// Returns the bundled example configuration.
    pub fn sample_config() -> anyhow::Result<Vec<u8>> {
        Self::get(Self::SAMPLE_CONFIG)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| anyhow::anyhow!("missing embedded resource `{}`", Self::SAMPLE_CONFIG))
    }
}

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

pub fn create_dir_all(path: impl AsRef<Path>) -> io::Result<()> {
    trace!("creating directory: {}", path.as_ref().display());
    fs::create_dir_all(path)
}

pub trait PathExt {
    #[must_use]
    fn has_extension(&self, extension: &str) -> bool;
}

impl PathExt for Path {
    fn has_extension(&self, extension: &str) -> bool {
        self.extension()
            .and_then(OsStr::to_str)
            .map_or(false, |ext| ext.eq_ignore_ascii_case(extension))
    }
}
