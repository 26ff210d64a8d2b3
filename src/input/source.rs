use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use memmap2::Mmap;

use crate::input::InputError;

pub fn find_input_path(path: &Path) -> Result<PathBuf, InputError> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }
    let mut gz = path.as_os_str().to_owned();
    gz.push(".gz");
    let gz = PathBuf::from(gz);
    if gz.exists() {
        return Ok(gz);
    }
    Err(InputError::MissingInput(format!(
        "{} (or {}.gz) not found",
        path.display(),
        path.display()
    )))
}

/// Record file contents: mapped for plain files, decompressed for gzip.
#[derive(Debug)]
pub enum InputBytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for InputBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputBytes::Mapped(mmap) => &mmap[..],
            InputBytes::Owned(bytes) => bytes,
        }
    }
}

pub fn read_input_bytes(path: &Path) -> Result<InputBytes, InputError> {
    let file = File::open(path)?;
    let bytes = if path.extension().is_some_and(|ext| ext == "gz") {
        let mut out = Vec::new();
        GzDecoder::new(file).read_to_end(&mut out)?;
        InputBytes::Owned(out)
    } else {
        if file.metadata()?.len() == 0 {
            return Err(InputError::Parse(format!("{} is empty", path.display())));
        }
        InputBytes::Mapped(unsafe { Mmap::map(&file)? })
    };
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(InputError::Parse(format!("{} is empty", path.display())));
    }
    Ok(bytes)
}
