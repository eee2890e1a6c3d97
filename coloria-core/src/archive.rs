//! Zip container for bulk downloads.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const BULK_ARCHIVE_NAME: &str = "selected_images.zip";

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Entry names must be unique inside one archive. Repeats of `x.png` become
/// `x (2).png`, `x (3).png`, ...
fn unique_name(name: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.to_string()) {
        return name.to_string();
    }
    let (stem, ext) = match name.rfind('.') {
        Some(dot) if dot > 0 => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    };
    let mut n = 2;
    loop {
        let candidate = format!("{stem} ({n}){ext}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Build a deflated zip from `(entry name, bytes)` pairs, in order.
pub fn build_zip<I>(entries: I) -> Result<Vec<u8>, ArchiveError>
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut taken = HashSet::new();

    for (name, data) in entries {
        let name = unique_name(&name, &mut taken);
        writer.start_file(name, options)?;
        writer.write_all(&data)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn entry_names(bytes: Vec<u8>) -> Vec<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn duplicate_names_get_suffix() {
        let bytes = build_zip(vec![
            ("cat.png".to_string(), vec![1]),
            ("cat.png".to_string(), vec![2]),
            ("cat.png".to_string(), vec![3]),
            ("dog.png".to_string(), vec![4]),
        ])
        .unwrap();
        assert_eq!(
            entry_names(bytes),
            vec!["cat.png", "cat (2).png", "cat (3).png", "dog.png"]
        );
    }

    #[test]
    fn contents_survive() {
        let payload = vec![7u8; 4096];
        let bytes = build_zip(vec![("a.png".to_string(), payload.clone())]).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut out = Vec::new();
        archive.by_name("a.png").unwrap().read_to_end(&mut out).unwrap();
        assert_eq!(out, payload);
    }

    #[test]
    fn empty_archive_is_valid() {
        let bytes = build_zip(Vec::new()).unwrap();
        assert!(entry_names(bytes).is_empty());
    }
}
