//! Shared CLI helpers.

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Read a report file as text, decoding UTF-8 with a byte-wise Latin-1
/// fallback (registry exports are sometimes ISO-8859-1).
pub fn read_document(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_fallback() {
        let dir = std::env::temp_dir().join("trialbot-helpers-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("latin1.txt");
        // "café" in ISO-8859-1: 0xE9 is not valid UTF-8 on its own.
        fs::write(&path, [0x63, 0x61, 0x66, 0xE9]).unwrap();

        assert_eq!(read_document(&path).unwrap(), "café");
        fs::remove_file(&path).unwrap();
    }
}
