//! Known-answer vectors in NIST `.rsp` layout
//!
//! Files live next to this module, one directory per mode. Each file has an
//! `[ENCRYPT]` and a `[DECRYPT]` section; every vector starts with
//! `COUNT = n` followed by `KEY`, an optional `IV` or `CTR` line, and the
//! `PLAINTEXT` / `CIPHERTEXT` pair in either order.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading vector files
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: hex decode error: {source}")]
    Hex {
        line: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("line {line}: unrecognised entry '{text}'")]
    Malformed { line: usize, text: String },

    #[error("vector COUNT = {count}: missing required field {field}")]
    MissingField { count: usize, field: &'static str },

    #[error("line {line}: field appears before any [ENCRYPT] or [DECRYPT] section")]
    NoSection { line: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// Which operation a vector exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// One known-answer vector
#[derive(Debug, Clone)]
pub struct AesVector {
    pub count: usize,
    pub direction: Direction,
    pub key: Vec<u8>,
    /// `IV` for CBC, `CTR` for counter mode, absent for ECB
    pub iv: Option<Vec<u8>>,
    pub plaintext: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl AesVector {
    /// The input for this vector's direction
    pub fn input(&self) -> &[u8] {
        match self.direction {
            Direction::Encrypt => &self.plaintext,
            Direction::Decrypt => &self.ciphertext,
        }
    }

    /// The expected output for this vector's direction
    pub fn expected(&self) -> &[u8] {
        match self.direction {
            Direction::Encrypt => &self.ciphertext,
            Direction::Decrypt => &self.plaintext,
        }
    }
}

#[derive(Default)]
struct Partial {
    count: usize,
    key: Option<Vec<u8>>,
    iv: Option<Vec<u8>>,
    plaintext: Option<Vec<u8>>,
    ciphertext: Option<Vec<u8>>,
}

impl Partial {
    fn finish(self, direction: Direction) -> Result<AesVector> {
        let count = self.count;
        let missing = |field| VectorError::MissingField { count, field };

        Ok(AesVector {
            count,
            direction,
            key: self.key.ok_or_else(|| missing("KEY"))?,
            iv: self.iv,
            plaintext: self.plaintext.ok_or_else(|| missing("PLAINTEXT"))?,
            ciphertext: self.ciphertext.ok_or_else(|| missing("CIPHERTEXT"))?,
        })
    }
}

/// Parses the text of an `.rsp` file
pub fn parse(text: &str) -> Result<Vec<AesVector>> {
    let mut vectors = Vec::new();
    let mut direction = None;
    let mut current: Option<Partial> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let section = match line {
            "[ENCRYPT]" => Some(Direction::Encrypt),
            "[DECRYPT]" => Some(Direction::Decrypt),
            _ => None,
        };
        if let Some(next) = section {
            if let (Some(partial), Some(dir)) = (current.take(), direction) {
                vectors.push(partial.finish(dir)?);
            }
            direction = Some(next);
            continue;
        }

        let (name, value) = line
            .split_once('=')
            .map(|(n, v)| (n.trim(), v.trim()))
            .ok_or_else(|| VectorError::Malformed {
                line: line_no,
                text: line.to_string(),
            })?;

        let dir = direction.ok_or(VectorError::NoSection { line: line_no })?;

        if name == "COUNT" {
            if let Some(partial) = current.take() {
                vectors.push(partial.finish(dir)?);
            }
            let count = value.parse().map_err(|_| VectorError::Malformed {
                line: line_no,
                text: line.to_string(),
            })?;
            current = Some(Partial {
                count,
                ..Partial::default()
            });
            continue;
        }

        let partial = current.as_mut().ok_or_else(|| VectorError::Malformed {
            line: line_no,
            text: line.to_string(),
        })?;
        let bytes = hex::decode(value).map_err(|source| VectorError::Hex {
            line: line_no,
            source,
        })?;

        match name {
            "KEY" => partial.key = Some(bytes),
            "IV" | "CTR" => partial.iv = Some(bytes),
            "PLAINTEXT" => partial.plaintext = Some(bytes),
            "CIPHERTEXT" => partial.ciphertext = Some(bytes),
            _ => {
                return Err(VectorError::Malformed {
                    line: line_no,
                    text: line.to_string(),
                })
            }
        }
    }

    if let (Some(partial), Some(dir)) = (current, direction) {
        vectors.push(partial.finish(dir)?);
    }

    Ok(vectors)
}

/// Absolute path of a vector file, relative to this directory
pub fn path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join(relative)
}

/// Reads and parses a vector file, e.g. `load("cbc/CBC-AES128.rsp")`
pub fn load(relative: &str) -> Result<Vec<AesVector>> {
    let path = path(relative);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io { path, source })?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_sections() {
        let text = "\
# comment
[ENCRYPT]

COUNT = 0
KEY = 00112233
IV = aabb
PLAINTEXT = 01
CIPHERTEXT = 02

[DECRYPT]
COUNT = 0
KEY = 00112233
CIPHERTEXT = 02
PLAINTEXT = 01
";
        let vectors = parse(text).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].direction, Direction::Encrypt);
        assert_eq!(vectors[0].iv.as_deref(), Some(&[0xaa, 0xbb][..]));
        assert_eq!(vectors[0].input(), &[0x01]);
        assert_eq!(vectors[1].direction, Direction::Decrypt);
        assert_eq!(vectors[1].input(), &[0x02]);
        assert_eq!(vectors[1].expected(), &[0x01]);
        assert!(vectors[1].iv.is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse("[ENCRYPT]\nCOUNT = 0\nKEY = 00\nPLAINTEXT = 00\n"),
            Err(VectorError::MissingField { count: 0, field: "CIPHERTEXT" })
        ));
        assert!(matches!(
            parse("[ENCRYPT]\nCOUNT = 0\nKEY = zz\n"),
            Err(VectorError::Hex { line: 3, .. })
        ));
        assert!(matches!(
            parse("COUNT = 0\n"),
            Err(VectorError::NoSection { line: 1 })
        ));
        assert!(matches!(
            parse("[ENCRYPT]\nCOUNT = 0\nTAG = 00\n"),
            Err(VectorError::Malformed { line: 3, .. })
        ));
    }

    #[test]
    fn test_bundled_files_parse() {
        for file in [
            "ecb/ECB-AES128.rsp",
            "ecb/ECB-AES192.rsp",
            "ecb/ECB-AES256.rsp",
            "cbc/CBC-AES128.rsp",
            "cbc/CBC-AES192.rsp",
            "cbc/CBC-AES256.rsp",
            "ctr/CTR-AES128.rsp",
            "ctr/CTR-AES192.rsp",
            "ctr/CTR-AES256.rsp",
            "fips197/ECB-FIPS197.rsp",
        ] {
            let vectors = load(file).unwrap();
            assert!(!vectors.is_empty(), "{}", file);
            assert!(vectors.iter().any(|v| v.direction == Direction::Encrypt));
            assert!(vectors.iter().any(|v| v.direction == Direction::Decrypt));
        }
    }
}
