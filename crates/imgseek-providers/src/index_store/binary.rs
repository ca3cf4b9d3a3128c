//! Binary index store
//!
//! Persists an [`ImageIndex`] as a single self-describing little-endian file:
//!
//! ```text
//! magic      4 bytes  "IMGX"
//! version    u32
//! dimensions u32
//! count      u64      number of rows == number of paths
//! model_len  u32, model bytes (UTF-8)
//! checksum   u64      seahash of the payload below
//! payload:
//!   count * dimensions f32 values (row-major)
//!   count * (u32 length + UTF-8 path bytes)
//! ```
//!
//! The version is checked, never migrated.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use imgseek_domain::entities::ImageIndex;
use imgseek_domain::error::{Error, Result};
use imgseek_domain::ports::providers::IndexStore;

use crate::constants::{INDEX_FORMAT_VERSION, INDEX_MAGIC, INDEX_TEMP_SUFFIX};

const F32_SIZE: usize = std::mem::size_of::<f32>();

/// Index store writing the binary `IMGX` format
#[derive(Debug, Clone, Default)]
pub struct BinaryIndexStore;

impl BinaryIndexStore {
    /// Create a new binary index store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IndexStore for BinaryIndexStore {
    async fn save(&self, index: &ImageIndex, path: &Path) -> Result<()> {
        let bytes = encode(index)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(
                    format!("Failed to create index directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let temp = temp_path(path);
        tokio::fs::write(&temp, &bytes).await.map_err(|e| {
            Error::io_with_source(format!("Failed to write index {}", temp.display()), e)
        })?;
        tokio::fs::rename(&temp, path).await.map_err(|e| {
            Error::io_with_source(format!("Failed to replace index {}", path.display()), e)
        })?;

        debug!(
            path = %path.display(),
            images = index.len(),
            bytes = bytes.len(),
            "Index written"
        );
        Ok(())
    }

    async fn load(&self, path: &Path) -> Result<ImageIndex> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::not_found(format!("index {}", path.display())));
            }
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read index {}", path.display()),
                    e,
                ));
            }
        };
        decode(&bytes)
    }

    fn store_name(&self) -> &str {
        "binary"
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("index"));
    name.push(INDEX_TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Serialize an index into the binary format
pub fn encode(index: &ImageIndex) -> Result<Vec<u8>> {
    let dimensions = u32::try_from(index.dimensions())
        .map_err(|_| Error::internal("index dimensions do not fit in u32"))?;
    let model_len = u32::try_from(index.model().len())
        .map_err(|_| Error::internal("model name is too long"))?;

    let mut payload = Vec::with_capacity(index.vectors().len() * F32_SIZE);
    for value in index.vectors() {
        payload.extend_from_slice(&value.to_le_bytes());
    }
    for path in index.paths() {
        let len = u32::try_from(path.len())
            .map_err(|_| Error::internal(format!("path too long: {}", path)))?;
        payload.extend_from_slice(&len.to_le_bytes());
        payload.extend_from_slice(path.as_bytes());
    }

    let mut out = Vec::with_capacity(32 + index.model().len() + payload.len());
    out.extend_from_slice(INDEX_MAGIC);
    out.extend_from_slice(&INDEX_FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&dimensions.to_le_bytes());
    out.extend_from_slice(&(index.len() as u64).to_le_bytes());
    out.extend_from_slice(&model_len.to_le_bytes());
    out.extend_from_slice(index.model().as_bytes());
    out.extend_from_slice(&seahash::hash(&payload).to_le_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Parse the binary format back into an index
pub fn decode(bytes: &[u8]) -> Result<ImageIndex> {
    let mut reader = Reader::new(bytes);

    if reader.take(INDEX_MAGIC.len(), "magic")? != INDEX_MAGIC {
        return Err(Error::corrupt_index("not an imgseek index (bad magic)"));
    }
    let version = reader.u32("version")?;
    if version != INDEX_FORMAT_VERSION {
        return Err(Error::corrupt_index(format!(
            "unsupported index version {} (expected {})",
            version, INDEX_FORMAT_VERSION
        )));
    }
    let dimensions = reader.u32("dimensions")? as usize;
    let count = usize::try_from(reader.u64("count")?)
        .map_err(|_| Error::corrupt_index("image count does not fit in memory"))?;
    let model_len = reader.u32("model length")? as usize;
    let model = std::str::from_utf8(reader.take(model_len, "model name")?)
        .map_err(|_| Error::corrupt_index("model name is not valid UTF-8"))?
        .to_string();
    let checksum = reader.u64("checksum")?;

    let payload = reader.rest();
    if seahash::hash(payload) != checksum {
        return Err(Error::corrupt_index("checksum mismatch"));
    }

    let mut reader = Reader::new(payload);
    let value_count = count
        .checked_mul(dimensions)
        .ok_or_else(|| Error::corrupt_index("index shape overflows"))?;
    let vector_bytes = value_count
        .checked_mul(F32_SIZE)
        .ok_or_else(|| Error::corrupt_index("index shape overflows"))?;
    let vectors = reader
        .take(vector_bytes, "vectors")?
        .chunks_exact(F32_SIZE)
        .map(|chunk| {
            let mut raw = [0u8; F32_SIZE];
            raw.copy_from_slice(chunk);
            f32::from_le_bytes(raw)
        })
        .collect();

    let mut paths = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        let len = reader.u32("path length")? as usize;
        let path = std::str::from_utf8(reader.take(len, "path")?)
            .map_err(|_| Error::corrupt_index("path is not valid UTF-8"))?;
        paths.push(path.to_string());
    }

    if reader.remaining() != 0 {
        return Err(Error::corrupt_index(format!(
            "{} trailing bytes after the last path",
            reader.remaining()
        )));
    }

    ImageIndex::from_parts(model, dimensions, vectors, paths)
}

/// Bounds-checked cursor over a byte slice
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or_else(|| Error::corrupt_index(format!("truncated while reading {}", what)))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u32(&mut self, what: &str) -> Result<u32> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4, what)?);
        Ok(u32::from_le_bytes(raw))
    }

    fn u64(&mut self, what: &str) -> Result<u64> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8, what)?);
        Ok(u64::from_le_bytes(raw))
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn rest(&mut self) -> &'a [u8] {
        let slice = &self.bytes[self.pos..];
        self.pos = self.bytes.len();
        slice
    }
}
