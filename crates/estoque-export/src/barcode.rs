//! # Barcode Renderer
//!
//! Writes one Code 128 PNG per product, named after the code:
//!
//! ```text
//!   code "P00001"
//!      │  Code128 (character set B)
//!      ▼
//!   ▌▌ ▌▌▌ ▌ ▌▌ ▌▌▌▌ ▌ ▌▌   (PNG, `height` px tall)
//!      │
//!      ▼
//!   <output_dir>/P00001.png   (directory created on demand)
//! ```
//!
//! Code 128 set B covers every printable ASCII character, which includes
//! every generated code. The browser scanner decodes it with
//! `code_128_reader`.

use std::path::{Path, PathBuf};

use barcoders::generators::image::Image;
use barcoders::sym::code128::Code128;
use tracing::{debug, info};

use crate::error::{BarcodeError, BarcodeResult};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "codigos";

/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 80;

/// Prefix selecting Code 128 character set B.
const CHARSET_B: char = 'Ɓ';

/// Renders and stores barcode images.
#[derive(Debug, Clone)]
pub struct BarcodeRenderer {
    output_dir: PathBuf,
    height: u32,
}

impl BarcodeRenderer {
    /// Creates a renderer writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        BarcodeRenderer {
            output_dir: output_dir.into(),
            height: DEFAULT_HEIGHT,
        }
    }

    /// Sets the image height in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name for a code's image, e.g. `P00001.png`.
    pub fn file_name(code: &str) -> String {
        format!("{code}.png")
    }

    /// Where the image for `code` is (or will be) stored.
    pub fn image_path(&self, code: &str) -> PathBuf {
        self.output_dir.join(Self::file_name(code))
    }

    /// Encodes `code` as PNG bytes without touching the disk.
    pub fn encode_png(&self, code: &str) -> BarcodeResult<Vec<u8>> {
        validate_code(code)?;

        let symbol = Code128::new(format!("{CHARSET_B}{code}")).map_err(|e| {
            BarcodeError::Encode {
                code: code.to_string(),
                reason: format!("{e:?}"),
            }
        })?;
        let modules = symbol.encode();

        Image::png(self.height)
            .generate(&modules[..])
            .map_err(|e| BarcodeError::Image {
                code: code.to_string(),
                reason: format!("{e:?}"),
            })
    }

    /// Renders the barcode for `code` and writes it to disk.
    ///
    /// ## Returns
    /// The path of the written file.
    pub async fn render(&self, code: &str) -> BarcodeResult<PathBuf> {
        let png = self.encode_png(code)?;

        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.image_path(code);
        tokio::fs::write(&path, &png).await?;

        debug!(bytes = png.len(), "Barcode PNG written");
        info!(code = %code, path = %path.display(), "Barcode rendered");
        Ok(path)
    }
}

impl Default for BarcodeRenderer {
    fn default() -> Self {
        BarcodeRenderer::new(DEFAULT_OUTPUT_DIR)
    }
}

/// Rejects codes that cannot safely become a single file name.
fn validate_code(code: &str) -> BarcodeResult<()> {
    let unsafe_name = code.is_empty()
        || code.contains(['/', '\\'])
        || code == "."
        || code == ".."
        || code.chars().any(|c| c.is_control());

    if unsafe_name {
        return Err(BarcodeError::InvalidCode(code.to_string()));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_image_path() {
        let renderer = BarcodeRenderer::default();
        assert_eq!(
            renderer.image_path("P00001"),
            PathBuf::from("codigos").join("P00001.png")
        );
    }

    #[test]
    fn test_encode_png() {
        let png = BarcodeRenderer::default().encode_png("P00001").unwrap();
        assert!(png.starts_with(PNG_MAGIC));
    }

    #[test]
    fn test_rejects_path_like_codes() {
        let renderer = BarcodeRenderer::default();
        for code in ["", "../P00001", "a/b", "..", "a\\b"] {
            assert!(
                matches!(renderer.encode_png(code), Err(BarcodeError::InvalidCode(_))),
                "{code:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_render_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("codigos");
        let renderer = BarcodeRenderer::new(&out).with_height(40);

        let path = renderer.render("P00042").await.unwrap();

        assert_eq!(path, out.join("P00042.png"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }

    #[tokio::test]
    async fn test_render_fails_when_directory_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("codigos");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = BarcodeRenderer::new(&blocker)
            .render("P00001")
            .await
            .unwrap_err();
        assert!(matches!(err, BarcodeError::Io(_)));
    }
}
