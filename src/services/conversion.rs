//! Conversion service: files in, Koala file and preview out.

use std::fs;
use std::path::{Path, PathBuf};
use tile_dither::output::koala;
use tile_dither::{MasterPalette, MulticolorBitmap, MulticolorConverter};

use crate::error::ConvertError;
use crate::models::{AppConfig, OutputConfig};
use crate::rendering::{encode_preview, load_image, PngOptions};

/// Where a conversion writes its results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub data: PathBuf,
    pub preview: Option<PathBuf>,
}

impl OutputPaths {
    /// Derive output names from the input: `<stem>.<ext>` and
    /// `<stem><suffix>.png` next to the input file.
    pub fn for_input(input: &Path, output: &OutputConfig) -> Self {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "out".to_string());
        let dir = input.parent().unwrap_or_else(|| Path::new(""));

        let data = dir.join(format!("{stem}.{}", output.data_extension));
        let preview = output
            .preview
            .then(|| dir.join(format!("{stem}{}.png", output.preview_suffix)));
        Self { data, preview }
    }
}

/// One conversion request
#[derive(Debug, Clone)]
pub struct ConvertJob {
    pub input: PathBuf,
    pub outputs: OutputPaths,
}

/// Summary of a finished conversion
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub data_path: PathBuf,
    pub data_bytes: usize,
    pub preview_path: Option<PathBuf>,
    pub background: u8,
    pub background_cost: u32,
    pub overflow_tiles: usize,
}

/// Converts image files according to an [`AppConfig`]
pub struct ConvertService {
    converter: MulticolorConverter,
    png: PngOptions,
}

impl ConvertService {
    pub fn new(config: &AppConfig) -> Result<Self, ConvertError> {
        let master = config.master_palette()?;
        let mut converter = MulticolorConverter::new(master);
        if let Some(index) = config.background {
            converter = converter.background(index);
        }
        Ok(Self {
            converter,
            png: PngOptions {
                optimize: config.output.optimize_png,
            },
        })
    }

    pub fn master(&self) -> &MasterPalette {
        self.converter.master()
    }

    /// Decode, convert and write a Koala file (plus preview).
    ///
    /// Nothing is written unless the conversion succeeds.
    pub fn convert(&self, job: &ConvertJob) -> Result<ConvertReport, ConvertError> {
        let source = load_image(&job.input)?;
        tracing::info!(
            input = %job.input.display(),
            width = source.width(),
            height = source.height(),
            "Converting"
        );

        let result = self.converter.convert(&source)?;
        tracing::info!(
            background = result.background.index,
            cost = result.background.cost,
            overflow_tiles = result.overflow_tiles,
            "Planned tile palettes"
        );
        tracing::debug!(costs = ?result.background.costs, "Background costs");

        let data = koala::encode(&result.bitmap);
        let preview = match job.outputs.preview {
            Some(_) => Some(encode_preview(&result.bitmap, self.png)?),
            None => None,
        };

        write_file(&job.outputs.data, &data)?;
        if let (Some(path), Some(bytes)) = (&job.outputs.preview, &preview) {
            write_file(path, bytes)?;
        }

        Ok(ConvertReport {
            data_path: job.outputs.data.clone(),
            data_bytes: data.len(),
            preview_path: job.outputs.preview.clone(),
            background: result.background.index,
            background_cost: result.background.cost,
            overflow_tiles: result.overflow_tiles,
        })
    }

    /// Render an existing Koala file to a preview PNG.
    pub fn view(&self, input: &Path, output: &Path) -> Result<MulticolorBitmap, ConvertError> {
        let data = fs::read(input)?;
        let bitmap = koala::decode(&data, self.master())?;
        tracing::info!(
            input = %input.display(),
            background = bitmap.background(),
            "Decoded Koala file"
        );
        let png = encode_preview(&bitmap, self.png)?;
        write_file(output, &png)?;
        Ok(bitmap)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote");
    Ok(())
}
