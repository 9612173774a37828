use std::path::PathBuf;

/// Which coordinate frame spline points are projected through.
///
/// The original add-on shipped two exporter variants with different
/// policies; both are kept and the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformSpace {
    /// Flip composed with the object's world matrix (translation excluded;
    /// translation becomes the instance position)
    #[default]
    World,
    /// Flip only; object rotation/scale is ignored
    Local,
}

/// How the composed document is rendered to SVG.
///
/// Both strategies draw the same document and paint identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// Reusable shape groups in `<defs>` plus positioned `<use>` references
    #[default]
    Definitions,
    /// Each instance emitted inline as a translated group of paths
    Direct,
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Canvas width in px
    pub width: u32,
    /// Canvas height in px
    pub height: u32,
    /// Scene-unit to canvas-unit scale factor
    pub scale: f64,
    pub use_background: bool,
    /// Linear RGBA in [0, 1]
    pub background_color: [f64; 4],
    pub space: TransformSpace,
    pub strategy: RenderStrategy,
    /// Output file path
    pub output: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            scale: 100.0,
            use_background: false,
            background_color: [0.8, 0.8, 0.8, 0.8],
            space: TransformSpace::default(),
            strategy: RenderStrategy::default(),
            output: PathBuf::from("sample.svg"),
        }
    }
}
