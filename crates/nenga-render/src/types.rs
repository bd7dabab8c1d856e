use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Font error: {0}")]
    Font(#[from] owned_ttf_parser::FaceParsingError),
    #[error("Raster surface of {width}x{height} pixels is unavailable")]
    SurfaceUnavailable { width: u32, height: u32 },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
