// Textures, the images they sample and the samplers that filter them.

use std::fmt;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Texture {
    pub sampler: Option<usize>,
    /// Image index supplying the pixels.
    pub source: Option<usize>,
    pub name: Option<String>,
}

/// A referenced image. Pixels are never decoded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub source: ImageSource,
    pub name: Option<String>,
}

/// Where an image's bytes come from. A glTF image declares exactly one of
/// the two.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// A `data:` URI or a path relative to the document.
    Uri(String),
    /// A slice of loaded buffer data together with its media type.
    BufferView {
        buffer_view: usize,
        mime_type: String,
    },
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Uri(uri) if uri.starts_with("data:") => f.write_str("<data uri>"),
            ImageSource::Uri(uri) => write!(f, "uri {uri}"),
            ImageSource::BufferView {
                buffer_view,
                mime_type,
            } => write!(f, "buffer view {buffer_view} ({mime_type})"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sampler {
    pub mag_filter: Option<MagFilter>,
    pub min_filter: Option<MinFilter>,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub name: Option<String>,
}

/// Magnification filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagFilter {
    Nearest, // 9728
    Linear,  // 9729
}

impl MagFilter {
    pub fn from_gl(code: u32) -> Option<Self> {
        match code {
            9728 => Some(MagFilter::Nearest),
            9729 => Some(MagFilter::Linear),
            _ => None,
        }
    }
}

impl fmt::Display for MagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagFilter::Nearest => f.write_str("Nearest"),
            MagFilter::Linear => f.write_str("Linear"),
        }
    }
}

/// Minification filter, including the mipmap variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinFilter {
    Nearest,              // 9728
    Linear,               // 9729
    NearestMipmapNearest, // 9984
    LinearMipmapNearest,  // 9985
    NearestMipmapLinear,  // 9986
    LinearMipmapLinear,   // 9987
}

impl MinFilter {
    pub fn from_gl(code: u32) -> Option<Self> {
        match code {
            9728 => Some(MinFilter::Nearest),
            9729 => Some(MinFilter::Linear),
            9984 => Some(MinFilter::NearestMipmapNearest),
            9985 => Some(MinFilter::LinearMipmapNearest),
            9986 => Some(MinFilter::NearestMipmapLinear),
            9987 => Some(MinFilter::LinearMipmapLinear),
            _ => None,
        }
    }
}

impl fmt::Display for MinFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinFilter::Nearest => f.write_str("Nearest"),
            MinFilter::Linear => f.write_str("Linear"),
            MinFilter::NearestMipmapNearest => f.write_str("Nearest Mipmap Nearest"),
            MinFilter::LinearMipmapNearest => f.write_str("Linear Mipmap Nearest"),
            MinFilter::NearestMipmapLinear => f.write_str("Nearest Mipmap Linear"),
            MinFilter::LinearMipmapLinear => f.write_str("Linear Mipmap Linear"),
        }
    }
}

/// Texture coordinate wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    ClampToEdge,    // 33071
    MirroredRepeat, // 33648
    Repeat,         // 10497
}

impl WrapMode {
    pub fn from_gl(code: u32) -> Option<Self> {
        match code {
            33071 => Some(WrapMode::ClampToEdge),
            33648 => Some(WrapMode::MirroredRepeat),
            10497 => Some(WrapMode::Repeat),
            _ => None,
        }
    }
}

impl Default for WrapMode {
    fn default() -> Self {
        WrapMode::Repeat
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapMode::ClampToEdge => f.write_str("Clamp To Edge"),
            WrapMode::MirroredRepeat => f.write_str("Mirrored Repeat"),
            WrapMode::Repeat => f.write_str("Repeat"),
        }
    }
}
