use log::error;
use serde::Deserialize;
use serde_json::Value;

use crate::element::Element;
use crate::error::PresentationError;

/// The reference slide height in pixels, the slide width follows from
/// the configured aspect ratio.
pub const SLIDE_HEIGHT: f32 = 600.0;

/// Recognized options of presentation construction.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationOptions {
    /// A code highlighting theme identifier.
    pub highlight_style: String,
    /// A path to the markdown source which defines slide content.
    pub source_url: String,
    /// A target aspect ratio of slides, e.g. "16:9".
    pub ratio: String,
    pub navigation: Navigation,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            highlight_style: "default".to_string(),
            source_url: String::new(),
            ratio: "4:3".to_string(),
            navigation: Navigation::default(),
        }
    }
}

impl PresentationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlight_style(mut self, style: &str) -> Self {
        self.highlight_style = style.to_string();
        self
    }

    pub fn source_url(mut self, url: &str) -> Self {
        self.source_url = url.to_string();
        self
    }

    pub fn ratio(mut self, ratio: &str) -> Self {
        self.ratio = ratio.to_string();
        self
    }

    pub fn scroll(mut self, scroll: bool) -> Self {
        self.navigation.scroll = scroll;
        self
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Navigation {
    /// Disables slide navigation by mouse wheel when false.
    pub scroll: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self { scroll: true }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ratio {
    pub width: u32,
    pub height: u32,
}

impl Ratio {
    /// Reads an aspect ratio such as "16:9", both terms must be nonzero
    /// integers.
    pub fn parse(value: &str) -> Result<Self, PresentationError> {
        let invalid = || PresentationError::InvalidRatio(value.to_string());
        let mut terms = value.split(':');
        let (width, height) = match (terms.next(), terms.next(), terms.next()) {
            (Some(width), Some(height), None) => (width, height),
            _ => return Err(invalid()),
        };
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self { width, height })
    }

    /// Resolves the slide size in pixels for a given height.
    pub fn resolve(&self, height: f32) -> [f32; 2] {
        [height * self.width as f32 / self.height as f32, height]
    }
}

/// Controller of a slideshow created from markdown source. Slide content
/// rendering and navigation belong to the rendering engine, the
/// controller owns the configuration and the root element which the
/// application animates.
pub struct Presentation {
    options: PresentationOptions,
    ratio: Ratio,
    root: Element,
}

impl Presentation {
    pub fn create(options: PresentationOptions) -> Result<Self, PresentationError> {
        if options.source_url.is_empty() {
            return Err(PresentationError::SourceNotSpecified);
        }
        let ratio = Ratio::parse(&options.ratio)?;
        let mut root = Element::new("slideshow");
        root.size = ratio.resolve(SLIDE_HEIGHT);
        Ok(Self {
            options,
            ratio,
            root,
        })
    }

    /// Creates a presentation from a JSON-like options object.
    pub fn from_value(value: Value) -> Result<Self, PresentationError> {
        let options: PresentationOptions = match serde_json::from_value(value) {
            Ok(options) => options,
            Err(error) => {
                error!("unable to read presentation options, {error}");
                return Err(error.into());
            }
        };
        Self::create(options)
    }

    pub fn options(&self) -> &PresentationOptions {
        &self.options
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}
