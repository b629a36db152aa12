//! Rendering options and page geometry.

use chrono::{DateTime, Utc};

/// Fixed page geometry, in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Uniform margin on all four sides
    pub margin: f32,

    /// Height reserved at the bottom for the footer line
    pub footer_height: f32,
}

impl PageGeometry {
    /// A4 (210 x 297 mm) with the standard e-book margin.
    pub fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 40.0,
            footer_height: 30.0,
        }
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 40.0,
            footer_height: 30.0,
        }
    }

    /// Horizontal space available to content.
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Vertical space available to content above the footer.
    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin - self.footer_height
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Options for pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Page geometry
    pub geometry: PageGeometry,

    /// Author shown on the cover ("By {author}")
    pub author: Option<String>,

    /// Generation timestamp shown on the cover, if set
    pub generated_at: Option<DateTime<Utc>>,

    /// Height reserved for a bound figure image, in points. The writer
    /// scales the image to fit this box.
    pub image_box_height: f32,
}

impl RenderOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cover author line.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the cover generation timestamp.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Set the reserved figure image height.
    pub fn with_image_box_height(mut self, height: f32) -> Self {
        self.image_box_height = height;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            author: None,
            generated_at: None,
            image_box_height: 180.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_content_box() {
        let geometry = PageGeometry::a4();
        assert_eq!(geometry.content_width(), 515.0);
        assert_eq!(geometry.content_height(), 732.0);
    }

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_author("Jane Dev")
            .with_geometry(PageGeometry::letter())
            .with_image_box_height(120.0);

        assert_eq!(options.author.as_deref(), Some("Jane Dev"));
        assert_eq!(options.geometry.width, 612.0);
        assert_eq!(options.image_box_height, 120.0);
    }
}
