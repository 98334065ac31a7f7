//! Detection request
//!
//! A [`DetectionRequest`] borrows the page for the duration of one
//! detection call and carries the per-page parameters. Requests are built
//! through [`DetectionRequest::builder`], which validates them once so the
//! detector never has to.

use crate::error::{LayoutError, LayoutResult};
use komawari_core::{PixelSource, Size};

/// Default cap on the number of panels in a detected sequence
pub const DEFAULT_MAX_PANELS: usize = 12;
/// Default minimum panel area as a fraction of the page area
pub const DEFAULT_MIN_PANEL_AREA_RATIO: f32 = 0.0125;
/// Default half-width of the luma band around the threshold
pub const DEFAULT_BACKGROUND_TOLERANCE: i32 = 30;

/// Reading flow used to order panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelFlow {
    /// Rows top to bottom, panels left to right within a row
    #[default]
    LeftToRight,
    /// Rows top to bottom, panels right to left within a row (manga)
    RightToLeft,
    /// Columns left to right, panels top to bottom within a column
    TopToBottom,
}

/// Immutable input to a single detection call
#[derive(Clone, Copy)]
pub struct DetectionRequest<'a> {
    source: &'a dyn PixelSource,
    page_size: Size,
    page_index: usize,
    double_page: bool,
    flow: PanelFlow,
    max_panels: usize,
    min_panel_area_ratio: f32,
    background_color: Option<u32>,
    background_tolerance: i32,
}

impl<'a> DetectionRequest<'a> {
    /// Start building a request for a page
    pub fn builder(source: &'a dyn PixelSource) -> DetectionRequestBuilder<'a> {
        DetectionRequestBuilder::new(source)
    }

    /// The page being analysed
    pub fn source(&self) -> &'a dyn PixelSource {
        self.source
    }

    /// Page size, captured from the source when the request was built
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Whether the page is a two-page spread
    pub fn is_double_page(&self) -> bool {
        self.double_page
    }

    pub fn flow(&self) -> PanelFlow {
        self.flow
    }

    pub fn max_panels(&self) -> usize {
        self.max_panels
    }

    pub fn min_panel_area_ratio(&self) -> f32 {
        self.min_panel_area_ratio
    }

    /// Known background color, if the caller has one
    pub fn background_color(&self) -> Option<u32> {
        self.background_color
    }

    /// Tolerance as requested by the caller
    pub fn background_tolerance(&self) -> i32 {
        self.background_tolerance
    }

    /// Tolerance clamped to the luma range
    pub fn effective_tolerance(&self) -> u32 {
        self.background_tolerance.clamp(0, 255) as u32
    }
}

impl std::fmt::Debug for DetectionRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionRequest")
            .field("page_size", &self.page_size)
            .field("page_index", &self.page_index)
            .field("double_page", &self.double_page)
            .field("flow", &self.flow)
            .field("max_panels", &self.max_panels)
            .field("min_panel_area_ratio", &self.min_panel_area_ratio)
            .field("background_color", &self.background_color)
            .field("background_tolerance", &self.background_tolerance)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DetectionRequest`]
pub struct DetectionRequestBuilder<'a> {
    source: &'a dyn PixelSource,
    page_index: usize,
    double_page: bool,
    flow: PanelFlow,
    max_panels: usize,
    min_panel_area_ratio: f32,
    background_color: Option<u32>,
    background_tolerance: i32,
}

impl<'a> DetectionRequestBuilder<'a> {
    fn new(source: &'a dyn PixelSource) -> Self {
        Self {
            source,
            page_index: 0,
            double_page: false,
            flow: PanelFlow::default(),
            max_panels: DEFAULT_MAX_PANELS,
            min_panel_area_ratio: DEFAULT_MIN_PANEL_AREA_RATIO,
            background_color: None,
            background_tolerance: DEFAULT_BACKGROUND_TOLERANCE,
        }
    }

    pub fn page_index(mut self, index: usize) -> Self {
        self.page_index = index;
        self
    }

    pub fn double_page(mut self, double_page: bool) -> Self {
        self.double_page = double_page;
        self
    }

    pub fn flow(mut self, flow: PanelFlow) -> Self {
        self.flow = flow;
        self
    }

    pub fn max_panels(mut self, max_panels: usize) -> Self {
        self.max_panels = max_panels;
        self
    }

    pub fn min_panel_area_ratio(mut self, ratio: f32) -> Self {
        self.min_panel_area_ratio = ratio;
        self
    }

    /// Packed `0xRRGGBB` background color; overrides corner estimation
    pub fn background_color(mut self, color: u32) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Out-of-range values are clamped to 0..=255 when used
    pub fn background_tolerance(mut self, tolerance: i32) -> Self {
        self.background_tolerance = tolerance;
        self
    }

    /// Validate and build the request
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidRequest`] if the page has a zero
    /// dimension, `max_panels` is 0, or the area ratio is outside [0, 1].
    pub fn build(self) -> LayoutResult<DetectionRequest<'a>> {
        let page_size = self.source.size();
        if page_size.is_empty() {
            return Err(LayoutError::InvalidRequest(format!(
                "image size must be positive: {} x {}",
                page_size.width, page_size.height
            )));
        }
        if self.max_panels == 0 {
            return Err(LayoutError::InvalidRequest(
                "max_panels must be > 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_panel_area_ratio) {
            return Err(LayoutError::InvalidRequest(format!(
                "min_panel_area_ratio must be within 0..1, got {}",
                self.min_panel_area_ratio
            )));
        }

        Ok(DetectionRequest {
            source: self.source,
            page_size,
            page_index: self.page_index,
            double_page: self.double_page,
            flow: self.flow,
            max_panels: self.max_panels,
            min_panel_area_ratio: self.min_panel_area_ratio,
            background_color: self.background_color,
            background_tolerance: self.background_tolerance,
        })
    }
}
