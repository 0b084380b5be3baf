//! Locator state of one rendering session.
//!
//! [`LocatorSet`] bundles the locators the render driver needs and the
//! image-dependent settings used to derive their bounding boxes. The driver
//! owns one set and passes it by reference; there is no global state.

use chart_common::{LocatorResult, PixelBox};
use tracing::debug;

use crate::config::{LabelDistances, Margin, PlacementConfig};
use crate::extrema_locator::ExtremaLocator;
use crate::label_locator::LabelLocator;

#[derive(Debug, Clone)]
pub struct LocatorSet {
    /// Contour value labels
    pub labels: LabelLocator,
    /// Contour font glyphs
    pub symbols: LabelLocator,
    /// Contour symbol images
    pub images: LabelLocator,
    /// High/low pressure markers
    pub pressure: ExtremaLocator,
    label_margin: Margin,
    symbol_margin: i32,
    image_size: Option<(u32, u32)>,
}

impl Default for LocatorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl LocatorSet {
    pub fn new() -> Self {
        Self {
            labels: LabelLocator::new(),
            symbols: LabelLocator::new(),
            images: LabelLocator::new(),
            pressure: ExtremaLocator::new(),
            label_margin: Margin::default(),
            symbol_margin: 30,
            image_size: None,
        }
    }

    /// Build a set with the distances and margins of a configuration.
    pub fn from_config(config: &PlacementConfig) -> LocatorResult<Self> {
        let mut set = Self::new();
        apply_distances(&mut set.labels, &config.labels)?;
        apply_distances(&mut set.symbols, &config.symbols)?;
        apply_distances(&mut set.images, &config.images)?;
        set.pressure.set_min_distance_to_same(config.pressure.same)?;
        set.pressure
            .set_min_distance_to_different(config.pressure.different)?;
        set.label_margin = config.label_margin;
        set.symbol_margin = config.symbol_margin;
        Ok(set)
    }

    /// Set the inset of the label box. Takes effect at the next image.
    pub fn set_label_margin(&mut self, x: i32, y: i32) {
        self.label_margin = Margin { x, y };
        self.image_size = None;
    }

    pub fn label_margin(&self) -> Margin {
        self.label_margin
    }

    /// Derive the bounding boxes for an image of the given size.
    ///
    /// Labels must stay inside the image minus the label margin. Symbols and
    /// markers may be centred slightly outside the image, since they are
    /// drawn clipped. Boxes are only set again when the image size changes,
    /// so this can be called for every frame.
    pub fn prepare_image(&mut self, width: u32, height: u32) -> LocatorResult<()> {
        if self.image_size == Some((width, height)) {
            return Ok(());
        }

        let image = PixelBox::from_image_size(width, height)?;
        let label_box = image.shrink(self.label_margin.x, self.label_margin.y)?;
        let symbol_box = image.expand(self.symbol_margin, self.symbol_margin)?;

        set_box(&mut self.labels, &label_box)?;
        set_box(&mut self.symbols, &symbol_box)?;
        set_box(&mut self.images, &symbol_box)?;
        self.pressure
            .bounding_box(symbol_box.x1, symbol_box.y1, symbol_box.x2, symbol_box.y2)?;

        debug!(
            width,
            height,
            ?label_box,
            ?symbol_box,
            "Prepared locator bounding boxes"
        );

        self.image_size = Some((width, height));
        Ok(())
    }

    /// Start a new animation frame in every locator.
    pub fn next_time(&mut self) {
        self.labels.next_time();
        self.symbols.next_time();
        self.images.next_time();
        self.pressure.next_time();
    }

    /// Forget all label, symbol and marker locations.
    pub fn clear_contours(&mut self) {
        self.labels.clear();
        self.symbols.clear();
        self.images.clear();
        self.pressure.clear();
    }

    /// Forget contour value label locations only.
    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }

    /// Forget pressure marker locations only.
    pub fn clear_pressure(&mut self) {
        self.pressure.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
            && self.symbols.is_empty()
            && self.images.is_empty()
            && self.pressure.is_empty()
    }
}

fn apply_distances(locator: &mut LabelLocator, distances: &LabelDistances) -> LocatorResult<()> {
    locator.set_min_distance_to_same_value(distances.same_value)?;
    locator.set_min_distance_to_different_value(distances.different_value)?;
    locator.set_min_distance_to_different_parameter(distances.different_parameter)?;
    Ok(())
}

fn set_box(locator: &mut LabelLocator, bbox: &PixelBox) -> LocatorResult<()> {
    locator.bounding_box(bbox.x1, bbox.y1, bbox.x2, bbox.y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_image_sets_boxes() {
        let mut set = LocatorSet::new();
        set.set_label_margin(10, 5);
        set.prepare_image(200, 100).unwrap();

        assert_eq!(
            set.labels.bbox(),
            Some(&PixelBox::new(10, 5, 190, 95).unwrap())
        );
        let symbol_box = PixelBox::new(-30, -30, 230, 130).unwrap();
        assert_eq!(set.symbols.bbox(), Some(&symbol_box));
        assert_eq!(set.images.bbox(), Some(&symbol_box));
        assert_eq!(set.pressure.bbox(), Some(&symbol_box));
    }

    #[test]
    fn test_prepare_same_image_is_noop_once_locked() {
        let mut set = LocatorSet::new();
        set.prepare_image(200, 100).unwrap();
        set.labels.parameter(1).unwrap();
        set.labels.add(1.0, 50, 50).unwrap();

        assert!(set.prepare_image(200, 100).is_ok());
        assert!(set.prepare_image(300, 100).is_err());
    }

    #[test]
    fn test_from_config() {
        let mut config = PlacementConfig::default();
        config.images = LabelDistances::uniform(25.0);
        config.pressure.same = 300.0;

        let set = LocatorSet::from_config(&config).unwrap();
        assert_eq!(set.images.min_distance_to_same_value(), 25.0);
        assert_eq!(set.images.min_distance_to_different_parameter(), 25.0);
        assert_eq!(set.labels.min_distance_to_same_value(), 100.0);
        assert_eq!(set.pressure.min_distance_to_same(), 300.0);
    }
}
