//! Overlay geometry: the measured region, its markers, and the renderer seam.
//!
//! The builder is pure: a complete calibration pair plus stock dimensions
//! produce a new `OverlayGeometry` value on every call, so it is testable
//! without any rendering surface. The renderer itself is an external
//! collaborator behind the `OverlayRenderer` trait; the core owns no
//! rendering state beyond the opaque handle.

use crate::session::Slot;
use originkit_core::coordinate::{active_horizontal, to_overlay_space};
use originkit_core::data::{CalibrationPair, MachinePoint, StockDimensions};
use originkit_core::geometry::{bounding_box, PlanePoint, Rect};
use serde::{Deserialize, Serialize};

/// Marker crosshair color for committed reference points
pub const MARKER_COLOR: &str = "#242424";
/// Marker crosshair color for the point currently being measured
pub const PROVISIONAL_MARKER_COLOR: &str = "#FF5759";
/// Dashed outline color of a committed measured region
pub const HIGHLIGHT_COLOR: &str = "#47D700";

/// Declarative description of the calibration overlay, in overlay space
/// (top-left origin).
///
/// The `measured_rect` is the region spanned by the two reference points;
/// everything else on the stock is the dimmed, unmeasured region. The
/// rect may legitimately extend past the stock bounds when the operator
/// measured outside the declared stock; that is surfaced visually, never
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    /// The measured/target region
    pub measured_rect: Rect,
    /// Crosshair positions for points A and B, in that order
    pub markers: [PlanePoint; 2],
    /// Whether the region gets the committed highlight outline
    pub highlighted: bool,
}

/// Pure translator from a calibration pair to overlay geometry.
pub struct OverlayGeometryBuilder;

impl OverlayGeometryBuilder {
    /// Build overlay geometry for a pair, or `None` when the pair is not
    /// complete for the stock's mode. Incompleteness is a normal state,
    /// not an error; callers clear dependent output instead.
    pub fn build(
        pair: &CalibrationPair,
        stock: &StockDimensions,
        highlighted: bool,
    ) -> Option<OverlayGeometry> {
        if !pair.is_complete(stock.is_rotate) {
            return None;
        }

        // Completeness guarantees the active axes are set and finite.
        let resolve = |point: &MachinePoint| {
            PlanePoint::new(
                active_horizontal(point, stock.is_rotate).unwrap_or(f64::NAN),
                point.y.unwrap_or(f64::NAN),
            )
        };
        let a = resolve(&pair.a);
        let b = resolve(&pair.b);

        let rect = bounding_box(a, b);
        let measured_rect = Rect {
            min_x: rect.min_x,
            // stock space is bottom-up, overlay space top-down
            min_y: stock.height - (rect.min_y + rect.height),
            width: rect.width,
            height: rect.height,
        };

        Some(OverlayGeometry {
            measured_rect,
            markers: [to_overlay_space(a, stock), to_overlay_space(b, stock)],
            highlighted,
        })
    }
}

/// Renderer interface implemented by the external visual surface.
///
/// The handle is opaque to the core; `render_mask` is required to replace
/// any previously rendered mask wholesale (old mask nodes fully removed
/// first) so no stale geometry survives an update.
pub trait OverlayRenderer {
    /// Opaque handle to an overlay root
    type Handle;

    /// Ensure an overlay root sized to the stock exists
    fn ensure_root(&mut self, stock: &StockDimensions) -> Self::Handle;

    /// Render the mask for a geometry, replacing any previous mask
    fn render_mask(&mut self, handle: &Self::Handle, geometry: &OverlayGeometry);

    /// Render (or move) a marker crosshair for one slot
    fn render_marker(&mut self, handle: &Self::Handle, point: PlanePoint, color: &str, slot: Slot);

    /// Tear the overlay down entirely
    fn teardown(&mut self, handle: Self::Handle);
}

/// Applies session overlay updates to a renderer.
///
/// Owns the overlay handle lifecycle so the session itself stays free of
/// rendering state.
pub struct OverlayController<R: OverlayRenderer> {
    renderer: R,
    handle: Option<R::Handle>,
}

impl<R: OverlayRenderer> OverlayController<R> {
    /// Create a controller around a renderer
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            handle: None,
        }
    }

    /// Apply one overlay update produced by the calibration session.
    pub fn apply(&mut self, stock: &StockDimensions, update: &crate::session::OverlayUpdate) {
        use crate::session::OverlayUpdate;

        match update {
            OverlayUpdate::None => {}
            OverlayUpdate::Clear => {
                if let Some(handle) = self.handle.take() {
                    self.renderer.teardown(handle);
                }
            }
            OverlayUpdate::Render { geometry, active } => {
                if self.handle.is_none() {
                    self.handle = Some(self.renderer.ensure_root(stock));
                }
                let handle = self.handle.as_ref().unwrap();
                self.renderer.render_mask(handle, geometry);
                for (slot, point) in [Slot::A, Slot::B].into_iter().zip(geometry.markers) {
                    let color = if *active == Some(slot) {
                        PROVISIONAL_MARKER_COLOR
                    } else {
                        MARKER_COLOR
                    };
                    self.renderer.render_marker(handle, point, color, slot);
                }
            }
        }
    }

    /// Access the wrapped renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Whether an overlay root is currently alive
    pub fn has_overlay(&self) -> bool {
        self.handle.is_some()
    }
}
