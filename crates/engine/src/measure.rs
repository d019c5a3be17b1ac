//! Content measurement callbacks.

use layout_values::{LayoutSize, MeasureMode};

/// Intrinsic-size provider for leaf content such as text or images.
///
/// Called with the content-box constraints of the leaf. The returned size is clamped to the
/// constraint modes by the solver, so an implementation may return its natural size.
pub trait Measure {
    fn measure(
        &mut self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> LayoutSize;
}

impl<F> Measure for F
where
    F: FnMut(f32, MeasureMode, f32, MeasureMode) -> LayoutSize,
{
    #[inline]
    fn measure(
        &mut self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> LayoutSize {
        self(width, width_mode, height, height_mode)
    }
}

/// Boxed callback stored in the tree's side table.
pub type BoxedMeasure = Box<dyn Measure>;
