//! Viewport bookkeeping: page sizes, scroll limits, scrollbar scaling and
//! the render frame handed to the host.

pub mod frame;
pub mod metrics;
pub mod scrollbar;
pub mod viewport;

pub use frame::{frame, Frame, VisibleLine};
pub use metrics::{CellMetrics, CharMetrics, FixedMetrics, ViewportGeometry};
pub use scrollbar::{apply_scrollbar, scrollbar, Axis, ScrollbarScale, SCROLLBAR_RANGE};
pub use viewport::{
    calculate_max_scroll, position_at_pixel, scroll_by, scroll_to_cursor, PAGE_WIDTH_MARGIN,
    REFERENCE_CHAR,
};
