use crate::foundation::core::{Insets, Point, Rect, Size};

/// Bounds the host should apply to each layer after a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerPlacements {
    /// Back layer bounds.
    pub back: Rect,
    /// Front layer bounds.
    pub front: Rect,
}

/// Content box of a container of `bounds` size after removing `padding`.
pub fn inner_rect(bounds: Size, padding: Insets) -> Rect {
    let x0 = padding.x0.min(bounds.width);
    let y0 = padding.y0.min(bounds.height);
    let x1 = (bounds.width - padding.x1).max(x0);
    let y1 = (bounds.height - padding.y1).max(y0);
    Rect::new(x0, y0, x1, y1)
}

/// Back layer: pinned to the content origin at its measured size.
pub fn place_back(inner: Rect, measured: Size) -> Rect {
    Rect::from_origin_size(Point::new(inner.x0, inner.y0), measured)
}

/// Front layer: full content width, bottom-aligned, never taller than the content box.
pub fn place_front(inner: Rect, front_height: f64) -> Rect {
    let h = front_height.clamp(0.0, inner.height());
    Rect::new(inner.x0, inner.y1 - h, inner.x1, inner.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placement.rs"]
mod tests;
