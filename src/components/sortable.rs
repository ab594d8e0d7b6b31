//! Drag to reorder.
//!
//! The rendering layer reports the pointer offset of the dragged item. The
//! helpers here turn that offset into a target index, the displacement of the
//! items the dragged one passes over, and finally the reordered list.

use mosaic_theme::Theme;

use crate::{
    components::shared::{DISABLED_OPACITY, with_transition},
    style::Style,
    theme::{LayerKind, ShadowKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortableAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl SortableAxis {
    fn translate(&self, offset: f32) -> String {
        match self {
            SortableAxis::Vertical => format!("translate3d(0px, {offset}px, 0px)"),
            SortableAxis::Horizontal => format!("translate3d({offset}px, 0px, 0px)"),
        }
    }
}

/// Moves the item at `from` to `to`, shifting the items in between.
/// Returns false and leaves `items` untouched when either index is out of
/// bounds.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }

    if from < to {
        items[from..=to].rotate_left(1);
    } else if to < from {
        items[to..=from].rotate_right(1);
    }

    true
}

/// Index the dragged item would land on, given the main axis extent of
/// every item, the gap between them, and how far the pointer moved.
///
/// The dragged item passes another one once its center crosses that item's
/// center.
pub fn drop_target_index(extents: &[f32], gap: f32, from: usize, offset: f32) -> Option<usize> {
    if from >= extents.len() {
        return None;
    }

    let mut start = 0.;
    let mut centers = Vec::with_capacity(extents.len());
    for extent in extents {
        centers.push(start + extent / 2.);
        start += extent + gap;
    }

    let center = centers[from] + offset;

    Some(
        centers
            .iter()
            .enumerate()
            .filter(|(index, item_center)| *index != from && **item_center < center)
            .count(),
    )
}

/// [`drop_target_index`] for a list of equally sized items.
pub fn uniform_drop_target_index(
    len: usize,
    extent: f32,
    gap: f32,
    from: usize,
    offset: f32,
) -> Option<usize> {
    drop_target_index(&vec![extent; len], gap, from, offset)
}

/// How far the item at `index` shifts to make room while the item at `from`
/// hovers over `target`. `step` is the dragged item's extent plus the gap.
pub fn displacement(index: usize, from: usize, target: usize, step: f32) -> f32 {
    if from < index && index <= target {
        -step
    } else if target <= index && index < from {
        step
    } else {
        0.
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub from: usize,
    pub offset: f32,
}

/// Tracks one drag gesture over a list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortableState {
    axis: SortableAxis,
    extents: Vec<f32>,
    gap: f32,
    drag: Option<DragState>,
}

impl SortableState {
    pub fn new(axis: SortableAxis, extents: Vec<f32>, gap: f32) -> Self {
        Self {
            axis,
            extents,
            gap,
            drag: None,
        }
    }

    pub fn axis(&self) -> SortableAxis {
        self.axis
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn set_extents(&mut self, extents: Vec<f32>) {
        self.extents = extents;
    }

    /// Starts dragging the item at `index`. Ignored for unknown indices.
    pub fn start(&mut self, index: usize) {
        if index < self.extents.len() {
            self.drag = Some(DragState {
                from: index,
                offset: 0.,
            });
        }
    }

    /// Updates the pointer offset along the axis, relative to where the drag
    /// started.
    pub fn update(&mut self, offset: f32) {
        if let Some(drag) = &mut self.drag {
            drag.offset = offset;
        }
    }

    pub fn target(&self) -> Option<usize> {
        let drag = self.drag?;
        drop_target_index(&self.extents, self.gap, drag.from, drag.offset)
    }

    /// Main axis translation for the item at `index` while dragging.
    pub fn offset_of(&self, index: usize) -> f32 {
        let Some(drag) = self.drag else {
            return 0.;
        };

        if index == drag.from {
            return drag.offset;
        }

        let target = self.target().unwrap_or(drag.from);
        let step = self.extents.get(drag.from).copied().unwrap_or(0.) + self.gap;

        displacement(index, drag.from, target, step)
    }

    /// Ends the drag and reorders `items`. Returns `(from, to)` when the
    /// order changed.
    pub fn drop_on<T>(&mut self, items: &mut [T]) -> Option<(usize, usize)> {
        let target = self.target();
        let drag = self.drag.take()?;
        let to = target?;

        if to == drag.from || !move_item(items, drag.from, to) {
            return None;
        }

        tracing::debug!(from = drag.from, to, "reordered item");

        let moved = self.extents.remove(drag.from);
        self.extents.insert(to, moved);

        Some((drag.from, to))
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SortableItemProps {
    pub axis: SortableAxis,
    pub dragging: bool,
    /// Main axis translation from [`SortableState::offset_of`].
    pub offset: f32,
    pub disabled: bool,
}

pub fn build_sortable_item_style(props: &SortableItemProps, theme: &Theme) -> Style {
    let item = Style::new()
        .set("position", "relative")
        .set("transform", props.axis.translate(props.offset))
        .set("touchAction", "none");

    if props.disabled {
        return item.set("opacity", DISABLED_OPACITY).set("cursor", "not-allowed");
    }

    if props.dragging {
        item.set("zIndex", *LayerKind::Sticky.resolve(theme))
            .set("cursor", "grabbing")
            .set("userSelect", "none")
            .shadow(*ShadowKind::Lg.resolve(theme))
    } else {
        with_transition(item, &["transform"], theme).set("cursor", "grab")
    }
}
