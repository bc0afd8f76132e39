//! Hover interaction state machine.
//!
//! Each cell is either idle or hovered; pointer-enter shows and fills
//! the tooltip and applies a highlight stroke, pointer-move only
//! repositions, pointer-leave hides the tooltip and drops the
//! highlight. Everything runs synchronously on whatever event loop is
//! driving it, so there is exactly one owner of the tooltip state and
//! no locking.

use crate::cell::Cell;
use crate::scale::month_name;

/// Stroke applied to the hovered cell.
pub const HIGHLIGHT_STROKE: &str = "black";
pub const HIGHLIGHT_STROKE_WIDTH: f64 = 2.0;

/// The tooltip box: visibility, formatted content, pixel position.
/// Content goes stale on leave; only visibility is reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    pub position: (f64, f64),
}

/// Multi-line tooltip text for a cell: year, month name, temperature
/// and variance both to two decimal places.
pub fn tooltip_text(cell: &Cell) -> String {
    format!(
        "Year: {}\nMonth: {}\nTemperature: {:.2}°C\nVariance: {:.2}°C",
        cell.year,
        month_name(cell.month),
        cell.temperature,
        cell.variance
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverState {
    Idle,
    Hovered(usize),
}

/// Drives tooltip and highlight state for one chart's cells.
#[derive(Debug)]
pub struct HoverController<'a> {
    cells: &'a [Cell],
    offset: (f64, f64),
    state: HoverState,
    tooltip: TooltipState,
}

impl<'a> HoverController<'a> {
    pub fn new(cells: &'a [Cell], tooltip_offset: (f64, f64)) -> HoverController<'a> {
        HoverController {
            cells,
            offset: tooltip_offset,
            state: HoverState::Idle,
            tooltip: TooltipState::default(),
        }
    }

    /// Pointer entered the cell at `index`. Out-of-range indices are
    /// ignored rather than panicking.
    pub fn pointer_enter(&mut self, index: usize, pointer: (f64, f64)) {
        let Some(cell) = self.cells.get(index) else {
            return;
        };
        self.state = HoverState::Hovered(index);
        self.tooltip.visible = true;
        self.tooltip.content = tooltip_text(cell);
        self.tooltip.position = self.offset_position(pointer);
    }

    /// Pointer moved within the hovered cell: reposition only.
    pub fn pointer_move(&mut self, pointer: (f64, f64)) {
        if matches!(self.state, HoverState::Hovered(_)) {
            self.tooltip.position = self.offset_position(pointer);
        }
    }

    /// Pointer left the hovered cell: hide tooltip, drop highlight.
    pub fn pointer_leave(&mut self) {
        self.state = HoverState::Idle;
        self.tooltip.visible = false;
    }

    /// Index of the currently highlighted cell, if any.
    pub fn highlighted(&self) -> Option<usize> {
        match self.state {
            HoverState::Hovered(index) => Some(index),
            HoverState::Idle => None,
        }
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    /// Stroke to draw on the cell at `index`: the highlight pair for
    /// the hovered cell, nothing for everyone else.
    pub fn stroke_for(&self, index: usize) -> Option<(&'static str, f64)> {
        if self.highlighted() == Some(index) {
            Some((HIGHLIGHT_STROKE, HIGHLIGHT_STROKE_WIDTH))
        } else {
            None
        }
    }

    fn offset_position(&self, pointer: (f64, f64)) -> (f64, f64) {
        (pointer.0 + self.offset.0, pointer.1 + self.offset.1)
    }
}
