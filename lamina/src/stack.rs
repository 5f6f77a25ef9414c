//! The stack layout engine.
//!
//! Lays a run of children out along one axis: measure every child at its
//! flex basis, resolve grow/shrink against the range bounds, re-measure
//! only the children whose size actually changed, then position
//! everything according to justification and alignment.
//!
//! Growth fills toward the range minimum; shrink resolves against the
//! range maximum. A definite container size is a tight range, which makes
//! both behave like flexbox against a fixed container.

use std::sync::Arc;

use tracing::trace;

use crate::layout::{ChildLayout, Layout};
use crate::node::{LayoutNode, NodeId};
use crate::size_range::SizeRange;
use crate::style::{AlignItems, JustifyContent, StackStyle};

/// Scratch state for one child while the pass runs.
struct StackItem<'a> {
    node: &'a mut LayoutNode,
    /// Main-axis size after the basis pass, then after flexing.
    main: f32,
    /// Cross-axis size from the most recent measurement.
    cross: f32,
    /// Layout from the most recent measurement, reused when flexing did
    /// not change the child.
    measured: Arc<Layout>,
}

/// One child's share state during flex resolution.
#[derive(Debug, Clone, Copy)]
struct FlexSlot {
    main: f32,
    eligible: bool,
    pinned: bool,
}

#[derive(Clone, Copy)]
enum FlexPhase {
    Grow,
    Shrink,
}

/// Lay out `children` inside `range` according to `style`.
///
/// Total: always returns a layout whose size satisfies `range`, whatever
/// the children do.
pub(crate) fn compute(
    id: NodeId,
    style: StackStyle,
    children: &mut [LayoutNode],
    range: SizeRange,
) -> Layout {
    trace!(node = id.raw(), children = children.len(), ?range, "stack layout pass");

    let dir = style.direction;
    let content = range.deflate(&style.padding);
    let main_min = dir.main(content.min());
    let main_max = dir.main(content.max());
    let cross_min = dir.cross(content.min());
    let cross_max = dir.cross(content.max());

    // =====================================================================
    // Basis pass: measure every child at its flex basis
    // =====================================================================
    let mut items: Vec<StackItem<'_>> = Vec::with_capacity(children.len());
    for child in children.iter_mut() {
        let child_range = match child.attributes().flex_basis.resolve(main_max) {
            Some(basis) => dir.range(basis, basis, 0.0, cross_max),
            None => dir.range(0.0, f32::INFINITY, 0.0, cross_max),
        };
        let measured = child.calculate_layout_that_fits(child_range);
        let size = measured.size();
        items.push(StackItem {
            main: dir.main(size),
            cross: dir.cross(size),
            measured,
            node: child,
        });
    }

    let spacing_total = {
        let child_spacing: f32 = items
            .iter()
            .map(|item| {
                let attrs = item.node.attributes();
                attrs.spacing_before + attrs.spacing_after
            })
            .sum();
        let between = if items.len() > 1 {
            style.spacing * (items.len() - 1) as f32
        } else {
            0.0
        };
        child_spacing + between
    };

    // =====================================================================
    // Flex resolution: grow toward the minimum, shrink toward the maximum
    // =====================================================================
    let total = items.iter().map(|item| item.main).sum::<f32>() + spacing_total;
    if total < main_min {
        flex_pass(&mut items, main_min - total, FlexPhase::Grow);
    } else if total > main_max {
        flex_pass(&mut items, main_max - total, FlexPhase::Shrink);
    }

    let stack_main = (items.iter().map(|item| item.main).sum::<f32>() + spacing_total)
        .clamp(main_min, main_max);
    let stack_cross = items
        .iter()
        .fold(0.0f32, |acc, item| acc.max(item.cross))
        .clamp(cross_min, cross_max);

    // =====================================================================
    // Final pass: re-measure only the children whose size changed
    // =====================================================================
    for item in items.iter_mut() {
        let align = item.node.attributes().align_self.resolve(style.align_items);
        let stretch = align == AlignItems::Stretch;
        let wanted_cross = if stretch { stack_cross } else { item.cross };
        let measured_size = item.measured.size();
        if item.main != dir.main(measured_size) || wanted_cross != dir.cross(measured_size) {
            let child_range = if stretch {
                dir.range(item.main, item.main, stack_cross, stack_cross)
            } else {
                dir.range(item.main, item.main, 0.0, cross_max)
            };
            item.measured = item.node.calculate_layout_that_fits(child_range);
            let size = item.measured.size();
            item.main = dir.main(size);
            item.cross = dir.cross(size);
        }
    }

    // =====================================================================
    // Positioning: justify leftover space, then walk the cursor
    // =====================================================================
    let children_total = items.iter().map(|item| item.main).sum::<f32>() + spacing_total;
    let leftover = (stack_main - children_total).max(0.0);
    let count = items.len();
    let (lead, justify_gap) = match style.justify_content {
        JustifyContent::Start => (0.0, 0.0),
        JustifyContent::Center => (leftover / 2.0, 0.0),
        JustifyContent::End => (leftover, 0.0),
        JustifyContent::SpaceBetween => {
            if count > 1 {
                (0.0, leftover / (count - 1) as f32)
            } else {
                (0.0, 0.0)
            }
        }
        JustifyContent::SpaceAround => {
            if count > 0 {
                let space = leftover / count as f32;
                (space / 2.0, space)
            } else {
                (0.0, 0.0)
            }
        }
    };

    let cross_leading = dir.cross_leading(&style.padding);
    let mut cursor = dir.main_leading(&style.padding) + lead;
    let mut positioned = Vec::with_capacity(count);
    for (index, item) in items.iter().enumerate() {
        let attrs = item.node.attributes();
        cursor += attrs.spacing_before;

        let align = attrs.align_self.resolve(style.align_items);
        let cross_offset = match align {
            AlignItems::Start | AlignItems::Stretch => 0.0,
            AlignItems::End => stack_cross - item.cross,
            AlignItems::Center => (stack_cross - item.cross) / 2.0,
        };

        positioned.push(ChildLayout {
            position: dir.point(cursor, cross_leading + cross_offset),
            layout: Arc::clone(&item.measured),
        });

        cursor += item.main + attrs.spacing_after;
        if index + 1 < count {
            cursor += style.spacing + justify_gap;
        }
    }

    let size = range.constrain(dir.size(
        stack_main + dir.main_padding(&style.padding),
        stack_cross + dir.cross_padding(&style.padding),
    ));
    Layout::with_children(id, size, positioned)
}

/// Resolve a grow or shrink violation over the items.
fn flex_pass(items: &mut [StackItem<'_>], delta: f32, phase: FlexPhase) {
    let mut slots: Vec<FlexSlot> = items
        .iter()
        .map(|item| {
            let attrs = item.node.attributes();
            FlexSlot {
                main: item.main,
                eligible: match phase {
                    FlexPhase::Grow => attrs.flex_grow,
                    FlexPhase::Shrink => attrs.flex_shrink,
                },
                pinned: false,
            }
        })
        .collect();

    distribute(&mut slots, delta);

    for (item, slot) in items.iter_mut().zip(&slots) {
        item.main = slot.main;
    }
}

/// Split `delta` equally among eligible slots.
///
/// A shrinking slot driven below zero pins at zero and returns the part
/// it could not absorb to the pool; the split repeats until a round ends
/// with no new pins or nobody is left to take space. Growth never pins,
/// so it settles in one round.
fn distribute(slots: &mut [FlexSlot], delta: f32) {
    let mut remaining = delta;
    loop {
        let takers = slots.iter().filter(|slot| slot.eligible && !slot.pinned).count();
        if takers == 0 || remaining == 0.0 {
            return;
        }

        let share = remaining / takers as f32;
        remaining = 0.0;
        let mut pinned_this_round = false;
        for slot in slots.iter_mut().filter(|slot| slot.eligible && !slot.pinned) {
            let proposed = slot.main + share;
            if proposed < 0.0 {
                remaining += proposed;
                slot.main = 0.0;
                slot.pinned = true;
                pinned_this_round = true;
            } else {
                slot.main = proposed;
            }
        }

        if !pinned_this_round {
            return;
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
