use serde::{Deserialize, Serialize};

use crate::types::Rect;

/// A free region of the container. Consumed regions keep their slot with
/// `active` cleared, so indices held across a split stay valid.
#[derive(Debug, Clone, Copy)]
pub struct Space {
    pub x: u32,
    pub y: u32,
    pub rect: Rect,
    pub active: bool,
}

impl Space {
    pub fn new(x: u32, y: u32, rect: Rect) -> Self {
        Self {
            x,
            y,
            rect,
            active: true,
        }
    }
}

/// Heuristic for choosing among the eligible free spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacePolicy {
    /// Lowest-index eligible space; the only policy that short-circuits.
    #[default]
    FirstFit,
    /// Least vertical slack: minimize `space.height - item.height`.
    MinGap,
    /// Closest to the origin: minimize `space.x + space.y`, roughly
    /// bottom-left-first placement.
    MinDistance,
}

/// Ordered pool of free spaces. Spaces are only ever appended or marked
/// consumed; they are never removed or merged back together.
#[derive(Debug, Default)]
pub struct SpacePool {
    spaces: Vec<Space>,
}

impl SpacePool {
    pub fn new() -> Self {
        Self { spaces: Vec::new() }
    }

    /// Resets the pool to a single active space at the origin spanning
    /// the whole container.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.spaces.clear();
        self.spaces.push(Space::new(0, 0, Rect::new(width, height)));
    }

    pub fn push(&mut self, space: Space) {
        self.spaces.push(space);
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.spaces.iter().filter(|s| s.active).count()
    }

    /// Index of the space the policy picks for `item`, or `None` when no
    /// active space can hold it. A space is a candidate only if it is
    /// active and at least as wide and as tall as the item; everything
    /// else is excluded outright, not ranked. Ties keep the
    /// first-encountered (lowest) index.
    pub fn find_space(&self, item: Rect, policy: SpacePolicy) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;

        for (idx, space) in self.spaces.iter().enumerate() {
            if !space.active || !item.fits_in(&space.rect) {
                continue;
            }

            match policy {
                SpacePolicy::FirstFit => return Some(idx),
                SpacePolicy::MinGap => {
                    let gap = (space.rect.height - item.height) as u64;
                    if best.is_none() || gap < best.unwrap().1 {
                        best = Some((idx, gap));
                    }
                }
                SpacePolicy::MinDistance => {
                    let distance = space.x as u64 + space.y as u64;
                    if best.is_none() || distance < best.unwrap().1 {
                        best = Some((idx, distance));
                    }
                }
            }
        }

        best.map(|(idx, _)| idx)
    }

    /// Guillotine cut: consumes the space at `index` and appends the two
    /// remainders left after placing `item` in its top-left corner — one
    /// to the right of the item, one below the item spanning the full
    /// width. Zero-sized remainders are appended too; they are simply
    /// never eligible. The item must fit the space, which `find_space`
    /// guarantees for the indices it returns.
    pub fn split(&mut self, index: usize, item: Rect) {
        let space = self.spaces[index];
        debug_assert!(item.fits_in(&space.rect));

        // Right remainder
        self.spaces.push(Space::new(
            space.x + item.width,
            space.y,
            Rect::new(space.rect.width - item.width, item.height),
        ));
        // Bottom remainder
        self.spaces.push(Space::new(
            space.x,
            space.y + item.height,
            Rect::new(space.rect.width, space.rect.height - item.height),
        ));
        self.spaces[index].active = false;
    }
}
