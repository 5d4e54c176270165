use tracing::{debug, trace};

use crate::error::PackError;
use crate::pool::{SpacePolicy, SpacePool};
use crate::types::{PackMode, PackedItem, Rect};

#[derive(Debug, Clone, Copy)]
struct Item {
    rect: Rect,
    depth: Option<u32>,
}

/// Offline guillotine packer. Configure a container, queue items, then
/// run [`pack`](PackEngine::pack) and read the results back.
///
/// A run consumes the free-space pool, so re-packing starts from a fresh
/// `set_container` call.
#[derive(Debug)]
pub struct PackEngine {
    container: Option<Rect>,
    container_depth: Option<u32>,
    mode: PackMode,
    policy: SpacePolicy,
    rotate_fallback: bool,
    items: Vec<Item>,
    pool: SpacePool,
    packed: Vec<PackedItem>,
}

impl PackEngine {
    pub fn new() -> Self {
        Self {
            container: None,
            container_depth: None,
            mode: PackMode::Plane,
            policy: SpacePolicy::FirstFit,
            rotate_fallback: false,
            items: Vec::new(),
            pool: SpacePool::new(),
            packed: Vec::new(),
        }
    }

    /// Configures a 2D container and clears items and prior results.
    pub fn set_container(&mut self, width: u32, height: u32) {
        self.container = Some(Rect::new(width, height));
        self.container_depth = None;
        self.mode = PackMode::Plane;
        self.pool.reset(width, height);
        self.items.clear();
        self.packed.clear();
    }

    /// Configures a 3D container. The mode is recognized but has no split
    /// algorithm, so `pack()` refuses the run.
    pub fn set_container_volume(&mut self, width: u32, height: u32, depth: u32) {
        self.container = Some(Rect::new(width, height));
        self.container_depth = Some(depth);
        self.mode = PackMode::Volume;
        self.pool.reset(width, height);
        self.items.clear();
        self.packed.clear();
    }

    /// Configures a 1D container. Same standing as volume mode: accepted
    /// here, refused by `pack()`.
    pub fn set_container_line(&mut self, length: u32) {
        self.container = Some(Rect::new(length, 0));
        self.container_depth = None;
        self.mode = PackMode::Line;
        self.pool.reset(length, 0);
        self.items.clear();
        self.packed.clear();
    }

    pub fn add_item(&mut self, width: u32, height: u32) {
        self.items.push(Item {
            rect: Rect::new(width, height),
            depth: None,
        });
    }

    /// Queues an item with a depth. Depth never affects 2D placement; it
    /// is carried through to the packed result unchanged.
    pub fn add_item_with_depth(&mut self, width: u32, height: u32, depth: u32) {
        self.items.push(Item {
            rect: Rect::new(width, height),
            depth: Some(depth),
        });
    }

    pub fn set_policy(&mut self, policy: SpacePolicy) {
        self.policy = policy;
    }

    /// Allows one width/height swap per item when its original
    /// orientation finds no space.
    pub fn enable_rotation(&mut self) {
        self.rotate_fallback = true;
    }

    /// Runs one packing pass over all queued items: sorts them by
    /// descending footprint (stable), then greedily places each into the
    /// space the policy selects, splitting the chosen space after every
    /// placement.
    ///
    /// The run succeeds or fails as a whole. On any error the result list
    /// is cleared, so a failed run is never partially queryable.
    pub fn pack(&mut self) -> Result<(), PackError> {
        if self.pool.is_empty() {
            return Err(PackError::NotConfigured);
        }
        if self.mode != PackMode::Plane {
            return Err(PackError::UnsupportedMode(self.mode));
        }

        self.packed.clear();
        self.items
            .sort_by(|a, b| b.rect.footprint().cmp(&a.rect.footprint()));

        debug!(
            "packing {} items with {:?} policy",
            self.items.len(),
            self.policy
        );

        for item in &self.items {
            let mut rect = item.rect;
            let mut rotated = false;

            let mut found = self.pool.find_space(rect, self.policy);
            if found.is_none() && self.rotate_fallback {
                rect = rect.rotated();
                rotated = true;
                found = self.pool.find_space(rect, self.policy);
            }
            let index = match found {
                Some(index) => index,
                None => {
                    self.packed.clear();
                    return Err(PackError::NoSpaceForItem(item.rect));
                }
            };

            let space = self.pool.spaces()[index];
            trace!(
                "placed {} at ({}, {}) rotated={}",
                rect, space.x, space.y, rotated
            );
            self.packed.push(PackedItem {
                rect,
                x: space.x,
                y: space.y,
                rotated,
                depth: item.depth,
            });
            self.pool.split(index, rect);
        }

        debug!(
            "packed {} items, pool holds {} spaces",
            self.packed.len(),
            self.pool.len()
        );
        Ok(())
    }

    pub fn packed_count(&self) -> usize {
        self.packed.len()
    }

    pub fn packed_items(&self) -> &[PackedItem] {
        &self.packed
    }

    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    pub fn container_depth(&self) -> Option<u32> {
        self.container_depth
    }

    /// Percentage of the container's footprint not covered by packed
    /// items. Zero when no container is configured.
    pub fn waste_percent(&self) -> f64 {
        let total = match self.container {
            Some(container) => container.footprint(),
            None => return 0.0,
        };
        if total == 0 {
            return 0.0;
        }
        let used: u64 = self.packed.iter().map(|p| p.rect.footprint()).sum();
        100.0 * (total - used) as f64 / total as f64
    }
}

impl Default for PackEngine {
    fn default() -> Self {
        Self::new()
    }
}
