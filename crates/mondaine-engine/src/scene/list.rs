use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    ///
    /// The index buffer behind it is owned by `DrawList` and reused across frames.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn radii_in_paint_order(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.radius,
                other => panic!("unexpected command {other:?}"),
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex::new(2), Vec2::zero(), 1.0, Color::black());
        list.push_circle(ZIndex::new(0), Vec2::zero(), 2.0, Color::black());
        list.push_circle(ZIndex::new(2), Vec2::zero(), 3.0, Color::black());
        list.push_circle(ZIndex::new(1), Vec2::zero(), 4.0, Color::black());

        assert_eq!(radii_in_paint_order(&mut list), vec![2.0, 4.0, 1.0, 3.0]);
        let orders: Vec<u32> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(orders, vec![1, 3, 0, 2]);
    }

    #[test]
    fn push_after_iteration_resorts() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex::new(5), Vec2::zero(), 1.0, Color::black());
        assert_eq!(radii_in_paint_order(&mut list), vec![1.0]);

        list.push_circle(ZIndex::new(-1), Vec2::zero(), 2.0, Color::black());
        assert_eq!(radii_in_paint_order(&mut list), vec![2.0, 1.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::black());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push_circle(ZIndex::new(0), Vec2::zero(), 1.0, Color::black());
        assert_eq!(list.items()[0].key.order, 0);
    }
}
