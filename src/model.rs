use std::hash::Hash;

/// Read-only view of the host tree that rows are decorated for.
///
/// The decorator never mutates the tree. A proper tree is expected:
/// - no cycles (the ancestor walk follows `parent` until it reaches `None`);
/// - identifiers are stable for the lifetime of a node (they key the decoration cache).
pub trait DecorTree {
    /// Node identifier type.
    type Id: Copy + Eq + Hash;

    /// Returns `true` if the identifier still resolves to a live node.
    fn contains(&self, id: Self::Id) -> bool;
    /// Returns the node's display name.
    fn name(&self, id: Self::Id) -> &str;
    /// Returns the node's parent, or `None` for a top-level node.
    fn parent(&self, id: Self::Id) -> Option<Self::Id>;
    /// Returns the number of direct children.
    fn child_count(&self, id: Self::Id) -> usize;
    /// Returns `true` if the node is active in the tree (itself and all ancestors enabled).
    fn is_active(&self, id: Self::Id) -> bool;
    /// Returns the node's tag label.
    fn tag(&self, id: Self::Id) -> &str;
    /// Returns the node's layer label.
    fn layer(&self, id: Self::Id) -> &str;
    /// Returns the items attached to the node, in display order.
    fn items(&self, id: Self::Id) -> &[AttachedItem];
}

/// Typed item attached to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemInfo {
    /// Type name; keys the icon registry.
    pub type_name: String,
    /// Whether the item itself is enabled. Disabled items are drawn dimmed.
    pub enabled: bool,
}

impl ItemInfo {
    /// Creates an enabled item of the given type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            enabled: true,
        }
    }

    /// Marks the item as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Slot in a node's item list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttachedItem {
    Present(ItemInfo),
    /// The host lost the item (e.g. its type no longer loads). Skipped when drawing.
    Missing,
}

impl AttachedItem {
    pub fn present(type_name: impl Into<String>) -> Self {
        Self::Present(ItemInfo::new(type_name))
    }

    /// Returns the item's type name, or `None` for a missing item.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Present(info) => Some(info.type_name.as_str()),
            Self::Missing => None,
        }
    }
}
