//! In-memory host used by unit tests.

use std::cell::Cell;

use crate::icons::{IconSource, OverlayAsset};
use crate::model::{AttachedItem, DecorTree, ItemInfo};

pub const SCRIPT_ICON: &str = "cs-script";

pub struct TestNode {
    pub name: String,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub active: bool,
    pub tag: String,
    pub layer: String,
    pub items: Vec<AttachedItem>,
}

/// Slab-backed tree; removed nodes leave a `None` hole so ids stay stable.
pub struct TestTree {
    nodes: Vec<Option<TestNode>>,
    pub assets_ready: Cell<bool>,
    pub icon_lookups: Cell<usize>,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            assets_ready: Cell::new(true),
            icon_lookups: Cell::new(0),
        }
    }

    pub fn add(&mut self, parent: Option<usize>, name: &str) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Some(TestNode {
            name: name.to_owned(),
            parent,
            children: Vec::new(),
            active: true,
            tag: "Untagged".to_owned(),
            layer: "Default".to_owned(),
            items: Vec::new(),
        }));
        if let Some(parent) = parent {
            self.node_mut(parent).children.push(id);
        }
        id
    }

    pub fn node(&self, id: usize) -> &TestNode {
        self.nodes[id].as_ref().expect("live node")
    }

    pub fn node_mut(&mut self, id: usize) -> &mut TestNode {
        self.nodes[id].as_mut().expect("live node")
    }

    /// Removes a node and its subtree.
    pub fn remove(&mut self, id: usize) {
        let Some(node) = self.nodes[id].take() else {
            return;
        };
        if let Some(parent) = node.parent {
            if let Some(Some(parent)) = self.nodes.get_mut(parent) {
                parent.children.retain(|child| *child != id);
            }
        }
        for child in node.children {
            self.remove(child);
        }
    }
}

impl DecorTree for TestTree {
    type Id = usize;

    fn contains(&self, id: usize) -> bool {
        matches!(self.nodes.get(id), Some(Some(_)))
    }

    fn name(&self, id: usize) -> &str {
        &self.node(id).name
    }

    fn parent(&self, id: usize) -> Option<usize> {
        self.node(id).parent
    }

    fn child_count(&self, id: usize) -> usize {
        self.node(id).children.len()
    }

    fn is_active(&self, id: usize) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if !self.node(node).active {
                return false;
            }
            current = self.node(node).parent;
        }
        true
    }

    fn tag(&self, id: usize) -> &str {
        &self.node(id).tag
    }

    fn layer(&self, id: usize) -> &str {
        &self.node(id).layer
    }

    fn items(&self, id: usize) -> &[AttachedItem] {
        &self.node(id).items
    }
}

/// Types ending in `Behaviour` share the script icon; `Marker` has none.
impl IconSource for TestTree {
    type Icon = String;

    fn icon_for(&self, item: &ItemInfo) -> Option<String> {
        self.icon_lookups.set(self.icon_lookups.get() + 1);
        if item.type_name == "Marker" {
            None
        } else if item.type_name.ends_with("Behaviour") {
            Some(SCRIPT_ICON.to_owned())
        } else {
            Some(item.type_name.to_lowercase())
        }
    }

    fn is_script_icon(&self, icon: &String) -> bool {
        icon == SCRIPT_ICON
    }

    fn load_asset(&self, asset: OverlayAsset) -> Option<String> {
        self.assets_ready.get().then(|| asset.label().to_owned())
    }
}
