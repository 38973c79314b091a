// Overlay example: decorate a small scene tree and print the resulting buffer.
use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::widgets::StatefulWidget;

use tui_treedecor::prelude::*;

struct Node {
    name: &'static str,
    parent: Option<usize>,
    children: usize,
    tag: &'static str,
    layer: &'static str,
    items: Vec<AttachedItem>,
}

// Flat scene graph; a real host would wrap its own entity store.
struct Scene {
    nodes: Vec<Node>,
}

impl Scene {
    fn new() -> Self {
        let node = |name, parent, children, tag, layer, items: &[&str]| Node {
            name,
            parent,
            children,
            tag,
            layer,
            items: items.iter().map(|item| AttachedItem::present(*item)).collect(),
        };
        let mut nodes = vec![
            node("--- World ---", None, 2, "Untagged", "Default", &[]),
            node("Main Camera", Some(0), 0, "MainCamera", "Default", &["Transform", "Camera"]),
            node("Player", Some(0), 1, "Player", "Characters", &["Transform", "PlayerBehaviour"]),
            node("Weapon", Some(2), 0, "Untagged", "Default", &["Transform", "WeaponBehaviour"]),
        ];
        nodes[3].items.push(AttachedItem::Missing);
        Self { nodes }
    }
}

impl DecorTree for Scene {
    type Id = usize;

    fn contains(&self, id: usize) -> bool {
        id < self.nodes.len()
    }

    fn name(&self, id: usize) -> &str {
        self.nodes[id].name
    }

    fn parent(&self, id: usize) -> Option<usize> {
        self.nodes[id].parent
    }

    fn child_count(&self, id: usize) -> usize {
        self.nodes[id].children
    }

    fn is_active(&self, _id: usize) -> bool {
        true
    }

    fn tag(&self, id: usize) -> &str {
        self.nodes[id].tag
    }

    fn layer(&self, id: usize) -> &str {
        self.nodes[id].layer
    }

    fn items(&self, id: usize) -> &[AttachedItem] {
        &self.nodes[id].items
    }
}

// Icons are single glyphs so they fit the terminal grid.
impl IconSource for Scene {
    type Icon = &'static str;

    fn icon_for(&self, item: &ItemInfo) -> Option<&'static str> {
        match item.type_name.as_str() {
            "Transform" => Some("✥"),
            "Camera" => Some("◉"),
            name if name.ends_with("Behaviour") => Some("§"),
            _ => None,
        }
    }

    fn is_script_icon(&self, icon: &&'static str) -> bool {
        *icon == "§"
    }

    fn load_asset(&self, asset: OverlayAsset) -> Option<&'static str> {
        Some(match asset {
            OverlayAsset::Tag => "#",
            OverlayAsset::Layer => "≡",
        })
    }
}

fn main() {
    let scene = Scene::new();

    // Header rule tints the "--- World ---" separator row.
    let mut config = DecorConfig::default();
    config
        .highlight_rules
        .push(HighlightRule::new("---", Rgba::new(0.8, 0.2, 0.2, 1.0)));

    // Decorator state must live across frames: it owns the caches.
    let mut decorator: RowDecorator<usize, &'static str> = RowDecorator::new(config, &scene);

    let rows = [
        OverlayRow { id: 0, indent: 2 },
        OverlayRow { id: 1, indent: 4 },
        OverlayRow { id: 2, indent: 4 },
        OverlayRow { id: 3, indent: 6 },
    ];

    let area = Rect::new(0, 0, 72, 4);
    let mut buffer = Buffer::empty(area);
    DecorationOverlay::new(&scene, &rows).render(area, &mut buffer, &mut decorator);

    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        println!("{line}");
    }
}
