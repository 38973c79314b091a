use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tui_treedecor::{
    AttachedItem, DecorConfig, DecorTree, Diagnostic, HighlightRule, IconSource, ItemInfo,
    OverlayAsset, RecordingCanvas, Rgba, RowDecorator, RowRect,
};

// Balanced tree with a handful of items per node.
struct BenchTree {
    parents: Vec<Option<usize>>,
    child_counts: Vec<usize>,
    names: Vec<String>,
    items: Vec<AttachedItem>,
}

impl BenchTree {
    fn new(branching: usize, depth: u32) -> Self {
        let mut parents = vec![None];
        let mut child_counts = vec![0];
        let mut names = vec!["root".to_string()];
        let mut level = vec![0];
        for _ in 0..depth {
            let mut next = Vec::new();
            for &parent in &level {
                for _ in 0..branching {
                    let id = parents.len();
                    parents.push(Some(parent));
                    child_counts.push(0);
                    child_counts[parent] += 1;
                    names.push(format!("node-{id}"));
                    next.push(id);
                }
            }
            level = next;
        }
        let items = ["Transform", "MeshRenderer", "EnemyBehaviour", "AiBehaviour"]
            .into_iter()
            .map(AttachedItem::present)
            .collect();
        Self {
            parents,
            child_counts,
            names,
            items,
        }
    }
}

impl DecorTree for BenchTree {
    type Id = usize;

    fn contains(&self, id: usize) -> bool {
        id < self.parents.len()
    }

    fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    fn parent(&self, id: usize) -> Option<usize> {
        self.parents[id]
    }

    fn child_count(&self, id: usize) -> usize {
        self.child_counts[id]
    }

    fn is_active(&self, _id: usize) -> bool {
        true
    }

    fn tag(&self, id: usize) -> &str {
        if id % 3 == 0 { "Enemy" } else { "Untagged" }
    }

    fn layer(&self, _id: usize) -> &str {
        "Default"
    }

    fn items(&self, _id: usize) -> &[AttachedItem] {
        &self.items
    }
}

impl IconSource for BenchTree {
    type Icon = u32;

    fn icon_for(&self, item: &ItemInfo) -> Option<u32> {
        Some(if item.type_name.ends_with("Behaviour") {
            0
        } else {
            u32::try_from(item.type_name.len()).unwrap_or(u32::MAX)
        })
    }

    fn is_script_icon(&self, icon: &u32) -> bool {
        *icon == 0
    }

    fn load_asset(&self, asset: OverlayAsset) -> Option<u32> {
        Some(match asset {
            OverlayAsset::Tag => 100,
            OverlayAsset::Layer => 101,
        })
    }
}

fn bench_draw_visible_rows(c: &mut Criterion) {
    let tree = BenchTree::new(4, 5);
    let mut config = DecorConfig::default();
    config.highlight_rules = vec![
        HighlightRule::new("node-1", Rgba::RED),
        HighlightRule::new("node-2", Rgba::BLUE),
    ];
    let mut decorator: RowDecorator<usize, u32, Vec<Diagnostic>> =
        RowDecorator::with_sink(config, &tree, Vec::new());
    let mut canvas = RecordingCanvas::new();
    let visible: Vec<usize> = (0..tree.parents.len()).step_by(17).take(60).collect();

    c.bench_function("draw_visible_rows", |b| {
        b.iter(|| {
            canvas.clear();
            for (line, &id) in visible.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let y = line as f32 * 16.0;
                let rect = RowRect::new(64.0, y, 480.0, 16.0);
                black_box(decorator.draw(&tree, &mut canvas, id, rect));
            }
        });
    });
}

criterion_group!(benches, bench_draw_visible_rows);
criterion_main!(benches);
