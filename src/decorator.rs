use std::hash::Hash;

use crate::cache::DecorationCache;
use crate::canvas::Canvas;
use crate::config::DecorConfig;
use crate::connector::draw_connectors;
use crate::context::RowRect;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::highlight::{header_band, match_rule};
use crate::icons::{IconRegistry, IconSource, OverlayAsset, OverlayAssets};
use crate::layout::{
    ActiveValueSet, ICON_ADVANCE, ICON_SIZE, LABEL_ICON_GAP, LABEL_PADDING, fits,
    icon_strip_space, label_space,
};
use crate::model::{AttachedItem, DecorTree};
use crate::style::Pen;

/// What a single [`RowDecorator::draw`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowOutcome {
    /// A header band was painted.
    pub highlighted: bool,
    /// Ancestor connector segments drawn (leaf marker excluded).
    pub connector_segments: usize,
    pub icons_drawn: usize,
    /// Right-edge offset after the icon strip.
    pub strip_offset: f32,
    pub tag_drawn: bool,
    pub layer_drawn: bool,
    /// Right-edge offset after every packed element.
    pub offset: f32,
}

/// Decorates tree rows with overlays and keeps the caches that survive between repaints.
///
/// Call [`RowDecorator::draw`] once per visible row and
/// [`RowDecorator::notify_structure_changed`] whenever the tree's shape changes.
pub struct RowDecorator<Id, I, D = TracingSink> {
    config: DecorConfig,
    cache: DecorationCache<Id>,
    icons: IconRegistry<I>,
    assets: OverlayAssets<I>,
    tags: ActiveValueSet,
    layers: ActiveValueSet,
    // Widest icon strip since the last structure change; only used with `align_icon_strips`.
    widest_strip: f32,
    sink: D,
}

impl<Id, I> RowDecorator<Id, I, TracingSink>
where
    Id: Copy + Eq + Hash,
    I: Clone,
{
    /// Creates a decorator that reports diagnostics through `tracing`.
    pub fn new<S>(config: DecorConfig, source: &S) -> Self
    where
        S: IconSource<Icon = I> + ?Sized,
    {
        Self::with_sink(config, source, TracingSink)
    }
}

impl<Id, I, D> RowDecorator<Id, I, D>
where
    Id: Copy + Eq + Hash,
    I: Clone,
    D: DiagnosticSink,
{
    /// Creates a decorator with a custom diagnostic sink. Overlay assets are loaded immediately.
    pub fn with_sink<S>(config: DecorConfig, source: &S, sink: D) -> Self
    where
        S: IconSource<Icon = I> + ?Sized,
    {
        Self {
            config,
            cache: DecorationCache::new(),
            icons: IconRegistry::new(),
            assets: OverlayAssets::load(source),
            tags: ActiveValueSet::new(),
            layers: ActiveValueSet::new(),
            widest_strip: 0.0,
            sink,
        }
    }

    pub const fn config(&self) -> &DecorConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect on the next draw.
    pub fn set_config(&mut self, config: DecorConfig) {
        self.config = config;
    }

    pub const fn cache(&self) -> &DecorationCache<Id> {
        &self.cache
    }

    pub const fn icon_registry(&self) -> &IconRegistry<I> {
        &self.icons
    }

    pub const fn tag_values(&self) -> &ActiveValueSet {
        &self.tags
    }

    pub const fn layer_values(&self) -> &ActiveValueSet {
        &self.layers
    }

    pub const fn sink(&self) -> &D {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    /// Draws every enabled overlay for one row.
    ///
    /// `row` is the label area of the row. Identifiers that no longer resolve are ignored.
    pub fn draw<H, C>(&mut self, host: &H, canvas: &mut C, id: Id, row: RowRect) -> RowOutcome
    where
        H: DecorTree<Id = Id> + IconSource<Icon = I> + ?Sized,
        C: Canvas<I> + ?Sized,
    {
        let mut outcome = RowOutcome::default();
        if !host.contains(id) {
            return outcome;
        }
        let name = host.name(id);
        let mut pen = Pen::baseline();

        if self.config.headers_enabled {
            if let Some(color) = match_rule(name, &self.config.highlight_rules) {
                let (band, color) = header_band(row, color);
                canvas.fill_rect(band, color);
                outcome.highlighted = true;
            }
        }

        if self.config.connectors_enabled {
            outcome.connector_segments =
                draw_connectors(host, canvas, id, row, self.config.connector_colors());
        }

        let name_width = canvas.text_width(name);
        let mut offset = 0.0;
        if self.config.icon_strip_enabled {
            let (strip_offset, drawn) =
                self.draw_icon_strip(host, canvas, id, row, name_width, &mut pen);
            offset = strip_offset;
            outcome.icons_drawn = drawn;
        }
        outcome.strip_offset = offset;
        pen.reset();

        if self.config.tags_enabled {
            match self.draw_overlay_label(
                host,
                canvas,
                OverlayAsset::Tag,
                host.tag(id),
                row,
                name_width,
                offset,
                &pen,
            ) {
                Some(next) => {
                    offset = next;
                    outcome.tag_drawn = true;
                }
                // A tag that does not fit also keeps the layer off this row.
                None => {
                    outcome.offset = offset;
                    return outcome;
                }
            }
        }

        if self.config.layers_enabled {
            if let Some(next) = self.draw_overlay_label(
                host,
                canvas,
                OverlayAsset::Layer,
                host.layer(id),
                row,
                name_width,
                offset,
                &pen,
            ) {
                offset = next;
                outcome.layer_drawn = true;
            }
        }

        outcome.offset = offset;
        outcome
    }

    /// Drops per-session state after the host tree changed shape.
    ///
    /// Clears the seen tag/layer values and purges cache entries for nodes that no longer resolve.
    pub fn notify_structure_changed<T>(&mut self, tree: &T)
    where
        T: DecorTree<Id = Id> + ?Sized,
    {
        self.tags.clear();
        self.layers.clear();
        self.widest_strip = 0.0;
        let purged = self.cache.purge_unresolved(tree);
        tracing::debug!(purged, cached = self.cache.len(), "tree structure changed");
    }

    fn draw_icon_strip<H, C>(
        &mut self,
        host: &H,
        canvas: &mut C,
        id: Id,
        row: RowRect,
        name_width: f32,
        pen: &mut Pen,
    ) -> (f32, usize)
    where
        H: DecorTree<Id = Id> + IconSource<Icon = I> + ?Sized,
        C: Canvas<I> + ?Sized,
    {
        let mut offset = 0.0;
        let entry = self.cache.update_or_create(host, id);
        if !fits(name_width, row.width, offset, icon_strip_space(entry.item_count)) {
            return (offset, 0);
        }

        let active = host.is_active(id);
        let mut drawn = 0;
        let mut drew_script = false;
        for (index, (cached, item)) in entry.item_types.iter().zip(host.items(id)).enumerate() {
            let (Some(_), AttachedItem::Present(info)) = (cached, item) else {
                self.sink.warn(format!(
                    "missing item at index {index} on '{}', skipping its icon",
                    host.name(id)
                ));
                continue;
            };

            if !active || !info.enabled {
                pen.dim();
            }

            let Some(icon) = self.icons.resolve(host, info) else {
                pen.reset();
                continue;
            };
            let is_script = host.is_script_icon(&icon);
            if self.config.compact_script_icons && drew_script && is_script {
                pen.reset();
                continue;
            }

            canvas.draw_icon(
                RowRect::new(row.x_max() - offset, row.y, ICON_SIZE, ICON_SIZE),
                &icon,
                pen.tint(),
            );
            drew_script |= is_script;
            pen.reset();
            offset += ICON_ADVANCE;
            drawn += 1;
        }

        if self.config.align_icon_strips {
            self.widest_strip = self.widest_strip.max(offset);
            offset = self.widest_strip;
        }
        (offset, drawn)
    }

    /// Packs a tag or layer label after `offset`. Returns the new offset, or `None` if nothing
    /// was drawn.
    #[allow(clippy::too_many_arguments)]
    fn draw_overlay_label<H, C>(
        &mut self,
        host: &H,
        canvas: &mut C,
        asset: OverlayAsset,
        text: &str,
        row: RowRect,
        name_width: f32,
        offset: f32,
        pen: &Pen,
    ) -> Option<f32>
    where
        H: IconSource<Icon = I> + ?Sized,
        C: Canvas<I> + ?Sized,
    {
        let values = match asset {
            OverlayAsset::Tag => &mut self.tags,
            OverlayAsset::Layer => &mut self.layers,
        };
        values.observe(text);
        let longest = values.longest_width(&*canvas);
        if !fits(name_width, row.width, offset, label_space(longest)) {
            return None;
        }

        let Some(icon) = self.assets.ensure(host, asset) else {
            self.sink.error(format!(
                "{} icon could not be loaded, skipping the label",
                asset.label()
            ));
            return None;
        };

        let right = row.x_max() - offset;
        canvas.draw_icon(
            RowRect::new(right - longest - LABEL_ICON_GAP, row.y, ICON_SIZE, ICON_SIZE),
            icon,
            pen.tint(),
        );
        canvas.draw_label(
            RowRect::new(right - longest + LABEL_ICON_GAP, row.y - 2.0, longest, ICON_SIZE),
            text,
            self.config.text_color,
        );
        Some(offset + longest.trunc() + LABEL_PADDING)
    }
}
