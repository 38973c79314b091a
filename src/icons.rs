use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::model::ItemInfo;

/// Fixed icons drawn in front of the tag and layer labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayAsset {
    Tag,
    Layer,
}

impl OverlayAsset {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Layer => "layer",
        }
    }
}

/// Host icon lookup.
pub trait IconSource {
    /// Opaque icon handle.
    type Icon: Clone;

    /// Returns a representative icon for an item, or `None` if its type has no visual.
    /// Consulted only when the registry has no entry for the item's type name.
    fn icon_for(&self, item: &ItemInfo) -> Option<Self::Icon>;

    /// Returns `true` for the generic script icon collapsed by compact mode.
    fn is_script_icon(&self, _icon: &Self::Icon) -> bool {
        false
    }

    /// Loads one of the overlay assets. May fail while assets are still being imported.
    fn load_asset(&self, asset: OverlayAsset) -> Option<Self::Icon>;
}

/// Memoized type name -> icon mapping.
///
/// Entries are never invalidated; a type resolving to "no icon" is cached as such.
pub struct IconRegistry<I> {
    icons: FxHashMap<String, Option<I>>,
}

impl<I: Clone> IconRegistry<I> {
    pub fn new() -> Self {
        Self {
            icons: FxHashMap::with_capacity_and_hasher(16, FxBuildHasher),
        }
    }

    /// Returns the cached icon for `item`'s type, asking `source` on the first request only.
    pub fn resolve<S>(&mut self, source: &S, item: &ItemInfo) -> Option<I>
    where
        S: IconSource<Icon = I> + ?Sized,
    {
        if let Some(cached) = self.icons.get(item.type_name.as_str()) {
            return cached.clone();
        }
        let icon = source.icon_for(item);
        self.icons.insert(item.type_name.clone(), icon.clone());
        icon
    }

    /// Returns the cached entry without consulting the host.
    /// The outer `Option` tells whether the type was resolved before.
    pub fn get(&self, type_name: &str) -> Option<Option<&I>> {
        self.icons.get(type_name).map(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl<I: Clone> Default for IconRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag/layer icons, loaded eagerly and reloaded on demand while missing.
pub struct OverlayAssets<I> {
    tag: Option<I>,
    layer: Option<I>,
}

impl<I: Clone> OverlayAssets<I> {
    pub fn load<S>(source: &S) -> Self
    where
        S: IconSource<Icon = I> + ?Sized,
    {
        Self {
            tag: source.load_asset(OverlayAsset::Tag),
            layer: source.load_asset(OverlayAsset::Layer),
        }
    }

    /// Returns the asset, retrying the load once if it is not available yet.
    ///
    /// A failed retry is not remembered: the next call tries again.
    pub fn ensure<S>(&mut self, source: &S, asset: OverlayAsset) -> Option<&I>
    where
        S: IconSource<Icon = I> + ?Sized,
    {
        let slot = match asset {
            OverlayAsset::Tag => &mut self.tag,
            OverlayAsset::Layer => &mut self.layer,
        };
        if slot.is_none() {
            *slot = source.load_asset(asset);
        }
        slot.as_ref()
    }

    pub const fn is_loaded(&self, asset: OverlayAsset) -> bool {
        match asset {
            OverlayAsset::Tag => self.tag.is_some(),
            OverlayAsset::Layer => self.layer.is_some(),
        }
    }
}
