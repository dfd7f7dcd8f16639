//! Turning a manifest into a populated [`ContentRegistry`].

use super::config::ContentConfig;
use super::manifest::{BlockManifest, ContentManifest, TextureManifest};
use crate::atlas::AtlasSubmap;
use crate::carving::CarvingValue;
use crate::ctm::{AdjacencyMapper, ConnectionMethod, CtmTexture};
use crate::error::{CtmError, Result};
use crate::registry::ContentRegistry;
use crate::variant::{BlockBuilder, ResourceLocation, VariantPacker};
use log::info;
use std::collections::{HashMap, HashSet};

/// Whether a feature loads, and if not, why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureStatus {
    Enabled,
    /// The parent feature with this name did not load.
    ParentDisabled(String),
    /// The required mod with this id is missing.
    MissingMod(String),
    /// Switched off in the config.
    Disabled,
}

impl FeatureStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, FeatureStatus::Enabled)
    }
}

/// The registry plus the load decision for every feature.
#[derive(Debug)]
pub struct LoadedContent {
    pub registry: ContentRegistry,
    /// Every feature of the manifest, in declaration order.
    pub features: Vec<(String, FeatureStatus)>,
}

impl LoadedContent {
    pub fn enabled_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .filter(|(_, status)| status.is_enabled())
            .map(|(name, _)| name.as_str())
    }
}

/// Decide which features load.
///
/// A feature loads if its parent loads, its required mod is present and the
/// config does not disable it. Duplicate names, unknown parents and parent
/// cycles are errors.
pub fn feature_statuses(manifest: &ContentManifest, config: &ContentConfig) -> Result<Vec<(String, FeatureStatus)>> {
    let mut names = HashSet::new();
    for feature in &manifest.features {
        if !names.insert(feature.name.as_str()) {
            return Err(CtmError::DuplicateFeature(feature.name.clone()));
        }
    }

    let mut memo = HashMap::new();
    let mut visiting = HashSet::new();
    manifest
        .features
        .iter()
        .map(|f| {
            let status = status_of(&f.name, manifest, config, &mut memo, &mut visiting)?;
            Ok((f.name.clone(), status))
        })
        .collect()
}

fn status_of<'m>(
    name: &'m str,
    manifest: &'m ContentManifest,
    config: &ContentConfig,
    memo: &mut HashMap<&'m str, FeatureStatus>,
    visiting: &mut HashSet<&'m str>,
) -> Result<FeatureStatus> {
    if let Some(status) = memo.get(name) {
        return Ok(status.clone());
    }
    let feature = manifest
        .feature(name)
        .ok_or_else(|| CtmError::UnknownFeature(name.to_string()))?;
    if !visiting.insert(name) {
        return Err(CtmError::FeatureCycle(name.to_string()));
    }

    let parent_enabled = match &feature.parent {
        Some(parent) => status_of(parent, manifest, config, memo, visiting)?.is_enabled(),
        None => true,
    };
    let status = match (&feature.parent, &feature.required_mod) {
        (Some(parent), _) if !parent_enabled => FeatureStatus::ParentDisabled(parent.clone()),
        (_, Some(mod_id)) if !config.mod_loaded(mod_id) => FeatureStatus::MissingMod(mod_id.clone()),
        _ if config.feature_disabled(name) => FeatureStatus::Disabled,
        _ => FeatureStatus::Enabled,
    };

    visiting.remove(name);
    memo.insert(name, status.clone());
    Ok(status)
}

/// Load every enabled feature of a manifest into a fresh registry.
pub fn load_content(manifest: &ContentManifest, config: &ContentConfig) -> Result<LoadedContent> {
    let packer = VariantPacker::new(config.capacity)?;
    let features = feature_statuses(manifest, config)?;
    let mut registry = ContentRegistry::new(packer);

    info!("Loading blocks...");
    let mut loaded = 0;
    for (feature, (name, status)) in manifest.features.iter().zip(&features) {
        match status {
            FeatureStatus::Enabled => {}
            FeatureStatus::ParentDisabled(parent) => {
                info!("Skipping feature {} as its parent feature {} was disabled.", name, parent);
                continue;
            }
            FeatureStatus::MissingMod(mod_id) => {
                info!("Skipping feature {} as its required mod {} was missing.", name, mod_id);
                continue;
            }
            FeatureStatus::Disabled => {
                info!("Skipping feature {} as it was disabled in the config.", name);
                continue;
            }
        }

        for block in &feature.blocks {
            registry.register_builder(&block_builder(&manifest.domain, block))?;
        }
        for entry in &feature.carving {
            registry.add_carving(&entry.group, CarvingValue::External(entry.value.clone()), entry.order);
        }
        for texture in &feature.textures {
            let (location, ctm) = ctm_texture(&manifest.domain, texture)?;
            registry.register_texture(location, ctm)?;
        }
        loaded += 1;
    }
    info!(
        "{} features loaded, {} blocks registered, {} carving groups.",
        loaded,
        registry.block_count(),
        registry.carving().len()
    );

    Ok(LoadedContent { registry, features })
}

fn block_builder(domain: &str, manifest: &BlockManifest) -> BlockBuilder {
    let mut block = BlockBuilder::new(domain, &manifest.name).opaque(manifest.opaque);
    if let Some(folder) = &manifest.parent_folder {
        block = block.parent_folder(folder);
    }
    if let Some(group) = &manifest.group {
        block = block.group(group);
    }

    for variation in &manifest.variations {
        let mut builder = block.variation(&variation.name).order(variation.order);
        if let Some(group) = &variation.group {
            builder = builder.group(group);
        }
        if let Some(opaque) = variation.opaque {
            builder = builder.opaque(opaque);
        }
        if let Some(texture) = &variation.texture {
            builder = builder.texture_location(texture);
        }
        for (face, path) in &variation.overrides {
            builder = builder.texture_override(path, &[*face]);
        }
        if let Some(smelt) = &variation.smelt {
            builder = builder.smelt_recipe(smelt.source.clone(), smelt.amount);
        }
        match &variation.recipe {
            Some(recipe) => builder.recipe(recipe),
            None => builder,
        };
    }
    block
}

fn ctm_texture(domain: &str, manifest: &TextureManifest) -> Result<(ResourceLocation, CtmTexture)> {
    let location = ResourceLocation::parse(&manifest.location, domain);
    let sprite = match &manifest.sprite {
        Some(sprite) => ResourceLocation::parse(sprite, domain),
        None => ResourceLocation::new(location.namespace.clone(), format!("{}-ctm", location.path)),
    };

    let (cols, rows) = manifest.method.grid();
    let submap = AtlasSubmap::new(
        sprite.to_string(),
        manifest.rows.unwrap_or(rows),
        manifest.cols.unwrap_or(cols),
    )?;
    let check = manifest
        .obscured_face_check
        .unwrap_or(manifest.method != ConnectionMethod::Simple);
    let texture = CtmTexture::new(submap, manifest.method)?
        .with_mapper(AdjacencyMapper::new(check))
        .with_transform(manifest.transform);
    Ok((location, texture))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::TileTransform;

    const MANIFEST: &str = r#"{
        "domain": "chisel",
        "features": [
            {
                "name": "antiblock",
                "blocks": [ {
                    "name": "antiblock",
                    "variations": [
                        { "name": "black" }, { "name": "red" }, { "name": "green" }, { "name": "brown" },
                        { "name": "blue" }, { "name": "purple" }, { "name": "cyan" }, { "name": "silver" },
                        { "name": "gray" }, { "name": "pink" }, { "name": "lime" }, { "name": "yellow" },
                        { "name": "light_blue" }, { "name": "magenta" }, { "name": "orange" }, { "name": "white" },
                        { "name": "glow" }, { "name": "shadow" }
                    ]
                } ]
            },
            {
                "name": "marble",
                "blocks": [ {
                    "name": "marble",
                    "variations": [
                        { "name": "raw", "order": -100 },
                        { "name": "pillar", "group": "" },
                        { "name": "bricks", "overrides": { "up": "marble/bricks-top" } }
                    ]
                } ],
                "carving": [ { "group": "marble", "value": "minecraft:quartz_block", "order": -1 } ],
                "textures": [
                    { "location": "marble/raw", "method": "full" },
                    { "location": "marble/bricks", "method": "simple", "transform": { "rotation": 1 } }
                ]
            },
            { "name": "marble_extra", "parent": "marble", "blocks": [ {
                "name": "marbleextra", "variations": [ { "name": "a" } ] } ] },
            { "name": "thaumic", "required_mod": "thaumcraft", "blocks": [ {
                "name": "arcane", "variations": [ { "name": "matrix" } ] } ] }
        ]
    }"#;

    fn manifest() -> ContentManifest {
        ContentManifest::from_json_str(MANIFEST).unwrap()
    }

    #[test]
    fn test_load_everything_available() {
        let loaded = load_content(&manifest(), &ContentConfig::default()).unwrap();
        let registry = &loaded.registry;

        assert_eq!(
            loaded.enabled_features().collect::<Vec<_>>(),
            vec!["antiblock", "marble", "marble_extra"]
        );
        assert_eq!(loaded.features[3].1, FeatureStatus::MissingMod("thaumcraft".into()));

        // 18 antiblocks split over two blocks, then marble and marbleextra
        assert_eq!(registry.block_count(), 4);
        assert_eq!(registry.lookup("chisel:antiblock1").unwrap().definition.slot_set.len(), 2);
        assert!(registry.lookup("chisel:arcane").is_none());

        let marble = registry.carving().group("marble");
        assert_eq!(marble.len(), 3);
        assert_eq!(marble[0].order, -100);
        assert_eq!(marble[1].value, CarvingValue::External("minecraft:quartz_block".into()));

        let bricks = registry.variant("chisel:marble", 2).unwrap();
        assert_eq!(bricks.texture_for(crate::types::Facing::Up).path, "marble/bricks-top");
    }

    #[test]
    fn test_textures_are_registered() {
        let loaded = load_content(&manifest(), &ContentConfig::default()).unwrap();
        let raw = loaded
            .registry
            .texture(&ResourceLocation::new("chisel", "marble/raw"))
            .unwrap();
        assert_eq!(raw.method(), ConnectionMethod::Full);
        assert_eq!(raw.submap().sprite(), "chisel:marble/raw-ctm");
        assert_eq!((raw.submap().cols(), raw.submap().rows()), (8, 6));
        assert!(raw.mapper().obscured_face_check);

        let bricks = loaded
            .registry
            .texture(&ResourceLocation::new("chisel", "marble/bricks"))
            .unwrap();
        assert!(!bricks.mapper().obscured_face_check);
        assert_eq!(bricks.default_tile().transform, TileTransform::rotated(1));
    }

    #[test]
    fn test_disabling_parent_skips_children() {
        let config = ContentConfig::default().disable("marble").with_mod("thaumcraft");
        let loaded = load_content(&manifest(), &config).unwrap();
        assert_eq!(loaded.features[1].1, FeatureStatus::Disabled);
        assert_eq!(loaded.features[2].1, FeatureStatus::ParentDisabled("marble".into()));
        assert_eq!(loaded.features[3].1, FeatureStatus::Enabled);
        assert!(loaded.registry.lookup("chisel:marbleextra").is_none());
        assert!(loaded.registry.lookup("chisel:arcane").is_some());
        assert!(loaded.registry.carving().group("marble").is_empty());
    }

    #[test]
    fn test_capacity_from_config() {
        let config = ContentConfig {
            capacity: 4,
            ..ContentConfig::default()
        };
        let loaded = load_content(&manifest(), &config).unwrap();
        assert!(loaded.registry.lookup("chisel:antiblock4").is_some());
        assert!(loaded.registry.lookup("chisel:antiblock5").is_none());

        let zero = ContentConfig {
            capacity: 0,
            ..ContentConfig::default()
        };
        assert!(matches!(load_content(&manifest(), &zero), Err(CtmError::InvalidCapacity(0))));
    }

    #[test]
    fn test_unknown_parent_and_cycles() {
        let unknown = ContentManifest::from_json_str(
            r#"{ "domain": "x", "features": [ { "name": "a", "parent": "nope" } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            feature_statuses(&unknown, &ContentConfig::default()),
            Err(CtmError::UnknownFeature(name)) if name == "nope"
        ));

        let cycle = ContentManifest::from_json_str(
            r#"{ "domain": "x", "features": [ { "name": "a", "parent": "b" }, { "name": "b", "parent": "a" } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            feature_statuses(&cycle, &ContentConfig::default()),
            Err(CtmError::FeatureCycle(_))
        ));
    }

    #[test]
    fn test_duplicate_feature_names() {
        let manifest = ContentManifest::from_json_str(
            r#"{ "domain": "x", "features": [ { "name": "a" }, { "name": "b" }, { "name": "a", "required_mod": "m" } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            load_content(&manifest, &ContentConfig::default()),
            Err(CtmError::DuplicateFeature(name)) if name == "a"
        ));
    }

    #[test]
    fn test_duplicate_texture_location_fails_load() {
        let manifest = ContentManifest::from_json_str(
            r#"{ "domain": "x", "features": [
                { "name": "a", "textures": [ { "location": "stone/raw", "method": "full" } ] },
                { "name": "b", "textures": [ { "location": "x:stone/raw", "method": "simple" } ] }
            ] }"#,
        )
        .unwrap();
        assert!(matches!(
            load_content(&manifest, &ContentConfig::default()),
            Err(CtmError::DuplicateTexture(name)) if name == "x:stone/raw"
        ));
    }

    #[test]
    fn test_variation_recipe_is_kept() {
        let manifest = ContentManifest::from_json_str(
            r#"{ "domain": "x", "features": [ { "name": "a", "blocks": [ {
                "name": "b", "variations": [ { "name": "c", "recipe": "c_from_b" } ] } ] } ] }"#,
        )
        .unwrap();
        let loaded = load_content(&manifest, &ContentConfig::default()).unwrap();
        assert_eq!(loaded.registry.variant("x:b", 0).unwrap().recipe.as_deref(), Some("c_from_b"));
    }

    #[test]
    fn test_empty_block_fails_load() {
        let manifest = ContentManifest::from_json_str(
            r#"{ "domain": "x", "features": [ { "name": "a", "blocks": [ { "name": "b", "variations": [] } ] } ] }"#,
        )
        .unwrap();
        assert!(matches!(
            load_content(&manifest, &ContentConfig::default()),
            Err(CtmError::EmptyRequest(name)) if name == "b"
        ));
    }
}
