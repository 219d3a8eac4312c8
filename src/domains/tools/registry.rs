//! Tool Registry - central, ordered registration of all tools.
//!
//! This module provides:
//! - The list of built-in tools, in default display order
//! - Lookup of a manifest by identifier
//! - The fixed category taxonomy
//!
//! When adding a new tool:
//! 1. Create the tool file in `definitions/<category>/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_tools()`

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::definitions::{
    Base64Tool, CaseConverterTool, ColorConverterTool, CsvToJsonTool, HtmlEntitiesTool,
    JsonFormatterTool, JwtDecoderTool, LoremIpsumTool, NumberBaseTool, PasswordGeneratorTool,
    RegexTesterTool, TextDiffTool, TimestampTool, ToolDefinition, UuidGeneratorTool,
    WordCounterTool,
};
use super::error::ToolError;
use super::loader::DefinitionLoader;
use super::manifest::{ToolCategory, ToolManifest};

/// Build a ToolManifest from a ToolDefinition.
fn build_manifest<T: ToolDefinition>() -> ToolManifest {
    ToolManifest::new(
        T::ID,
        T::NAME,
        T::DESCRIPTION,
        T::CATEGORY,
        Arc::new(DefinitionLoader::<T>::new()),
    )
    .with_tags(T::TAGS.iter().copied())
    .with_icon(T::ICON)
}

/// Get all built-in tools as manifests.
///
/// This is the central place where all tools are registered.
/// The order here is the default display order.
pub fn get_all_tools() -> Vec<ToolManifest> {
    vec![
        build_manifest::<CaseConverterTool>(),
        build_manifest::<WordCounterTool>(),
        build_manifest::<RegexTesterTool>(),
        build_manifest::<TextDiffTool>(),
        build_manifest::<Base64Tool>(),
        build_manifest::<HtmlEntitiesTool>(),
        build_manifest::<JwtDecoderTool>(),
        build_manifest::<JsonFormatterTool>(),
        build_manifest::<LoremIpsumTool>(),
        build_manifest::<UuidGeneratorTool>(),
        build_manifest::<PasswordGeneratorTool>(),
        build_manifest::<NumberBaseTool>(),
        build_manifest::<TimestampTool>(),
        build_manifest::<ColorConverterTool>(),
        build_manifest::<CsvToJsonTool>(),
    ]
}

/// Get the list of all built-in tool ids.
pub fn tool_ids() -> Vec<&'static str> {
    vec![
        CaseConverterTool::ID,
        WordCounterTool::ID,
        RegexTesterTool::ID,
        TextDiffTool::ID,
        Base64Tool::ID,
        HtmlEntitiesTool::ID,
        JwtDecoderTool::ID,
        JsonFormatterTool::ID,
        LoremIpsumTool::ID,
        UuidGeneratorTool::ID,
        PasswordGeneratorTool::ID,
        NumberBaseTool::ID,
        TimestampTool::ID,
        ColorConverterTool::ID,
        CsvToJsonTool::ID,
    ]
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Ordered, read-only collection of tool manifests.
///
/// Built once at startup and shared freely afterwards; there is no way
/// to add or remove a tool once the registry exists.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<Arc<ToolManifest>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a registry from manifests in display order.
    ///
    /// Fails with `DuplicateId` if two manifests share an identifier.
    pub fn new(manifests: Vec<ToolManifest>) -> Result<Self, ToolError> {
        let mut tools = Vec::with_capacity(manifests.len());
        let mut index = HashMap::with_capacity(manifests.len());

        for manifest in manifests {
            if index.contains_key(&manifest.id) {
                return Err(ToolError::DuplicateId(manifest.id));
            }
            debug!("Registering tool: {}", manifest.id);
            index.insert(manifest.id.clone(), tools.len());
            tools.push(Arc::new(manifest));
        }

        Ok(Self { tools, index })
    }

    /// Create the registry of built-in tools.
    pub fn builtin() -> Result<Self, ToolError> {
        let registry = Self::new(get_all_tools())?;
        info!("Registered {} tools", registry.len());
        Ok(registry)
    }

    /// All manifests, in registration order.
    pub fn all(&self) -> &[Arc<ToolManifest>] {
        &self.tools
    }

    /// Look up a manifest by id.
    ///
    /// An unknown id is an expected outcome (e.g. a link to a removed tool)
    /// and is reported as `ToolError::NotFound`.
    pub fn by_id(&self, id: &str) -> Result<Arc<ToolManifest>, ToolError> {
        self.index
            .get(id)
            .map(|&i| self.tools[i].clone())
            .ok_or_else(|| ToolError::not_found(id))
    }

    /// Whether a manifest exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The category taxonomy, independent of which tools are registered.
    pub fn categories(&self) -> &'static [ToolCategory] {
        &ToolCategory::ALL
    }

    /// Resolve stored ids to manifests, keeping their order.
    ///
    /// Ids with no matching manifest are dropped.
    pub fn resolve<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Arc<ToolManifest>> {
        ids.iter()
            .filter_map(|id| match self.by_id(id.as_ref()) {
                Ok(manifest) => Some(manifest),
                Err(_) => {
                    debug!("Skipping stale tool id: {}", id.as_ref());
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
