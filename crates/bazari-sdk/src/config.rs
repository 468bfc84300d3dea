use crate::Result;
use bazari_engine::ViewConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Category slug → presentation hints for that category's detail view.
///
/// Unknown categories fall back to the default config, so a freshly
/// added admin form renders sensibly before anyone writes hints for it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigRegistry {
    #[serde(default)]
    pub categories: HashMap<String, ViewConfig>,
}

impl ConfigRegistry {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let registry: ConfigRegistry = toml::from_str(&content)?;
        Ok(registry)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Hints for a category, by exact key, by slug, or default.
    ///
    /// Slug matching handles the CamelCase keys some legacy category
    /// maps carried.
    pub fn config_for(&self, category: &str) -> ViewConfig {
        if let Some(config) = self.categories.get(category) {
            return config.clone();
        }

        let slug = slugify(category);
        if let Some(config) = self.categories.get(&slug) {
            return config.clone();
        }

        self.categories
            .iter()
            .find(|(key, _)| slugify(key) == slug)
            .map(|(_, config)| config.clone())
            .unwrap_or_default()
    }

    pub fn set_category(&mut self, slug: impl Into<String>, config: ViewConfig) {
        self.categories.insert(slug.into(), config);
    }
}

/// Normalize a category name to slug form, splitting camelCase too:
/// `"Tuition & Private Classes"` and `"TuitionPrivateClasses"` both
/// become `"tuition-private-classes"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    let mut pending_dash = false;
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if c.is_ascii_uppercase() && prev_lower {
                pending_dash = true;
            }
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        } else {
            pending_dash = true;
            prev_lower = false;
        }
    }
    slug
}
