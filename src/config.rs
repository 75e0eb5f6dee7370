//! Catalog endpoint configuration.
//!
//! The client talks to one upstream catalog. The base URL is fixed at build
//! time: `RECIPE_CATALOG_URL` overrides the public TheMealDB v1 API when set
//! in the build environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Public TheMealDB API root used when no override is compiled in.
pub const DEFAULT_CATALOG_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Location of the recipe catalog and the three endpoints derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: String,
}

impl CatalogConfig {
    /// Build from the compile-time `RECIPE_CATALOG_URL`, falling back to
    /// [`DEFAULT_CATALOG_URL`].
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("RECIPE_CATALOG_URL").unwrap_or(DEFAULT_CATALOG_URL))
    }

    /// Build from an explicit base URL. Trailing slashes are dropped so
    /// endpoint paths join cleanly.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Name search; takes the `s` query parameter.
    pub fn search_endpoint(&self) -> String {
        format!("{}/search.php", self.base_url)
    }

    /// Single random recipe; no parameters.
    pub fn random_endpoint(&self) -> String {
        format!("{}/random.php", self.base_url)
    }

    /// Lookup by recipe id; takes the `i` query parameter.
    pub fn lookup_endpoint(&self) -> String {
        format!("{}/lookup.php", self.base_url)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_CATALOG_URL)
    }
}
