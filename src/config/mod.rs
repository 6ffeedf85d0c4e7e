mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    AccessibilityConfig, BemConfig, CONFIG_VERSION, CaseConfig, Config, CustomPropertiesConfig,
    DEFAULT_ALLOWED_PREFIXES, DEFAULT_EXPECTED_COMPONENTS, DiffEngine, ImportantConfig,
    PageConfig, PerformanceConfig, QualityConfig, ResponsiveConfig, RulesConfig, ViewportConfig,
    Viewport, VisualConfig,
};
pub use validation::validate_config_semantics;
