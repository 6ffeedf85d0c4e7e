#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the css-guard binary.
#[macro_export]
macro_rules! css_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("css-guard"))
    };
}

/// Config matching the fixture site: two components, relaxed visual root.
pub const SITE_CONFIG: &str = r#"
[rules]
css_root = "css"
expected_components = ["buttons.css", "cards.css"]

[visual]
screens_root = "shots"
"#;

pub const BUTTONS_CSS: &str = "/* Buttons */
/* Primary variant */
.btn { padding: 1rem; }
.button__label { color: var(--brand); }
.button--primary:focus { outline: 2px solid var(--brand); }
";

pub const CARDS_CSS: &str = "/* Cards */
/* Layout */
.card { display: block; }
.card__title { font-weight: bold; }
";

pub const VARIABLES_CSS: &str = ":root {
  --brand: #0055aa;
  --space: 1rem;
}
";

pub const RESPONSIVE_CSS: &str = "@media (min-width: 576px) { .card { display: flex; } }
@media (max-width: 991px) { .btn { width: 100%; } }
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A well-formed stylesheet tree plus a matching `.css-guard.toml`.
    pub fn site() -> Self {
        let fixture = Self::new();
        fixture.create_config(SITE_CONFIG);
        fixture.create_file("css/components/buttons.css", BUTTONS_CSS);
        fixture.create_file("css/components/cards.css", CARDS_CSS);
        fixture.create_file("css/base/variables.css", VARIABLES_CSS);
        fixture.create_file("css/base/responsive.css", RESPONSIVE_CSS);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        self.create_bytes(relative_path, content.as_bytes());
    }

    /// Creates a binary file in the temp directory.
    pub fn create_bytes(&self, relative_path: &str, content: &[u8]) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> Vec<u8> {
        fs::read(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.css-guard.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".css-guard.toml", content);
    }
}
