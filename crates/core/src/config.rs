use std::path::{Path, PathBuf};

use crate::paths;

/// Default artifact name when `--out` is not given.
pub const DEFAULT_OUTPUT_NAME: &str = "program";

/// Compiler used when `CC` is unset or empty.
pub const DEFAULT_COMPILER: &str = "gcc";

/// Extension of discovered sources, without the dot.
pub const SOURCE_EXTENSION: &str = "c";

/// Flags appended to every compile invocation.
pub const COMPILE_FLAGS: [&str; 2] = ["-Wall", "-Werror"];

/// Mode for created `obj/` and `bin/` directories.
pub const DIR_MODE: u32 = 0o755;

/// Mode set on the linked artifact.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Everything a single build needs to know.
///
/// The defaults mirror the fixed `src/`, `obj/`, `bin/` layout relative to the
/// current working directory. Nothing here performs IO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Input directory; must exist before the build starts.
    pub source_dir: PathBuf,
    /// Where object files are written (created if absent).
    pub object_dir: PathBuf,
    /// Where the linked artifact is written (created if absent).
    pub bin_dir: PathBuf,
    /// File name of the linked artifact inside `bin_dir`.
    pub output_name: String,
    /// Run the artifact after a successful link.
    pub should_run: bool,
    /// Compiler/linker executable.
    pub compiler: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            object_dir: PathBuf::from("obj"),
            bin_dir: PathBuf::from("bin"),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            should_run: false,
            compiler: DEFAULT_COMPILER.to_string(),
        }
    }
}

impl BuildConfig {
    /// Default layout with the compiler taken from `CC` when it is set.
    pub fn from_env() -> Self {
        Self { compiler: resolve_compiler(), ..Self::default() }
    }

    /// Rebase the three directories under `root`.
    pub fn rooted_at(mut self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.source_dir = root.join("src");
        self.object_dir = root.join("obj");
        self.bin_dir = root.join("bin");
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn with_run(mut self, should_run: bool) -> Self {
        self.should_run = should_run;
        self
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// `bin_dir/output_name`.
    pub fn output_path(&self) -> PathBuf {
        paths::join(&self.bin_dir, &self.output_name)
    }

    /// Object path for a source: its base name with `.c` swapped for `.o`,
    /// placed directly in `object_dir`.
    pub fn object_path_for(&self, source: &Path) -> PathBuf {
        let base = paths::basename(source);
        let object_name = paths::replace_extension(&base, ".c", ".o");
        paths::join(&self.object_dir, object_name)
    }
}

fn resolve_compiler() -> String {
    std::env::var("CC")
        .ok()
        .filter(|cc| !cc.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_COMPILER.to_string())
}
