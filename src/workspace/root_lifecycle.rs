use super::*;

impl Workspace {
    /// Opens `root` with the config at `config_path` (default
    /// `<root>/.cocode/config.json`).
    pub fn open(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("canonicalize {}", root.display()))?;
        if !root.is_dir() {
            anyhow::bail!("{} is not a directory", root.display());
        }
        let config = match config_path {
            Some(p) => AppConfig::load(p)?,
            None => AppConfig::load(&AppConfig::default_path(&root))?,
        };
        Ok(Self { root, config })
    }

    /// Walks up from `start` looking for a `.cocode` directory. Falls back to
    /// `start` itself when none is found.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if dir.join(CONFIG_DIR).is_dir() {
                return Self::open(dir, None);
            }
        }
        Self::open(&start, None)
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    pub fn ensure_config_dir(&self) -> Result<PathBuf> {
        let dir = self.config_dir();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(dir)
    }
}
