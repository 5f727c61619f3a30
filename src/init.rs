use std::path::{Path, PathBuf};

use crate::{
    catalog::{self, CatalogError},
    index::Index,
    models::Config,
};

const SAMPLE_CONFIG: &str = include_str!("../config.sample.toml");

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Load and merge config files over the defaults, in order.
pub fn init_config(paths: &[PathBuf]) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::default();

    if paths.is_empty() {
        log::info!("no config files specified, using defaults");
        return Ok(config);
    }

    for path in paths {
        log::info!("loading config: {}", path.display());
        let c = read_config(path)
            .map_err(|e| format!("error loading config {}: {}", path.display(), e))?;
        merge_config(&mut config, c);
    }

    Ok(config)
}

/// Load configuration from TOML file.
fn read_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// Merge the given src config into the dest config struct. Empty strings
/// and zero values in src leave dest untouched.
fn merge_config(dest: &mut Config, src: Config) {
    // Merge app config.
    if !src.app.address.is_empty() {
        dest.app.address = src.app.address;
    }
    if src.app.num_suggestions > 0 {
        dest.app.num_suggestions = src.app.num_suggestions;
    }
    if src.app.max_suggestions > 0 {
        dest.app.max_suggestions = src.app.max_suggestions;
    }
    if src.app.max_results > 0 {
        dest.app.max_results = src.app.max_results;
    }

    // Merge catalog config.
    if !src.catalog.path.is_empty() {
        dest.catalog.path = src.catalog.path;
    }
}

/// Generate sample config file.
pub fn generate_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err("config file already exists".into());
    }
    std::fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}

/// Build the index from the catalog file, or from the sample books when
/// no file is set.
pub fn init_index(catalog_path: &str) -> Result<Index, CatalogError> {
    let mut idx = Index::new();

    if catalog_path.is_empty() {
        let n = catalog::load_sample(&mut idx);
        log::info!("loaded {} sample books", n);
    } else {
        catalog::load_csv(Path::new(catalog_path), &mut idx)?;
    }

    if idx.is_empty() {
        log::warn!("catalog has no books");
    }

    let stats = idx.stats();
    log::info!(
        "indexed {} books ({} titles, {} authors, {} tags)",
        stats.books,
        stats.titles,
        stats.authors,
        stats.tags
    );

    Ok(idx)
}
