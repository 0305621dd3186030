use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const EXTENSION_DIR: &str = "extension";
const CONFIG_PATH: &str = "extension/wiper.toml";
const STATIC_DIR: &str = "extension/static";
const PKG_DIR: &str = "extension/pkg";
const WASM_NAME: &str = "chrome_wiper_extension";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Chrome Wiper task runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the WebAssembly module with wasm-pack
    Build {
        /// Optimized build
        #[arg(short, long)]
        release: bool,
    },

    /// Write manifest.json from extension/wiper.toml
    Manifest {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },

    /// Build and assemble a loadable unpacked extension
    Package {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Optimized build
        #[arg(short, long)]
        release: bool,
    },

    /// Run all Rust tests
    Test,

    /// Run clippy linter
    Clippy,

    /// Remove build outputs
    Clean,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    manifest: ManifestConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ManifestConfig {
    name: String,
    version: String,
    description: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: "Chrome Wiper".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: String::new(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { release } => build(release),
        Commands::Manifest { out } => manifest(&out),
        Commands::Package { out, release } => package(&out, release),
        Commands::Test => test(),
        Commands::Clippy => clippy(),
        Commands::Clean => clean(),
    }
}

fn build(release: bool) -> Result<()> {
    println!("🔨 Building extension wasm...");
    let profile = if release { "--release" } else { "--dev" };
    run_cmd(
        "wasm-pack",
        &[
            "build",
            EXTENSION_DIR,
            "--target",
            "no-modules",
            "--no-typescript",
            profile,
        ],
    )?;
    Ok(())
}

fn load_manifest_config(path: &Path) -> Result<ManifestConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config.manifest)
}

fn manifest_json(config: &ManifestConfig) -> serde_json::Value {
    let wasm_js = format!("pkg/{}.js", WASM_NAME);
    let wasm_bin = format!("pkg/{}_bg.wasm", WASM_NAME);

    serde_json::json!({
        "manifest_version": 3,
        "name": config.name,
        "version": config.version,
        "description": config.description,
        "permissions": ["storage", "contextMenus", "tabs"],
        "background": { "service_worker": "background.js" },
        "content_scripts": [{
            "matches": ["<all_urls>"],
            "js": [wasm_js, "content.js"],
            "css": ["wiper.css"],
        }],
        "web_accessible_resources": [{
            "resources": [wasm_bin, "resource/*"],
            "matches": ["<all_urls>"],
        }],
        "content_security_policy": {
            "extension_pages": "script-src 'self' 'wasm-unsafe-eval'; object-src 'self'",
        },
    })
}

fn manifest(out: &Path) -> Result<()> {
    let config = load_manifest_config(Path::new(CONFIG_PATH))?;
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let path = out.join("manifest.json");
    let content = serde_json::to_string_pretty(&manifest_json(&config))?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("  ✅ Wrote {} ({} {})", path.display(), config.name, config.version);
    Ok(())
}

fn package(out: &Path, release: bool) -> Result<()> {
    build(release)?;

    println!("📦 Assembling {}...", out.display());
    let _ = fs::remove_dir_all(out);
    copy_dir(Path::new(STATIC_DIR), out)?;

    let pkg_out = out.join("pkg");
    fs::create_dir_all(&pkg_out)?;
    for file in [format!("{}.js", WASM_NAME), format!("{}_bg.wasm", WASM_NAME)] {
        let from = Path::new(PKG_DIR).join(&file);
        fs::copy(&from, pkg_out.join(&file))
            .with_context(|| format!("Failed to copy {}", from.display()))?;
    }

    manifest(out)?;

    if !out.join("resource").exists() {
        println!("⚠️  No resource/ images in {}; add wiper_root.png and wiper_branch.png", STATIC_DIR);
    }
    println!("✅ Load {} as an unpacked extension", out.display());
    Ok(())
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to.display()))?;

    for entry in fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

fn test() -> Result<()> {
    println!("🧪 Running all tests...");
    run_cmd("cargo", &["test", "--workspace"])?;
    Ok(())
}

fn clippy() -> Result<()> {
    println!("🔍 Running clippy on workspace (warnings as errors)...");
    run_cmd(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )?;
    Ok(())
}

fn clean() -> Result<()> {
    println!("🧹 Removing build outputs...");
    // Ignore errors for directories that don't exist
    let _ = fs::remove_dir_all(PKG_DIR);
    let _ = fs::remove_dir_all("dist");
    run_cmd("cargo", &["clean"])?;
    Ok(())
}

fn run_cmd(program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to run: {} {}", program, args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("Command failed: {} {}", program, args.join(" "));
    }

    Ok(())
}
