//! `gantry init` command.
//!
//! Scaffolds a new gantry application project with a Cargo.toml, a
//! configs/config.toml, and a src/ with main.rs plus an example method.

use std::path::Path;

use clap::Args;

use crate::commands::templates;
use crate::output;

/// Scaffold a new gantry application project.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Application name (e.g. "orders-api"). Used for directory and crate name.
    pub name: String,
    /// HTTP port written into the generated config.
    #[arg(short, long, default_value = "8080")]
    pub port: u16,
    /// Directory to create the project under.
    #[arg(long, default_value = ".")]
    pub path: String,
}

/// Executes the init command.
pub fn execute(args: &InitArgs) -> anyhow::Result<()> {
    execute_at(args, Path::new(&args.path))
}

/// Executes the init command with an explicit base directory (testable).
pub(crate) fn execute_at(args: &InitArgs, base_dir: &Path) -> anyhow::Result<()> {
    let dir = base_dir.join(&args.name);
    if dir.exists() {
        anyhow::bail!("directory already exists: {}", dir.display());
    }

    std::fs::create_dir_all(dir.join("src"))?;
    std::fs::create_dir_all(dir.join("configs"))?;

    write_cargo_toml(&dir, &args.name)?;
    write_config_toml(&dir, args.port)?;
    std::fs::write(dir.join("src").join("main.rs"), templates::MAIN_RS)?;
    std::fs::write(dir.join("src").join("methods.rs"), templates::METHODS_RS)?;
    std::fs::write(dir.join(".gitignore"), templates::GITIGNORE)?;

    print_summary(&args.name, args.port);
    Ok(())
}

fn write_cargo_toml(dir: &Path, name: &str) -> anyhow::Result<()> {
    let content = templates::apply(templates::APP_CARGO_TOML, &[("__APP_NAME__", name)]);
    std::fs::write(dir.join("Cargo.toml"), content)?;
    Ok(())
}

fn write_config_toml(dir: &Path, port: u16) -> anyhow::Result<()> {
    let port = port.to_string();
    let content = templates::apply(templates::CONFIG_TOML, &[("__HTTP_PORT__", port.as_str())]);
    std::fs::write(dir.join("configs").join("config.toml"), content)?;
    Ok(())
}

fn print_summary(name: &str, port: u16) {
    output::print_success(&format!("Created application project: {name}/"));
    println!();
    println!("  {name}/");
    println!("  ├── Cargo.toml");
    println!("  ├── .gitignore");
    println!("  ├── configs/");
    println!("  │   └── config.toml");
    println!("  └── src/");
    println!("      ├── main.rs");
    println!("      └── methods.rs");
    println!();
    println!("Next steps:");
    println!("  cd {name}");
    println!("  cargo run");
    println!(
        r#"  curl -s http://127.0.0.1:{port}/api/rpc -d '{{"jsonrpc":"2.0","method":"ping","params":{{}},"id":"1"}}'"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_expected_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let args = InitArgs {
            name: "test-app".to_string(),
            port: 9000,
            path: ".".to_string(),
        };
        execute_at(&args, tmp.path()).expect("init");

        let base = tmp.path().join("test-app");
        assert!(base.join("Cargo.toml").exists());
        assert!(base.join("configs/config.toml").exists());
        assert!(base.join("src/main.rs").exists());
        assert!(base.join("src/methods.rs").exists());
        assert!(base.join(".gitignore").exists());

        let cargo = std::fs::read_to_string(base.join("Cargo.toml")).expect("read Cargo.toml");
        assert!(cargo.contains("name = \"test-app\""));
        assert!(cargo.contains("path = \"../crates/gantry-rpc\""));
        assert!(cargo.contains("[workspace]"));

        let config =
            std::fs::read_to_string(base.join("configs/config.toml")).expect("read config.toml");
        assert!(config.contains("port = 9000"));

        let methods = std::fs::read_to_string(base.join("src/methods.rs")).expect("read methods");
        assert!(methods.contains("HelloMethod"));
    }

    #[test]
    fn init_fails_if_dir_exists() {
        let tmp = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(tmp.path().join("existing")).expect("mkdir");
        let args = InitArgs {
            name: "existing".to_string(),
            port: 8080,
            path: ".".to_string(),
        };
        assert!(execute_at(&args, tmp.path()).is_err());
    }
}
