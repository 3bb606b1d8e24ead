// build.rs
use cargo_metadata::MetadataCommand;
use std::collections::HashSet;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=assets/shaders");

    // Récupère la metadata du projet (non bloquant : le build continue sans)
    let metadata = match MetadataCommand::new().exec() {
        Ok(metadata) => metadata,
        Err(e) => {
            println!("cargo:warning=⚪ cargo metadata unavailable: {}", e);
            return;
        }
    };

    // Ensemble des crates dont on affiche la version au démarrage
    let tracked = HashSet::from(["glfw", "gl", "imgui"]);

    for package in &metadata.packages {
        if tracked.contains(package.name.as_str()) {
            println!(
                "cargo:rustc-env={}={}",
                package.name.to_uppercase(),
                package.version
            );
        }
    }
}
