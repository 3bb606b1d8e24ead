use anyhow::{bail, Context};
use log::info;
use std::process::{Command, Stdio};

/// Destination de la redirection finale.
pub trait Navigator {
    /// Ouvre `url`. Une erreur est journalisée par l'appelant, jamais fatale.
    fn navigate(&mut self, url: &str) -> anyhow::Result<()>;
}

/// Ouvre l'URL dans le navigateur par défaut du système.
#[derive(Debug, Default, Clone)]
pub struct SystemNavigator {
    visited: Vec<String>,
}

impl SystemNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

/// Commande d'ouverture de la plateforme courante.
pub fn opener_command(url: &str) -> Option<(&'static str, Vec<String>)> {
    match std::env::consts::OS {
        "macos" => Some(("open", vec![url.to_string()])),
        "windows" => Some((
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), url.to_string()],
        )),
        "linux" | "freebsd" | "openbsd" | "netbsd" => Some(("xdg-open", vec![url.to_string()])),
        _ => None,
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&mut self, url: &str) -> anyhow::Result<()> {
        if url.trim().is_empty() {
            bail!("empty redirect URL");
        }
        let Some((program, args)) = opener_command(url) else {
            bail!("no URL opener known for {}", std::env::consts::OS);
        };

        info!("🌐 Redirecting to {}", url);
        self.visited.push(url.to_string());
        Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch '{}' for {}", program, url))?;
        Ok(())
    }
}
