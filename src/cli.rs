// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio")]
#[command(about = "Interactive 3D portfolio", long_about = None)]
pub struct Cli {
    /// Scene to open with
    #[arg(long, value_enum, default_value = "gallery")]
    pub scene: SceneArg,

    /// Disable the overlay UI (sections, HUD, contact form)
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Path to a JSON config file (missing file falls back to defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneArg {
    Gallery,
    Sphere,
}

impl From<SceneArg> for SceneKind {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Gallery => SceneKind::Gallery,
            SceneArg::Sphere => SceneKind::TechSphere,
        }
    }
}
