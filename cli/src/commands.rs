pub mod render;
pub mod variants;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "geoquery")]
#[command(about = "Builds where conditions and renders their geometry to SQL.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output, repeat for even less (-qq prints only SQL)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Report which geometry variant was selected and why
    #[arg(long, global = true)]
    pub explain: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a where condition and render its geometry
    #[command(alias = "r")]
    Render(RenderArgs),
    /// Show one sample rendering per geometry variant
    #[command(alias = "v")]
    Variants,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Filter expression, checked by the expression validator
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Geometry text (e.g. WKT) or an area name containing '$'
    #[arg(short, long)]
    pub geometry: Option<String>,

    /// Replace the geometry with a buffered area-of-interest query
    #[arg(short, long)]
    pub area_of_interest: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
