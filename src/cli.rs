// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use kcloud::output::OutputFormat;

#[derive(Parser)]
#[command(name = "kcloud")]
#[command(about = "Manage KraftCloud disk images from the command line")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage images in the KraftCloud registry
    #[command(subcommand, visible_alias = "image")]
    Img(ImgCommands),
}

#[derive(Subcommand)]
pub enum ImgCommands {
    /// Delete an image
    #[command(visible_aliases = ["delete", "del", "remove"])]
    Rm(RmArgs),

    /// List images
    #[command(visible_alias = "list")]
    Ls(LsArgs),
}

#[derive(Args)]
pub struct RmArgs {
    /// Remove all images
    #[arg(long)]
    pub all: bool,

    /// Target metro (falls back to KRAFTCLOUD_METRO)
    #[arg(long)]
    pub metro: Option<String>,

    /// Images to remove
    #[arg(value_name = "NAME[:latest|@sha256:...]")]
    pub images: Vec<String>,
}

#[derive(Args)]
pub struct LsArgs {
    /// Target metro (falls back to KRAFTCLOUD_METRO)
    #[arg(long)]
    pub metro: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    pub output: OutputFormat,
}
