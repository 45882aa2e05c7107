#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod motion_plan;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// ZidioConnect pitch deck
#[derive(Parser, Debug)]
#[command(name = "zidiodeck")]
#[command(about = "ZidioConnect - job portal platform pitch deck")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Start maximized
    #[arg(long)]
    maximized: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    tracing::info!(
        "Starting ZidioDeck ({}x{}{})",
        args.width,
        args.height,
        if args.maximized { ", maximized" } else { "" }
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("ZidioConnect - Job Portal Platform")
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_maximized(args.maximized)
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
