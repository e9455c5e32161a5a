// src/main.rs
use anyhow::Result;
use clap::Parser;
use tagcloud::{Args, run};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    run(args)
}
