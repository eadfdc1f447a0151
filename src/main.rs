use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use toroidal_life::{
    Controller, Flow, Seeding, StatsPanel,
    config::{Cli, WORLD_DIMENSIONS},
    input::{self, InputPoller},
    rendering::{self, Visual},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let (width, height) = Visual::default().window_size(WORLD_DIMENSIONS);
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.world_config().context("invalid configuration")?;
    let seeding = cli.seed.map_or(Seeding::Entropy, Seeding::Fixed);

    let mut controller = Controller::new(config, seeding);
    let mut world = controller.init_world();
    let mut poller = InputPoller::new(cli.poll_interval());
    let mut stats = StatsPanel::default();
    let visual = Visual::default();

    info!(rule = %config.rule, algorithm = config.algorithm.name(), "starting");

    while !world.is_exhausted() {
        let elapsed = Duration::from_secs_f32(get_frame_time());
        if let Some(command) = poller.poll(input::read_key_press(), elapsed) {
            if controller.cycle(&mut world, command) == Flow::Quit {
                break;
            }
        }

        clear_background(BLACK);
        stats.update(&world);
        rendering::draw_world(&stats.view(&world), stats.line(), &visual);
        next_frame().await;
    }

    info!(iteration = world.iteration(), "stopped");
    Ok(())
}
