use anyhow::Context;
use clap::{ArgAction, Parser};
use polyscribe::{Config, input::InputState, script, util};
use std::io::Read;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("POLYSCRIBE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "polyscribe")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Click-by-click polyline drawing with undo and redo"
)]
struct Cli {
    /// Event script to replay (reads stdin when omitted)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/polyscribe/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the resulting drawing as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["script", "json"])]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut state = InputState::from_config(&config).context("Invalid keybindings in config")?;

    let source = match &cli.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let events = script::parse(&source).context("Invalid event script")?;
    log::info!("Replaying {} events", events.len());
    script::replay(&events, &mut state);

    if cli.json {
        let report = serde_json::json!({
            "shapes": state.canvas.frame().shapes(),
            "state": state.machine.state().name(),
            "history": state.affordance(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&state);
    }

    Ok(())
}

fn print_report(state: &InputState) {
    for shape in state.canvas.frame().shapes() {
        let points: Vec<String> = shape.points().iter().map(ToString::to_string).collect();
        println!(
            "{} {} {}",
            shape.id(),
            util::color_to_name(&shape.color()),
            points.join(" ")
        );
    }

    let affordance = state.affordance();
    println!("state: {}", state.machine.state().name());
    println!("can_undo: {}", affordance.can_undo);
    println!("can_redo: {}", affordance.can_redo);
}
