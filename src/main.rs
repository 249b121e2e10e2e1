use tribody::{Scenario, ScenarioConfig, FrameStream};
use tribody::{bench_forces, bench_frames};

use clap::Parser;
use anyhow::Result;
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Number of frames to pull from the stream
    #[arg(short = 'n', long, default_value_t = 300)]
    frames: u64,

    /// Run the wall-clock benchmarks instead of the simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn initialize_logging() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .unwrap();

    log4rs::init_config(config).unwrap();
}

fn main() -> Result<()> {
    initialize_logging();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_frames();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let mut stream = FrameStream::new(scenario);

    info!("running {} frames", args.frames);
    for i in 0..args.frames {
        let intensity = stream.next_frame().total_intensity();
        if i % 60 == 0 {
            let sys = stream.system();
            info!(
                "frame {i}: canvas intensity {intensity:.3}, bodies at ({:.3}, {:.3}) ({:.3}, {:.3}) ({:.3}, {:.3})",
                sys.bodies[0].x.x, sys.bodies[0].x.y,
                sys.bodies[1].x.x, sys.bodies[1].x.y,
                sys.bodies[2].x.x, sys.bodies[2].x.y,
            );
        }
    }

    Ok(())
}
