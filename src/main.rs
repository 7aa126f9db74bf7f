use anyhow::Context;
use clap::Parser;
use log::info;
use rmssd_precision::driver::plan::DEFAULT_ROUNDING_PLACES;
use rmssd_precision::driver::{run_plan, RunPlan};
use rmssd_precision::precision::Representation;
use rmssd_precision::preprocessing::source::FileSource;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare RMSSD across single, double and extended floating-point precision"
)]
struct Args {
    /// RR interval file, one decimal value per line
    #[arg(default_value = "test/RRIntervals_P7D1_Baseline.txt")]
    data: PathBuf,
    /// Load the representation/rounding combinations from YAML
    #[arg(long)]
    plan: Option<PathBuf>,
    /// Also evaluate with samples rounded to this many decimal places
    #[arg(
        long = "round",
        default_values_t = [DEFAULT_ROUNDING_PLACES],
        conflicts_with_all = ["plan", "no_round"]
    )]
    round: Vec<u32>,
    /// Only evaluate the unrounded samples
    #[arg(long, default_value_t = false, conflicts_with = "plan")]
    no_round: bool,
    /// Only evaluate these representations (narrow, standard, extended)
    #[arg(short = 'r', long = "representation", conflicts_with = "plan")]
    representations: Vec<Representation>,
    /// Skip blank lines instead of reporting them as malformed samples
    #[arg(long, default_value_t = false)]
    skip_blank_lines: bool,
    /// Wait for <enter> before exiting
    #[arg(long, default_value_t = false)]
    pause: bool,
}

/// The plan file wins over `--round` and `-r`, which clap keeps apart.
/// `--skip-blank-lines` applies on top of either.
fn build_plan(args: &Args) -> anyhow::Result<RunPlan> {
    let mut plan = match &args.plan {
        Some(path) => RunPlan::load(path)?,
        None => {
            let rounding: &[u32] = if args.no_round { &[] } else { &args.round };
            RunPlan::from_args(&args.representations, rounding, args.skip_blank_lines)
        }
    };
    plan.skip_blank_lines |= args.skip_blank_lines;
    Ok(plan)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let plan = build_plan(&args)?;
    let source = FileSource::new(&args.data);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = run_plan(&source, &plan, &mut stdout.lock(), &mut stderr.lock())
        .context("writing results")?;
    info!(
        "{} combinations succeeded, {} failed",
        summary.succeeded, summary.failed
    );

    if args.pause {
        print!("Press <enter> to exit");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin()
            .read_line(&mut line)
            .context("waiting for <enter>")?;
    }

    Ok(())
}
