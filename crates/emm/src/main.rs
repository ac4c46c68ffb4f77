use std::path::PathBuf;

use ambertools::Local;
use clap::Parser;
use emm::{
    Params, die,
    config::RawConfig,
    input,
};
use log::{debug, info};

/// Energy minimization of a small ligand PDB file using AmberTools. The
/// minimized structure is written next to the input as <name><suffix>.pdb, so
/// with the default empty suffix the input file is replaced.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "AMBERHOME must point to the AmberTools installation, \
		  e.g. export AMBERHOME=/home/myname/amber22"
)]
struct Args {
    /// The ligand PDB file to minimize
    #[arg(long = "pdb-in", visible_alias = "in", value_name = "PATH")]
    pdb_in: PathBuf,

    /// Turn minimization on (1) or off (0). Defaults to 1
    #[arg(long)]
    imin: Option<i32>,

    /// The number of minimization steps. Defaults to 1000
    #[arg(long)]
    maxcyc: Option<usize>,

    /// If ncyc < maxcyc, sander uses steepest descent for ncyc steps before
    /// switching to conjugate gradient. Defaults to 500
    #[arg(long)]
    ncyc: Option<usize>,

    /// The interval in steps at which energies are printed. Defaults to 50
    #[arg(long)]
    ntpr: Option<usize>,

    /// The dielectric model. Defaults to 0, a constant dielectric
    #[arg(long)]
    igb: Option<i32>,

    /// The non-bonded cutoff. A larger cutoff introduces less error. Defaults
    /// to 999. Written to the sander input as a Fortran real, so 8.50 becomes
    /// 8.5 and 1e3 becomes 1000.
    #[arg(long)]
    cut: Option<f64>,

    /// Whether the system is periodic (1) or not (0). Defaults to 0
    #[arg(long)]
    ntb: Option<i32>,

    /// Show the output of the AmberTools programs
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Keep the intermediate run files after the run
    #[arg(short = 'i', long, default_value_t = false)]
    run_files: bool,

    /// Appended to the input's base name to name the output file. Defaults to
    /// empty, which replaces the input
    #[arg(short, long)]
    suffix: Option<String>,

    /// A TOML file with default values for any of the other options
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// The AmberTools installation to use. Overrides $AMBERHOME
    #[arg(long, value_name = "PATH")]
    amberhome: Option<PathBuf>,

    /// Print the resolved parameters as JSON and exit
    #[arg(long, default_value_t = false, hide = true)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("{args:?}");

    let raw = match &args.config {
        Some(path) => RawConfig::load(path).unwrap_or_else(|e| die!("{e}")),
        None => RawConfig::default(),
    };

    let Some(amberhome) = args
        .amberhome
        .clone()
        .or_else(|| raw.amberhome.clone())
        .or_else(|| std::env::var_os("AMBERHOME").map(PathBuf::from))
    else {
        die!(
            "$AMBERHOME environment variable is not set. \
	     Please refer to the help section"
        );
    };

    let defaults = Params::default();
    let params = Params {
        imin: args.imin.or(raw.imin).unwrap_or(defaults.imin),
        maxcyc: args.maxcyc.or(raw.maxcyc).unwrap_or(defaults.maxcyc),
        ncyc: args.ncyc.or(raw.ncyc).unwrap_or(defaults.ncyc),
        ntpr: args.ntpr.or(raw.ntpr).unwrap_or(defaults.ntpr),
        cut: args.cut.or(raw.cut).unwrap_or(defaults.cut),
        igb: args.igb.or(raw.igb).unwrap_or(defaults.igb),
        ntb: args.ntb.or(raw.ntb).unwrap_or(defaults.ntb),
        remove_run_files: !args.run_files
            && raw.remove_run_files.unwrap_or(defaults.remove_run_files),
        suffix: args.suffix.clone().or(raw.suffix.clone()).unwrap_or_default(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    let mut config = raw.config(amberhome).unwrap_or_else(|e| die!("{e}"));
    config.verbose |= args.verbose;
    debug!("{config:?}");

    if let Err(e) = input::validate(&args.pdb_in) {
        die!("{e}");
    }

    info!(
        "minimizing {} with AmberTools from {}",
        args.pdb_in.display(),
        config.amberhome.display()
    );
    let runner = Local::new(config.verbose);
    match emm::run(&args.pdb_in, &params, &config, &runner) {
        Ok(output) => {
            println!("minimized structure written to {}", output.display());
            Ok(())
        }
        Err(e) => die!("{e}"),
    }
}
