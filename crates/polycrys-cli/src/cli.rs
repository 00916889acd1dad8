use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "polycrys CLI - Generates powder-averaging orientation sets and converts molecular geometries into dipolar spin-pair interaction tables for solid-state NMR simulations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a powder-averaging orientation set (ZCW, REPULSION or BCR).
    Powder(PowderArgs),
    /// Convert a molecular geometry into pairwise dipolar couplings and Euler angles.
    Couple(CoupleArgs),
    /// Compute a single dipolar coupling from two nuclides and a distance.
    Dipole(DipoleArgs),
}

/// Arguments for the `powder` subcommand.
#[derive(Args, Debug)]
pub struct PowderArgs {
    /// Orientation sampling scheme.
    #[arg(short, long, value_enum)]
    pub scheme: SchemeArg,

    /// Number of orientations (must match a tabulated set exactly for REPULSION).
    #[arg(short = 'n', long, value_name = "INT")]
    pub count: usize,

    /// ZCW angular range: 1 (full sphere), 0.5 (hemisphere) or 0.25 (quadrant).
    #[arg(long, value_name = "FLOAT", default_value_t = 1.0)]
    pub zcw_variant: f64,

    /// Directory holding the repangles_num/alpha/beta.txt REPULSION tables.
    #[arg(long, value_name = "DIR", required_if_eq("scheme", "repulsion"))]
    pub repulsion_dir: Option<PathBuf>,

    /// Path for the output CSV table; defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// The sampling schemes selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeArg {
    Zcw,
    Repulsion,
    Bcr,
}

/// Arguments for the `couple` subcommand.
#[derive(Args, Debug)]
pub struct CoupleArgs {
    /// Path to the input XYZ coordinate file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub geometry: PathBuf,

    /// Nuclide labels assigned to the atoms in file order (e.g. '1H,13C,15N').
    #[arg(short, long, required = true, value_name = "LIST", value_delimiter = ',')]
    pub nuclei: Vec<String>,

    /// Replacement nuclide table CSV (Name,Spin,GyrHz); defaults to the built-in table.
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Path for the output CSV table; defaults to stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `dipole` subcommand.
#[derive(Args, Debug)]
pub struct DipoleArgs {
    /// The two nuclide labels (e.g. '1H,13C').
    #[arg(short, long, required = true, value_name = "L1,L2", value_delimiter = ',')]
    pub nuclei: Vec<String>,

    /// Internuclear distance in Angstroms.
    #[arg(short, long, required = true, value_name = "FLOAT")]
    pub distance: f64,

    /// Replacement nuclide table CSV (Name,Spin,GyrHz); defaults to the built-in table.
    #[arg(short, long, value_name = "PATH")]
    pub table: Option<PathBuf>,
}
