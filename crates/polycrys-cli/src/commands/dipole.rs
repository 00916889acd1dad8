use crate::cli::DipoleArgs;
use crate::error::{CliError, Result};
use polycrys::interactions::dipole_hz;
use tracing::info;

pub fn run(args: DipoleArgs) -> Result<()> {
    if args.nuclei.len() != 2 {
        return Err(CliError::Argument(format!(
            "expected exactly two nuclide labels, got {}",
            args.nuclei.len()
        )));
    }
    let (nuc1, nuc2) = (args.nuclei[0].as_str(), args.nuclei[1].as_str());

    let table = super::load_nuclide_table(args.table.as_deref())?;
    let coupling = dipole_hz(nuc1, nuc2, args.distance, &table)?;
    info!("Coupling computed for {}-{}.", nuc1, nuc2);

    println!("{}", format_coupling(nuc1, nuc2, args.distance, coupling));
    Ok(())
}

fn format_coupling(nuc1: &str, nuc2: &str, distance: f64, coupling_hz: f64) -> String {
    format!(
        "{}-{} at {} Å: {} Hz",
        nuc1, nuc2, distance, coupling_hz
    )
}
