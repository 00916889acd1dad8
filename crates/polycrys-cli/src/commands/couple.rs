use crate::cli::CoupleArgs;
use crate::error::{CliError, Result};
use polycrys::core::io::xyz::read_geometry_from_path;
use polycrys::core::models::interaction::PairInteraction;
use polycrys::interactions::pairwise_interactions;
use std::io::Write;
use tracing::info;

pub fn run(args: CoupleArgs) -> Result<()> {
    let table = super::load_nuclide_table(args.table.as_deref())?;

    info!("Loading molecular geometry from {:?}", &args.geometry);
    let geometry =
        read_geometry_from_path(&args.geometry).map_err(|e| CliError::FileParsing {
            path: args.geometry.clone(),
            source: e,
        })?;
    info!("Geometry holds {} atomic site(s).", geometry.len());

    let nuclei: Vec<&str> = args.nuclei.iter().map(String::as_str).collect();
    let records = pairwise_interactions(&geometry, &nuclei, &table)?;

    let mut writer = super::csv_writer(args.output.as_deref())?;
    write_records(&records, &mut writer)?;

    if let Some(path) = &args.output {
        info!("Interaction table written to {:?}", path);
    }

    Ok(())
}

fn write_records<W: Write>(
    records: &[PairInteraction],
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
