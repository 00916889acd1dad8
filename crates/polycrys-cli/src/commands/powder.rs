use crate::cli::{PowderArgs, SchemeArg};
use crate::error::Result;
use polycrys::core::io::repulsion::RepulsionTables;
use polycrys::core::models::orientation::OrientationSet;
use polycrys::powder::{self, PowderScheme};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn run(args: PowderArgs) -> Result<()> {
    let scheme = resolve_scheme(&args);

    let tables = match &args.repulsion_dir {
        Some(dir) => Some(load_repulsion_tables(dir)?),
        None => None,
    };

    let set = powder::generate(scheme, tables.as_ref())?;

    let mut writer = super::csv_writer(args.output.as_deref())?;
    write_orientations(&set, &mut writer)?;

    if let Some(path) = &args.output {
        info!("Orientation set written to {:?}", path);
    }

    Ok(())
}

fn resolve_scheme(args: &PowderArgs) -> PowderScheme {
    match args.scheme {
        SchemeArg::Zcw => PowderScheme::Zcw {
            count: args.count,
            variant: args.zcw_variant,
        },
        SchemeArg::Repulsion => PowderScheme::Repulsion { count: args.count },
        SchemeArg::Bcr => PowderScheme::Bcr { count: args.count },
    }
}

fn load_repulsion_tables(dir: &Path) -> Result<RepulsionTables> {
    info!("Loading REPULSION tables from {:?}", dir);
    let tables = RepulsionTables::load(
        &dir.join("repangles_num.txt"),
        &dir.join("repangles_alpha.txt"),
        &dir.join("repangles_beta.txt"),
    )?;
    info!("Tables provide {} tabulated set(s).", tables.counts().len());
    Ok(tables)
}

/// Writes the set as a two-column CSV table. Angles keep full `f64`
/// precision; any rounding is left to the consumer.
fn write_orientations<W: Write>(
    set: &OrientationSet,
    writer: &mut csv::Writer<W>,
) -> Result<()> {
    writer.write_record(["alpha_deg", "beta_deg"])?;
    for (alpha, beta) in set.iter() {
        writer.write_record([alpha.to_string(), beta.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn powder_args(scheme: SchemeArg, count: usize) -> PowderArgs {
        PowderArgs {
            scheme,
            count,
            zcw_variant: 1.0,
            repulsion_dir: None,
            output: None,
        }
    }

    #[test]
    fn resolve_scheme_maps_every_cli_variant() {
        let zcw = powder_args(SchemeArg::Zcw, 20);
        assert_eq!(
            resolve_scheme(&zcw),
            PowderScheme::Zcw {
                count: 20,
                variant: 1.0
            }
        );

        let rep = powder_args(SchemeArg::Repulsion, 100);
        assert_eq!(resolve_scheme(&rep), PowderScheme::Repulsion { count: 100 });

        let bcr = powder_args(SchemeArg::Bcr, 64);
        assert_eq!(resolve_scheme(&bcr), PowderScheme::Bcr { count: 64 });
    }

    #[test]
    fn resolve_scheme_forwards_the_zcw_variant() {
        let mut args = powder_args(SchemeArg::Zcw, 50);
        args.zcw_variant = 0.25;
        assert_eq!(
            resolve_scheme(&args),
            PowderScheme::Zcw {
                count: 50,
                variant: 0.25
            }
        );
    }

    #[test]
    fn write_orientations_emits_header_and_full_precision_rows() {
        let set = OrientationSet::from_angles(vec![0.0, 123.0625], vec![90.0, 45.5]);
        let mut writer = csv::Writer::from_writer(vec![]);
        write_orientations(&set, &mut writer).unwrap();

        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "alpha_deg,beta_deg\n0,90\n123.0625,45.5\n");
    }

    #[test]
    fn run_writes_a_bcr_set_to_the_output_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("bcr.csv");
        let mut args = powder_args(SchemeArg::Bcr, 4);
        args.output = Some(out.clone());

        run(args).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "alpha_deg,beta_deg");
        assert!(lines[1].starts_with("45,"));
        assert!(lines[4].starts_with("315,"));
    }

    #[test]
    fn run_loads_repulsion_tables_from_the_named_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("repangles_num.txt"), "2\n").unwrap();
        fs::write(dir.path().join("repangles_alpha.txt"), "10.0\n-20.0\n").unwrap();
        fs::write(dir.path().join("repangles_beta.txt"), "-30.0\n40.0\n").unwrap();
        let out = dir.path().join("rep.csv");

        let args = PowderArgs {
            scheme: SchemeArg::Repulsion,
            count: 2,
            zcw_variant: 1.0,
            repulsion_dir: Some(dir.path().to_path_buf()),
            output: Some(out.clone()),
        };
        run(args).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text, "alpha_deg,beta_deg\n370,-30\n-20,400\n");
    }

    #[test]
    fn run_surfaces_missing_tables_as_an_error() {
        let dir = tempdir().unwrap();
        let args = PowderArgs {
            scheme: SchemeArg::Repulsion,
            count: 100,
            zcw_variant: 1.0,
            repulsion_dir: Some(dir.path().join("nowhere")),
            output: None,
        };
        assert!(run(args).is_err());
    }
}
