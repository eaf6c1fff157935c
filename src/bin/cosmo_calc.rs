extern crate clap;

use std::io;
use std::process;

use clap::{App, AppSettings, Arg, ArgMatches};
use log::debug;
use thiserror::Error;

use cosmo::{Cosmology, FlatLCDM, Flrw, LambdaCDM, WACDM, WCDM};

#[derive(Error, Debug)]
enum CliError {
    #[error("invalid value for --{flag}: '{value}'")]
    InvalidNumber { flag: String, value: String },
    #[error("H0 must be positive, got {0}")]
    NonPositiveHubble(f64),
    #[error("unknown model '{0}', expected one of flat, lambda, w, wa")]
    UnknownModel(String),
    #[error("no redshifts given")]
    NoRedshifts,
    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("cosmo-calc")
        .version("0.1.0")
        .about("Distances and ages of an FLRW universe at a few redshifts, written as CSV.")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(Arg::with_name("H0")
             .long("H0")
             .takes_value(true)
             .default_value("70")
             .help("Hubble constant at z=0 [km/s/Mpc]"))
        .arg(Arg::with_name("Omega0")
             .long("Omega0")
             .takes_value(true)
             .default_value("0.3")
             .help("Matter density at z=0"))
        .arg(Arg::with_name("Ol0")
             .long("Ol0")
             .takes_value(true)
             .default_value("0.7")
             .help("Dark energy density at z=0, ignored by the flat model"))
        .arg(Arg::with_name("w0")
             .long("w0")
             .takes_value(true)
             .default_value("-1")
             .help("Dark energy equation of state today"))
        .arg(Arg::with_name("wa")
             .long("wa")
             .takes_value(true)
             .default_value("0")
             .help("Change of the equation of state with 1 - a"))
        .arg(Arg::with_name("model")
             .long("model")
             .takes_value(true)
             .default_value("flat")
             .help("One of flat, lambda, w, wa"))
        .arg(Arg::with_name("z")
             .long("z")
             .takes_value(true)
             .default_value("0.5,1,2,3")
             .help("Comma separated redshifts"))
}

fn parse_number(flag: &str, value: &str) -> Result<f64, CliError> {
    value.trim().parse::<f64>().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

fn number_of(matches: &ArgMatches, flag: &str) -> Result<f64, CliError> {
    parse_number(flag, matches.value_of(flag).unwrap_or_default())
}

fn parse_redshifts(list: &str) -> Result<Vec<f64>, CliError> {
    let redshifts = list
        .split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| parse_number("z", item))
        .collect::<Result<Vec<f64>, CliError>>()?;
    if redshifts.is_empty() {
        return Err(CliError::NoRedshifts);
    }
    Ok(redshifts)
}

fn build_cosmology(matches: &ArgMatches) -> Result<Cosmology, CliError> {
    let h0 = number_of(matches, "H0")?;
    if h0 <= 0. || h0.is_nan() {
        return Err(CliError::NonPositiveHubble(h0));
    }
    let om0 = number_of(matches, "Omega0")?;
    let ol0 = number_of(matches, "Ol0")?;
    let w0 = number_of(matches, "w0")?;
    let wa = number_of(matches, "wa")?;

    match matches.value_of("model").unwrap_or("flat") {
        "flat" => Ok(FlatLCDM::new(h0, om0).into()),
        "lambda" => Ok(LambdaCDM::new(h0, om0, ol0).into()),
        "w" => Ok(WCDM::new(h0, om0, ol0, w0).into()),
        "wa" => Ok(WACDM::new(h0, om0, ol0, w0, wa).into()),
        other => Err(CliError::UnknownModel(other.to_string())),
    }
}

fn write_table<W: io::Write>(cos: &Cosmology, redshifts: &[f64], out: W) -> Result<(), CliError> {
    let comoving = cos.comoving_distances(redshifts);
    let luminosity = cos.luminosity_distances(redshifts);
    let moduli = cos.distance_moduli(redshifts);
    let ages = cos.ages(redshifts);
    let lookbacks = cos.lookback_times(redshifts);

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "z",
        "comoving_distance_mpc",
        "luminosity_distance_mpc",
        "distance_modulus_mag",
        "age_gyr",
        "lookback_time_gyr",
    ])?;
    for (i, z) in redshifts.iter().enumerate() {
        writer.write_record([
            z.to_string(),
            comoving[i].to_string(),
            luminosity[i].to_string(),
            moduli[i].to_string(),
            ages[i].to_string(),
            lookbacks[i].to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn run() -> Result<(), CliError> {
    let matches = app().get_matches();
    let cos = build_cosmology(&matches)?;
    let redshifts = parse_redshifts(matches.value_of("z").unwrap_or_default())?;
    debug!("distance strategy {:?}", cos.distance_strategy());
    debug!("time strategy {:?}", cos.time_strategy());

    eprintln!("{cos}");
    write_table(&cos, &redshifts, io::stdout())
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("cosmo-calc: {error}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches_from(args: &[&str]) -> ArgMatches<'static> {
        app().get_matches_from(args.iter().copied())
    }

    #[test]
    fn defaults_build_flat_lcdm() {
        let cos = build_cosmology(&matches_from(&["cosmo-calc"])).unwrap();
        assert_eq!(cos, Cosmology::FlatLCDM(FlatLCDM::new(70., 0.3)));
    }

    #[test]
    fn negative_equation_of_state_is_a_value() {
        let matches = matches_from(&["cosmo-calc", "--model", "wa", "--w0", "-0.9", "--wa", "0.2"]);
        let cos = build_cosmology(&matches).unwrap();
        assert_eq!(cos, Cosmology::WACDM(WACDM::new(70., 0.3, 0.7, -0.9, 0.2)));
    }

    #[test]
    fn rejects_bad_input() {
        let matches = matches_from(&["cosmo-calc", "--H0", "0"]);
        assert!(matches!(build_cosmology(&matches), Err(CliError::NonPositiveHubble(_))));
        let matches = matches_from(&["cosmo-calc", "--Omega0", "lots"]);
        assert!(matches!(build_cosmology(&matches), Err(CliError::InvalidNumber { .. })));
        let matches = matches_from(&["cosmo-calc", "--model", "steady-state"]);
        assert!(matches!(build_cosmology(&matches), Err(CliError::UnknownModel(_))));
        assert!(matches!(parse_redshifts(" , "), Err(CliError::NoRedshifts)));
    }

    #[test]
    fn redshift_list() {
        assert_eq!(parse_redshifts("0.5, 1,2 ,3").unwrap(), vec![0.5, 1., 2., 3.]);
    }

    #[test]
    fn table_has_header_and_one_row_per_redshift() {
        let cos = Cosmology::from(FlatLCDM::new(70., 0.3));
        let mut out = Vec::new();
        write_table(&cos, &[0.5, 1.], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("z,comoving_distance_mpc"));
        let modulus: f64 = lines[1].split(',').nth(3).unwrap().parse().unwrap();
        assert!((modulus - 42.26118542).abs() < 1e-5);
    }
}
