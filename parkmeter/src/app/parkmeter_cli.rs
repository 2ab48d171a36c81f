use std::io::Write;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use parkmeter_core::{
    model::MeterRecord,
    rate::{rate_schedule, ReferenceTime},
    state::{reduce, Action},
    view::{derive_view, search_area, unique_areas, ViewRow},
};
use serde::{Deserialize, Serialize};

use super::{write_rows, write_schedule, OutputFormat, ViewArgs};
use crate::{
    config::{DatasetSource, ParkmeterConfig},
    dataset::load_records,
    geocode::NominatimClient,
    ParkmeterError,
};

/// command line tool for browsing street-parking meter rates
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ParkmeterCliArguments {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// meter dataset as a JSON file path or http(s) URL. overrides the
    /// configuration file.
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: ParkmeterOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ParkmeterOperation {
    /// list meters after filtering and sorting
    View(ViewArgs),
    /// list the neighbourhoods present in the dataset
    Areas,
    /// find the first meter in a neighbourhood matching some text and show
    /// its rates
    Find {
        /// part of a neighbourhood name, e.g. "kits"
        query: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// show the weekly rate table of one meter
    Schedule {
        /// meter id
        #[arg(long)]
        id: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// look up coordinates for an address or place name
    Geocode {
        query: String,
        /// maximum number of candidates, overrides the configuration file
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl ParkmeterCliArguments {
    /// loads configuration, applies command line overrides and runs the
    /// selected operation.
    pub fn run(&self) -> Result<(), ParkmeterError> {
        let mut config = match &self.config {
            Some(path) => ParkmeterConfig::from_file(path)?,
            None => ParkmeterConfig::default(),
        };
        if let Some(dataset) = &self.dataset {
            config.dataset = DatasetSource::from(dataset.as_str());
        }
        self.op.run(&config)
    }
}

impl ParkmeterOperation {
    pub fn run(&self, config: &ParkmeterConfig) -> Result<(), ParkmeterError> {
        let now = current_time();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self {
            ParkmeterOperation::View(args) => {
                let records = load_records(&config.dataset, &config.bounds)?;
                run_view(&records, args, config, now, &mut out)
            }
            ParkmeterOperation::Areas => {
                let records = load_records(&config.dataset, &config.bounds)?;
                for area in unique_areas(&records) {
                    writeln!(out, "{area}").map_err(|e| ParkmeterError::Output(e.to_string()))?;
                }
                Ok(())
            }
            ParkmeterOperation::Find { query, format } => {
                let records = load_records(&config.dataset, &config.bounds)?;
                match search_area(&records, query) {
                    Some(record) => {
                        write_schedule(record, &rate_schedule(record, &now), *format, &mut out)
                    }
                    None => Err(ParkmeterError::InvalidUserInput(format!(
                        "no meters found in an area matching '{query}'"
                    ))),
                }
            }
            ParkmeterOperation::Schedule { id, format } => {
                let records = load_records(&config.dataset, &config.bounds)?;
                let record = find_by_id(&records, id)?;
                write_schedule(record, &rate_schedule(record, &now), *format, &mut out)
            }
            ParkmeterOperation::Geocode { query, limit } => {
                let mut geocoder_config = config.geocoder.clone();
                if let Some(limit) = limit {
                    geocoder_config.limit = *limit;
                }
                let client = NominatimClient::new(geocoder_config)?;
                for candidate in client.search(query)? {
                    writeln!(
                        out,
                        "{:.6},{:.6}\t{}",
                        candidate.lat, candidate.lon, candidate.display_name
                    )
                    .map_err(|e| ParkmeterError::Output(e.to_string()))?;
                }
                Ok(())
            }
        }
    }
}

/// derives and prints a view. a `--place` reference point is geocoded and
/// the first candidate is used.
pub fn run_view<W: Write>(
    records: &[MeterRecord],
    args: &ViewArgs,
    config: &ParkmeterConfig,
    now: ReferenceTime,
    out: &mut W,
) -> Result<(), ParkmeterError> {
    let mut state = args.build_state(config, now)?;
    if let Some(place) = &args.place {
        let client = NominatimClient::new(config.geocoder.clone())?;
        let action = match client.search(place)?.into_iter().next() {
            Some(candidate) => {
                log::info!("using '{}' as reference point", candidate.display_name);
                Action::PlaceSelected(candidate)
            }
            None => Action::AreaSearchMiss,
        };
        state = reduce(&state, action);
        if let Some(notification) = &state.notification {
            return Err(ParkmeterError::InvalidUserInput(notification.to_string()));
        }
    }
    let query = state.query(now);
    let view = derive_view(records, &query);
    let rows = view
        .into_iter()
        .take(args.limit.unwrap_or(usize::MAX))
        .map(|r| ViewRow::new(r, &query.filter_time, query.reference_point.as_ref()))
        .collect_vec();
    log::info!(
        "{} parking meters match at {}, sorted by {}",
        rows.len(),
        query.filter_time,
        query.sort
    );
    write_rows(&rows, args.format, out)
}

fn find_by_id<'a>(records: &'a [MeterRecord], id: &str) -> Result<&'a MeterRecord, ParkmeterError> {
    records
        .iter()
        .find(|r| r.id() == id)
        .ok_or_else(|| ParkmeterError::InvalidUserInput(format!("no meter with id '{id}'")))
}

/// the local wall clock as a rate lookup time.
fn current_time() -> ReferenceTime {
    ReferenceTime::from_datetime(&chrono::Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::{find_by_id, run_view, ParkmeterCliArguments};
    use crate::app::{OutputFormat, SortArg, ViewArgs};
    use crate::config::ParkmeterConfig;
    use crate::dataset::parse_records;
    use clap::Parser;
    use parkmeter_core::rate::ReferenceTime;

    const DATASET: &str = r#"[
        { "meterid": "a", "meterhead": "Twin", "r_mf_9a_6p": "$2.00", "creditcard": "Yes",
          "geo_local_area": "Downtown", "geo_point_2d": { "lat": 49.2827, "lon": -123.1207 } },
        { "meterid": "b", "meterhead": "Single", "r_mf_9a_6p": "$3.50", "creditcard": "No",
          "geo_local_area": "Kitsilano", "geo_point_2d": { "lat": 49.2680, "lon": -123.1680 } },
        { "meterid": "c", "meterhead": "Pay Station", "r_mf_9a_6p": null,
          "geo_local_area": "West End", "geo_point_2d": { "lat": 49.2850, "lon": -123.1350 } }
    ]"#;

    fn view_args() -> ViewArgs {
        ViewArgs {
            day: Some(2),
            hour: Some(11),
            max_price: Some(3.0),
            exclude_unknown: false,
            card_only: false,
            area: None,
            sort: SortArg::PriceAsc,
            lat: None,
            lon: None,
            place: None,
            limit: None,
            format: OutputFormat::Csv,
        }
    }

    #[test]
    fn test_run_view_csv() {
        let records = parse_records(DATASET).unwrap();
        let now = ReferenceTime::new(2, 11).unwrap();
        let mut out: Vec<u8> = vec![];
        run_view(&records, &view_args(), &ParkmeterConfig::default(), now, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let ids: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_run_view_distance_with_limit() {
        let records = parse_records(DATASET).unwrap();
        let now = ReferenceTime::new(2, 11).unwrap();
        let args = ViewArgs {
            max_price: None,
            sort: SortArg::Distance,
            lat: Some(49.2680),
            lon: Some(-123.1680),
            limit: Some(2),
            ..view_args()
        };
        let mut out: Vec<u8> = vec![];
        run_view(&records, &args, &ParkmeterConfig::default(), now, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let ids: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn test_find_by_id() {
        let records = parse_records(DATASET).unwrap();
        assert_eq!(find_by_id(&records, "b").unwrap().label(), "Single");
        assert!(find_by_id(&records, "zzz").is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let args = ParkmeterCliArguments::try_parse_from([
            "parkmeter",
            "--dataset",
            "meters.json",
            "view",
            "--max-price",
            "2.5",
            "--sort",
            "distance",
            "--lat",
            "49.26",
            "--lon",
            "-123.11",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.dataset.as_deref(), Some("meters.json"));
        match args.op {
            super::ParkmeterOperation::View(view) => {
                assert_eq!(view.max_price, Some(2.5));
                assert_eq!(view.lon, Some(-123.11));
                assert!(matches!(view.sort, SortArg::Distance));
                assert!(matches!(view.format, OutputFormat::Json));
            }
            _ => panic!("expected view operation"),
        }
    }

    #[test]
    fn test_cli_rejects_lat_without_lon() {
        let result =
            ParkmeterCliArguments::try_parse_from(["parkmeter", "view", "--lat", "49.26"]);
        assert!(result.is_err());
    }
}
