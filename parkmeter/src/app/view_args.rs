use clap::Args;
use parkmeter_core::{
    model::GeoPoint,
    rate::ReferenceTime,
    state::{reduce, Action, AppState},
    view::UnknownPricePolicy,
};
use serde::{Deserialize, Serialize};

use super::{OutputFormat, SortArg};
use crate::{config::ParkmeterConfig, ParkmeterError};

/// filter, sort and output options for the `view` operation.
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct ViewArgs {
    /// day of week used for price filtering, 0 = Sunday .. 6 = Saturday.
    /// defaults to today.
    #[arg(long)]
    pub day: Option<u32>,
    /// hour of day (0-23) used for price filtering. defaults to the current hour.
    #[arg(long)]
    pub hour: Option<u32>,
    /// keep meters whose rate at the selected day/hour is at most this many
    /// dollars. a value at or above the configured slider maximum disables
    /// the filter.
    #[arg(long)]
    pub max_price: Option<f64>,
    /// drop meters with no parsable rate when a price limit is set,
    /// instead of treating them as free
    #[arg(long)]
    pub exclude_unknown: bool,
    /// keep only meters accepting credit cards
    #[arg(long)]
    pub card_only: bool,
    /// keep only meters in this neighbourhood
    #[arg(long)]
    pub area: Option<String>,
    #[arg(short, long, value_enum, default_value_t = SortArg::PriceAsc)]
    pub sort: SortArg,
    /// latitude of the reference point for distance sorting
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// longitude of the reference point for distance sorting
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// address or place name to geocode as the reference point
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub place: Option<String>,
    /// print at most this many meters
    #[arg(short, long)]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ViewArgs {
    /// the state transitions described by these arguments, in application
    /// order. place search is resolved separately since it needs the network.
    /// out-of-range `--lat/--lon` values are rejected here.
    pub fn actions(&self, config: &ParkmeterConfig) -> Result<Vec<Action>, ParkmeterError> {
        let mut actions = vec![];
        if let Some(day) = self.day {
            actions.push(Action::SetDay(day));
        }
        if let Some(hour) = self.hour {
            actions.push(Action::SetHour(hour));
        }
        if let Some(max_price) = self.max_price {
            actions.push(Action::SetPriceSlider(max_price));
        }
        let unknown_price = if self.exclude_unknown {
            UnknownPricePolicy::Exclude
        } else {
            config.unknown_price
        };
        actions.push(Action::SetUnknownPrice(unknown_price));
        actions.push(Action::SetCardOnly(self.card_only));
        actions.push(Action::SetArea(self.area.clone()));
        actions.push(Action::SetSort(self.sort.into()));
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            actions.push(Action::LocationResolved(GeoPoint::try_new(lat, lon)?));
        }
        Ok(actions)
    }

    /// folds the argument actions over the initial state. any notification
    /// raised along the way is reported as invalid input.
    pub fn build_state(
        &self,
        config: &ParkmeterConfig,
        now: ReferenceTime,
    ) -> Result<AppState, ParkmeterError> {
        let initial = AppState::new(now).with_slider_max(config.slider_max);
        let mut state = initial;
        for action in self.actions(config)? {
            state = reduce(&state, action);
            if let Some(notification) = &state.notification {
                return Err(ParkmeterError::InvalidUserInput(notification.to_string()));
            }
        }
        Ok(state)
    }
}
