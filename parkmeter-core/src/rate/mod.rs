mod day_class;
mod price;
mod rate_resolver;
mod rate_slot;
mod reference_time;
mod schedule;
mod time_band;

pub use day_class::DayClass;
pub use price::{parse_price, parse_price_text, price_of, PriceTier};
pub use rate_resolver::{resolve_at, resolve_rate, Rate, NOT_APPLICABLE};
pub use rate_slot::RateSlot;
pub use reference_time::ReferenceTime;
pub use schedule::{rate_schedule, ScheduleEntry};
pub use time_band::TimeBand;
