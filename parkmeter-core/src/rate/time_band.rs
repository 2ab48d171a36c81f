use serde::{Deserialize, Serialize};

/// enforcement windows with a posted rate. meters are unenforced
/// before 9:00 and from 22:00 on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// [9:00, 18:00)
    Morning,
    /// [18:00, 22:00)
    Evening,
}

impl TimeBand {
    pub fn from_hour(hour: u32) -> Option<TimeBand> {
        match hour {
            9..=17 => Some(TimeBand::Morning),
            18..=21 => Some(TimeBand::Evening),
            _ => None,
        }
    }

    pub fn window_label(&self) -> &'static str {
        match self {
            TimeBand::Morning => "9am-6pm",
            TimeBand::Evening => "6pm-10pm",
        }
    }
}

impl std::fmt::Display for TimeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeBand::Morning => write!(f, "morning"),
            TimeBand::Evening => write!(f, "evening"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeBand;

    #[test]
    fn test_band_edges() {
        assert_eq!(TimeBand::from_hour(8), None);
        assert_eq!(TimeBand::from_hour(9), Some(TimeBand::Morning));
        assert_eq!(TimeBand::from_hour(17), Some(TimeBand::Morning));
        assert_eq!(TimeBand::from_hour(18), Some(TimeBand::Evening));
        assert_eq!(TimeBand::from_hour(21), Some(TimeBand::Evening));
        assert_eq!(TimeBand::from_hour(22), None);
        assert_eq!(TimeBand::from_hour(0), None);
    }
}
