use std::fmt;

/// The 13 fixed millennium bins, newest first, as they appear in the
/// Age_interval column.
pub const INTERVAL_LABELS: [&str; 13] = [
    "1001-2000 CE",
    "1-1000 CE",
    "1000-1 BCE",
    "2000-1001 BCE",
    "3000-2001 BCE",
    "4000-3001 BCE",
    "5000-4001 BCE",
    "6000-5001 BCE",
    "7000-6001 BCE",
    "8000-7001 BCE",
    "9000-8001 BCE",
    "10000-9001 BCE",
    "11000-10001 BCE",
];

/// Plot color per bin, matched by index with INTERVAL_LABELS.
const INTERVAL_COLORS: [&str; 13] = [
    "lightcoral",
    "brown",
    "red",
    "darkorange",
    "gold",
    "yellowgreen",
    "limegreen",
    "blue",
    "violet",
    "fuchsia",
    "darkorchid",
    "yellow",
    "cyan",
];

/// One of the 13 fixed 1000-year calendar-age buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeInterval(usize);

impl AgeInterval {
    pub fn from_label(label: &str) -> Option<Self> {
        INTERVAL_LABELS
            .iter()
            .position(|l| *l == label)
            .map(AgeInterval)
    }

    /// Bucket for an age counted in years before 2000 CE. Ages outside the
    /// covered 13 millennia have no bucket.
    pub fn from_years_before_2000(years: f64) -> Option<Self> {
        if !years.is_finite() || years < 0.0 {
            return None;
        }
        let index = (years / 1000.0).floor() as usize;
        (index < INTERVAL_LABELS.len()).then_some(AgeInterval(index))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn label(&self) -> &'static str {
        INTERVAL_LABELS[self.0]
    }

    pub fn color(&self) -> &'static str {
        INTERVAL_COLORS[self.0]
    }
}

impl fmt::Display for AgeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
