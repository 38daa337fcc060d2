use pullsar_core::{ComparisonChart, ComparisonSet, Level};

use crate::Pullsar;

impl Pullsar {
    /// Chart model for the visible entries of a comparison tray.
    ///
    /// Items already carry their daily points, so no connector call is made.
    #[must_use]
    pub fn compare(&self, set: &ComparisonSet, level: Level) -> ComparisonChart {
        set.chart(level)
    }
}
