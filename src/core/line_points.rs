use crate::core::{MonthRow, PlotArea, ValueScale, band};

/// One cumulative-series vertex at the center of its row's band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Projects each row's `cumulative` value to `(band center, y(cumulative))`.
#[must_use]
pub fn project_cumulative_points(
    rows: &[MonthRow],
    plot: PlotArea,
    scale: ValueScale,
    gap: f64,
) -> Vec<LinePoint> {
    let count = rows.len();
    rows.iter()
        .enumerate()
        .map(|(index, row)| LinePoint {
            index,
            x: band(index, count, plot.x0, plot.x1, gap).center(),
            y: scale.to_pixel(row.cumulative),
            value: row.cumulative,
        })
        .collect()
}
