use smallvec::SmallVec;

use crate::core::{Band, CategoryTotal, MonthRow, PlotArea, ValueScale, band};

/// One filled segment of a bar, in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    /// Category this segment stands for; `None` for a whole-total bar.
    pub category: Option<String>,
    pub value: f64,
    pub y: f64,
    pub height: f64,
    pub is_bottom: bool,
    pub is_top: bool,
}

impl BarSegment {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Segments of one row, bottom-up. Rows rarely carry more than a few categories.
pub type SegmentStack = SmallVec<[BarSegment; 4]>;

/// Bar geometry for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStack {
    pub index: usize,
    pub band: Band,
    pub segments: SegmentStack,
}

/// Pixel span between the values `from` and `to` (`from <= to`), as `(y, height)`.
///
/// The top edge never rises above `y_top` and never falls below the bottom edge,
/// so heights stay within the plot and are never negative.
fn span_between(scale: ValueScale, from: f64, to: f64) -> (f64, f64) {
    let bottom = scale.to_pixel(from).min(scale.y_bottom());
    let top = scale.to_pixel(to).max(scale.y_top()).min(bottom);
    (top, bottom - top)
}

/// Projects each row into a stack of its positive category values.
///
/// Segments follow the order of `categories` (descending global total), so the
/// largest category sits at the bottom of every bar.
#[must_use]
pub fn project_category_stacks(
    rows: &[MonthRow],
    categories: &[CategoryTotal],
    plot: PlotArea,
    scale: ValueScale,
    gap: f64,
) -> Vec<BarStack> {
    let count = rows.len();
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let present: SmallVec<[(&str, f64); 4]> = categories
                .iter()
                .map(|category| {
                    (
                        category.name.as_str(),
                        row.category_value(&category.name),
                    )
                })
                .filter(|(_, value)| *value > 0.0)
                .collect();

            let last = present.len().saturating_sub(1);
            let mut accumulated = 0.0;
            let segments = present
                .iter()
                .enumerate()
                .map(|(position, (name, value))| {
                    let (y, height) = span_between(scale, accumulated, accumulated + value);
                    accumulated += value;
                    BarSegment {
                        category: Some((*name).to_owned()),
                        value: *value,
                        y,
                        height,
                        is_bottom: position == 0,
                        is_top: position == last,
                    }
                })
                .collect();

            BarStack {
                index,
                band: band(index, count, plot.x0, plot.x1, gap),
                segments,
            }
        })
        .collect()
}

/// Projects each row into a single bar sized by its `total`.
#[must_use]
pub fn project_total_bars(
    rows: &[MonthRow],
    plot: PlotArea,
    scale: ValueScale,
    gap: f64,
) -> Vec<BarStack> {
    let count = rows.len();
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let (y, height) = span_between(scale, 0.0, row.total);
            let mut segments = SegmentStack::new();
            segments.push(BarSegment {
                category: None,
                value: row.total,
                y,
                height,
                is_bottom: true,
                is_top: true,
            });
            BarStack {
                index,
                band: band(index, count, plot.x0, plot.x1, gap),
                segments,
            }
        })
        .collect()
}
