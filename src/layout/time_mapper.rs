use crate::utils::time::{DayTime, military_time};

/// Converts times of day into vertical offsets on the grid.
///
/// Offsets are measured from the document's end time, so y = 0 is the grid
/// edge at `end` and later times map to smaller values.
#[derive(Debug, Clone, Copy)]
pub struct TimeMapper {
    start: DayTime,
    end: DayTime,
    row_height: i32,
    granularity: u32,
    inner_rows: u32,
}

impl TimeMapper {
    pub fn new(
        start: DayTime,
        end: DayTime,
        row_height: i32,
        granularity_minutes: u32,
        inner_rows: u32,
    ) -> Self {
        Self {
            start,
            end,
            row_height,
            granularity: granularity_minutes,
            inner_rows,
        }
    }

    /// `minutes * row_height / granularity`, truncated.
    pub fn minutes_to_px(&self, minutes: i64) -> i32 {
        (minutes * self.row_height as i64 / self.granularity as i64) as i32
    }

    pub fn to_y(&self, t: DayTime) -> i32 {
        self.minutes_to_px(t.minutes_until(self.end))
    }

    pub fn span_to_height(&self, minutes: i64) -> i32 {
        self.minutes_to_px(minutes)
    }

    /// One `HHMM` label per full hour, latest hour first at y = 0.
    pub fn hour_labels(&self) -> Vec<(String, i32)> {
        let step = self.row_height * self.inner_rows as i32;
        (self.start.hour()..=self.end.hour())
            .rev()
            .enumerate()
            .map(|(i, h)| (military_time(h, 0), i as i32 * step))
            .collect()
    }
}
