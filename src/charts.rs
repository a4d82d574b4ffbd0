//! Builds the dashboard charts with plotlars.
//!
//! Only compiled with the `plotting` feature. The daily trend is drawn with
//! plotly directly because it needs a range slider under the date axis.

use crate::dashboard::DashboardView;
use crate::types::dataset::{COUNT_COLUMN, HOUR_COLUMN, WEATHER_LABEL_COLUMN};
use crate::BikeShareError;
use log::{debug, info};
use plotlars::{LinePlot, Plot, ScatterPlot, Text};
use plotly::common::Mode;
use plotly::layout::{Axis, Layout, RangeSlider};
use plotly::{Plot as Figure, Scatter};
use std::fs;
use std::path::Path;

/// One rendered chart.
pub enum Chart {
    Scatter(ScatterPlot),
    Line(LinePlot),
    /// Date axis with a range slider.
    TimeSeries(Figure),
}

impl Chart {
    /// Opens the chart in the browser.
    pub fn show(&self) {
        match self {
            Chart::Scatter(plot) => plot.plot(),
            Chart::Line(plot) => plot.plot(),
            Chart::TimeSeries(figure) => figure.show(),
        }
    }

    /// Standalone HTML page for the chart.
    pub fn to_html(&self) -> String {
        match self {
            Chart::Scatter(plot) => plot.to_html(),
            Chart::Line(plot) => plot.to_html(),
            Chart::TimeSeries(figure) => figure.to_html(),
        }
    }

    pub fn write_html(&self, path: &Path) -> Result<(), BikeShareError> {
        fs::write(path, self.to_html()).map_err(|e| BikeShareError::ChartWrite(path.to_path_buf(), e))
    }
}

/// The five dashboard charts, keyed by a file-friendly name.
///
/// Every chart is present even when its source frame is empty; it then
/// renders with axes and no points.
pub struct DashboardCharts {
    pub charts: Vec<(&'static str, Chart)>,
}

impl DashboardCharts {
    pub fn from_view(view: &DashboardView) -> Self {
        let labels = view.language.labels();
        let mut charts = Vec::with_capacity(5);

        if view.filtered_days.height() == 0 {
            debug!("Weather scatter charts for {} have no points", view.selection);
        }
        let scatters = [
            ("temperature", "temp", labels.temperature_title, labels.temperature_axis),
            ("humidity", "hum", labels.humidity_title, labels.humidity_axis),
            ("wind", "windspeed", labels.wind_title, labels.wind_axis),
        ];
        for (name, x, title, x_title) in scatters {
            let plot = ScatterPlot::builder()
                .data(&view.filtered_days)
                .x(x)
                .y(COUNT_COLUMN)
                .group(WEATHER_LABEL_COLUMN)
                .opacity(0.7)
                .size(8)
                .plot_title(Text::from(title).font("Arial").size(18))
                .x_title(x_title)
                .y_title(labels.count_axis)
                .legend_title(labels.weather_legend)
                .build();
            charts.push((name, Chart::Scatter(plot)));
        }

        let plot = LinePlot::builder()
            .data(&view.hourly_frame)
            .x(HOUR_COLUMN)
            .y(COUNT_COLUMN)
            .plot_title(Text::from(labels.hourly_section).font("Arial").size(18))
            .x_title(labels.hour_axis)
            .y_title(labels.count_axis)
            .build();
        charts.push(("hourly_trend", Chart::Line(plot)));

        let (dates, counts): (Vec<String>, Vec<i64>) = view
            .daily_totals
            .iter()
            .map(|entry| (entry.key.to_string(), entry.total))
            .unzip();
        let trace = Scatter::new(dates, counts)
            .mode(Mode::Lines)
            .name(labels.count_axis);
        let layout = Layout::new()
            .title(labels.daily_title)
            .x_axis(
                Axis::new()
                    .title(labels.date_axis)
                    .range_slider(RangeSlider::new().visible(true)),
            )
            .y_axis(Axis::new().title(labels.count_axis));
        let mut figure = Figure::new();
        figure.add_trace(trace);
        figure.set_layout(layout);
        charts.push(("daily_trend", Chart::TimeSeries(figure)));

        Self { charts }
    }

    /// Opens every chart in the browser.
    pub fn show(&self) {
        for (_, chart) in &self.charts {
            chart.show();
        }
    }

    /// Writes one `<name>.html` file per chart into `dir`, creating it if needed.
    pub fn write_html(&self, dir: &Path) -> Result<(), BikeShareError> {
        fs::create_dir_all(dir).map_err(|e| BikeShareError::ChartWrite(dir.to_path_buf(), e))?;
        for (name, chart) in &self.charts {
            let path = dir.join(format!("{name}.html"));
            info!("Writing {} chart to {:?}", name, path);
            chart.write_html(&path)?;
        }
        Ok(())
    }
}
