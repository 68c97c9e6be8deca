//! Chart generation backed by plotters.
//!
//! Charts are built in two steps: the builders derive a data
//! specification from a [`Table`] (testable without a drawing
//! backend), and [`Chart::save`] renders the specification to a PNG
//! file.

use std::path::Path;

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    error::{Error, Result},
    stats,
    table::Table,
};

/// Number of histogram bins per panel.
pub const HISTOGRAM_BINS: usize = 30;

/// Maximum number of histogram panels per grid row.
pub const PANELS_PER_ROW: usize = 3;

/// Font and background configuration applied at render time.
///
/// Passed by value to the chart builders; there is no global style
/// state.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Font family for captions and labels.
    pub font_family: String,
    /// Caption font size in points.
    pub font_size: u32,
    /// Background fill color.
    pub background: RGBColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 30,
            background: WHITE,
        }
    }
}

impl ChartStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Sets the caption font size.
    #[must_use]
    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, background: RGBColor) -> Self {
        self.background = background;
        self
    }
}

/// Output options for [`Chart::save`].
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Dots per size unit; pixel size = unit size x resolution.
    pub resolution: u32,
    /// Outer margin in pixels.
    pub padding: u32,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            resolution: 300,
            padding: 10,
        }
    }
}

impl SaveOptions {
    /// Creates new save options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resolution in dots per size unit.
    #[must_use]
    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the outer margin in pixels.
    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }
}

/// One histogram bin.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub start: f64,
    /// Exclusive upper edge (inclusive for the last bin).
    pub end: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Histogram data for one column.
#[derive(Debug, Clone)]
pub struct HistogramPanel {
    /// Column name, used as the panel caption.
    pub column: String,
    /// The computed bins, empty when the column has no values.
    pub bins: Vec<HistogramBin>,
}

/// Correlation heatmap data.
#[derive(Debug, Clone)]
pub struct HeatmapSpec {
    /// Column names along both axes.
    pub columns: Vec<String>,
    /// Row-major correlation coefficients.
    pub values: Vec<Vec<f64>>,
}

/// Histogram grid data.
#[derive(Debug, Clone)]
pub struct HistogramsSpec {
    /// One panel per column; trailing grid cells are hidden.
    pub panels: Vec<HistogramPanel>,
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
}

/// Grouped box values for one value column.
#[derive(Debug, Clone)]
pub struct BoxplotPanel {
    /// Value column name, used as the panel caption.
    pub column: String,
    /// Non-missing values per group label, sorted by label.
    pub groups: Vec<(String, Vec<f64>)>,
}

/// Grouped boxplot data.
#[derive(Debug, Clone)]
pub struct BoxplotsSpec {
    /// The column the boxes are grouped by.
    pub group_column: String,
    /// One panel per value column.
    pub panels: Vec<BoxplotPanel>,
}

/// The chart variants the visualizer can render.
#[derive(Debug, Clone)]
pub enum ChartKind {
    /// Annotated correlation heatmap.
    Heatmap(HeatmapSpec),
    /// Grid of per-column histograms.
    Histograms(HistogramsSpec),
    /// Per-group whisker boxes, one panel per value column.
    Boxplots(BoxplotsSpec),
}

/// A chart specification ready to be rendered.
#[derive(Debug, Clone)]
pub struct Chart {
    /// Caption drawn above the chart.
    pub title: String,
    /// Size in abstract units; multiplied by the save resolution.
    pub size: (u32, u32),
    /// Render style.
    pub style: ChartStyle,
    /// The chart data.
    pub kind: ChartKind,
}

/// Computes the histogram grid shape: up to [`PANELS_PER_ROW`] panels
/// per row.
pub fn grid_layout(panels: usize) -> (usize, usize) {
    if panels == 0 {
        return (0, 0);
    }
    let cols = panels.min(PANELS_PER_ROW);
    let rows = panels.div_ceil(cols);
    (rows, cols)
}

impl Chart {
    /// Builds an annotated correlation heatmap over the numeric
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientColumns`] when the table has no
    /// numeric columns.
    pub fn correlation_heatmap(table: &Table, size: (u32, u32)) -> Result<Self> {
        let matrix = stats::correlation_matrix(table)?;
        Ok(Self {
            title: "Correlation Matrix".to_string(),
            size,
            style: ChartStyle::default(),
            kind: ChartKind::Heatmap(HeatmapSpec {
                columns: matrix.columns,
                values: matrix.values,
            }),
        })
    }

    /// Builds a histogram grid for the given columns (every numeric
    /// column when `columns` is `None`).
    ///
    /// # Errors
    ///
    /// Returns an error if a named column does not exist or is not
    /// numeric, or no columns remain.
    pub fn histograms(table: &Table, columns: Option<&[&str]>, size: (u32, u32)) -> Result<Self> {
        let names: Vec<String> = match columns {
            Some(names) => names.iter().map(|s| (*s).to_string()).collect(),
            None => table.numeric_column_names(),
        };
        if names.is_empty() {
            return Err(Error::insufficient_columns(1, 0));
        }

        let mut panels = Vec::with_capacity(names.len());
        for name in &names {
            let values: Vec<f64> = table.numeric_column(name)?.into_iter().flatten().collect();
            panels.push(HistogramPanel {
                column: name.clone(),
                bins: histogram_bins(&values, HISTOGRAM_BINS),
            });
        }

        let (rows, cols) = grid_layout(panels.len());
        Ok(Self {
            title: "Distributions".to_string(),
            size,
            style: ChartStyle::default(),
            kind: ChartKind::Histograms(HistogramsSpec { panels, rows, cols }),
        })
    }

    /// Builds grouped boxplots: one panel per value column, one box
    /// per distinct group label.
    ///
    /// # Errors
    ///
    /// Returns an error if the group column or a value column does not
    /// exist, a value column is not numeric, or `value_columns` is
    /// empty.
    pub fn grouped_boxplots(
        table: &Table,
        value_columns: &[&str],
        group_column: &str,
    ) -> Result<Self> {
        if value_columns.is_empty() {
            return Err(Error::insufficient_columns(1, 0));
        }

        let labels = table.string_column(group_column)?;

        let mut panels = Vec::with_capacity(value_columns.len());
        for name in value_columns {
            let values = table.numeric_column(name)?;
            let mut by_group: std::collections::BTreeMap<String, Vec<f64>> =
                std::collections::BTreeMap::new();
            for (label, value) in labels.iter().zip(values.iter()) {
                if let (Some(label), Some(value)) = (label, value) {
                    by_group.entry(label.clone()).or_default().push(*value);
                }
            }
            panels.push(BoxplotPanel {
                column: (*name).to_string(),
                groups: by_group.into_iter().collect(),
            });
        }

        #[allow(clippy::cast_possible_truncation)]
        let width = 4 * value_columns.len() as u32;
        Ok(Self {
            title: format!("Distribution by {group_column}"),
            size: (width, 4),
            style: ChartStyle::default(),
            kind: ChartKind::Boxplots(BoxplotsSpec {
                group_column: group_column.to_string(),
                panels,
            }),
        })
    }

    /// Replaces the render style.
    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Renders the chart to a PNG file and prints a confirmation line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the parent directory does not exist,
    /// or a chart error if the backend fails.
    pub fn save(&self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::io(
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "parent directory does not exist",
                    ),
                    path,
                ));
            }
        }

        let pixels = (self.size.0 * options.resolution, self.size.1 * options.resolution);

        match &self.kind {
            ChartKind::Heatmap(spec) => self.render_heatmap(spec, path, pixels, options)?,
            ChartKind::Histograms(spec) => self.render_histograms(spec, path, pixels, options)?,
            ChartKind::Boxplots(spec) => self.render_boxplots(spec, path, pixels, options)?,
        }

        println!("Chart saved: {}", path.display());
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_heatmap(
        &self,
        spec: &HeatmapSpec,
        path: &Path,
        pixels: (u32, u32),
        options: &SaveOptions,
    ) -> Result<()> {
        let root = BitMapBackend::new(path, pixels).into_drawing_area();
        root.fill(&self.style.background)
            .map_err(|e| Error::chart(e.to_string()))?;

        let n = spec.columns.len();
        let mut chart = ChartBuilder::on(&root)
            .caption(
                &self.title,
                (self.style.font_family.as_str(), self.style.font_size),
            )
            .margin(options.padding)
            .x_label_area_size(60)
            .y_label_area_size(120)
            .build_cartesian_2d(0f64..n as f64, 0f64..n as f64)
            .map_err(|e| Error::chart(e.to_string()))?;

        let columns = spec.columns.clone();
        let column_label = move |v: &f64| {
            let idx = v.round();
            if (v - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            columns.get(idx as usize).cloned().unwrap_or_default()
        };
        // Row 0 is drawn at the top, so the y labels run backwards.
        let y_columns = spec.columns.clone();
        let row_label = move |v: &f64| {
            let idx = (y_columns.len() as f64 - 1.0 - v).round();
            if (y_columns.len() as f64 - 1.0 - v - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            y_columns.get(idx as usize).cloned().unwrap_or_default()
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(n + 1)
            .y_labels(n + 1)
            .x_label_formatter(&column_label)
            .y_label_formatter(&row_label)
            .draw()
            .map_err(|e| Error::chart(e.to_string()))?;

        let annotation_style = TextStyle::from((self.style.font_family.as_str(), 16).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        for (row, row_values) in spec.values.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                let x = col as f64;
                let y = (n - row - 1) as f64;
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x, y), (x + 1.0, y + 1.0)],
                        diverging_color(value).filled(),
                    )))
                    .map_err(|e| Error::chart(e.to_string()))?;
                // Thin white cell borders
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x, y), (x + 1.0, y + 1.0)],
                        ShapeStyle::from(&WHITE).stroke_width(1),
                    )))
                    .map_err(|e| Error::chart(e.to_string()))?;

                let text = if value.is_nan() {
                    "NaN".to_string()
                } else {
                    format!("{:.2}", value)
                };
                chart
                    .draw_series(std::iter::once(Text::new(
                        text,
                        (x + 0.5, y + 0.5),
                        annotation_style.clone(),
                    )))
                    .map_err(|e| Error::chart(e.to_string()))?;
            }
        }

        root.present().map_err(|e| Error::chart(e.to_string()))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn render_histograms(
        &self,
        spec: &HistogramsSpec,
        path: &Path,
        pixels: (u32, u32),
        options: &SaveOptions,
    ) -> Result<()> {
        let root = BitMapBackend::new(path, pixels).into_drawing_area();
        root.fill(&self.style.background)
            .map_err(|e| Error::chart(e.to_string()))?;
        let root = root.margin(options.padding, options.padding, options.padding, options.padding);

        let areas = root.split_evenly((spec.rows, spec.cols));

        // Trailing cells beyond the panel count stay blank.
        for (panel, area) in spec.panels.iter().zip(areas.iter()) {
            if panel.bins.is_empty() {
                continue;
            }

            let x_min = panel.bins.first().map_or(0.0, |b| b.start);
            let x_max = panel.bins.last().map_or(1.0, |b| b.end);
            let y_max = panel.bins.iter().map(|b| b.count).max().unwrap_or(1).max(1);

            let mut chart = ChartBuilder::on(area)
                .caption(
                    &panel.column,
                    (self.style.font_family.as_str(), self.style.font_size * 2 / 3),
                )
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(x_min..x_max, 0f64..(y_max as f64 * 1.05))
                .map_err(|e| Error::chart(e.to_string()))?;

            chart
                .configure_mesh()
                .y_desc("Frequency")
                .draw()
                .map_err(|e| Error::chart(e.to_string()))?;

            chart
                .draw_series(panel.bins.iter().filter(|b| b.count > 0).map(|b| {
                    Rectangle::new(
                        [(b.start, 0.0), (b.end, b.count as f64)],
                        BLUE.mix(0.7).filled(),
                    )
                }))
                .map_err(|e| Error::chart(e.to_string()))?;
        }

        root.present().map_err(|e| Error::chart(e.to_string()))
    }

    #[allow(clippy::cast_precision_loss)]
    fn render_boxplots(
        &self,
        spec: &BoxplotsSpec,
        path: &Path,
        pixels: (u32, u32),
        options: &SaveOptions,
    ) -> Result<()> {
        let root = BitMapBackend::new(path, pixels).into_drawing_area();
        root.fill(&self.style.background)
            .map_err(|e| Error::chart(e.to_string()))?;
        let root = root.margin(options.padding, options.padding, options.padding, options.padding);

        let areas = root.split_evenly((1, spec.panels.len().max(1)));

        for (panel, area) in spec.panels.iter().zip(areas.iter()) {
            let labels: Vec<&str> = panel.groups.iter().map(|(label, _)| label.as_str()).collect();
            let all_values: Vec<f64> = panel
                .groups
                .iter()
                .flat_map(|(_, values)| values.iter().copied())
                .collect();
            if labels.is_empty() || all_values.is_empty() {
                continue;
            }

            // Boxplot elements are f32-valued.
            #[allow(clippy::cast_possible_truncation)]
            let y_min = all_values.iter().copied().fold(f64::INFINITY, f64::min) as f32;
            #[allow(clippy::cast_possible_truncation)]
            let y_max = all_values.iter().copied().fold(f64::NEG_INFINITY, f64::max) as f32;
            let pad = ((y_max - y_min) * 0.05).max(0.5);

            let mut chart = ChartBuilder::on(area)
                .caption(
                    &panel.column,
                    (self.style.font_family.as_str(), self.style.font_size * 2 / 3),
                )
                .margin(10)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(labels[..].into_segmented(), (y_min - pad)..(y_max + pad))
                .map_err(|e| Error::chart(e.to_string()))?;

            chart
                .configure_mesh()
                .x_desc(spec.group_column.as_str())
                .draw()
                .map_err(|e| Error::chart(e.to_string()))?;

            for (idx, (_, values)) in panel.groups.iter().enumerate() {
                if values.is_empty() {
                    continue;
                }
                let quartiles = Quartiles::new(values);
                chart
                    .draw_series(std::iter::once(
                        Boxplot::new_vertical(SegmentValue::CenterOf(&labels[idx]), &quartiles)
                            .style(&BLUE),
                    ))
                    .map_err(|e| Error::chart(e.to_string()))?;
            }
        }

        root.present().map_err(|e| Error::chart(e.to_string()))
    }
}

/// Maps a correlation coefficient onto a diverging blue-white-red
/// scale centered at zero. NaN renders grey.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn diverging_color(value: f64) -> RGBColor {
    if value.is_nan() {
        return RGBColor(200, 200, 200);
    }
    let t = value.clamp(-1.0, 1.0);
    if t >= 0.0 {
        let channel = (255.0 * (1.0 - t)) as u8;
        RGBColor(255, channel, channel)
    } else {
        let channel = (255.0 * (1.0 + t)) as u8;
        RGBColor(channel, channel, 255)
    }
}

/// Computes equal-width histogram bins over the values.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn histogram_bins(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::sample;

    use super::*;

    fn sample_table() -> Table {
        sample::generate(200, 42)
            .ok()
            .unwrap_or_else(|| panic!("Should generate"))
    }

    #[test]
    fn test_grid_layout() {
        assert_eq!(grid_layout(0), (0, 0));
        assert_eq!(grid_layout(1), (1, 1));
        assert_eq!(grid_layout(2), (1, 2));
        assert_eq!(grid_layout(3), (1, 3));
        assert_eq!(grid_layout(4), (2, 3));
        assert_eq!(grid_layout(6), (2, 3));
        assert_eq!(grid_layout(7), (3, 3));
    }

    #[test]
    fn test_histogram_bins_basic() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let bins = histogram_bins(&values, 10);

        assert_eq!(bins.len(), 10);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 100);
        assert!((bins[0].start - 0.0).abs() < 1e-9);
        assert!((bins[9].end - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_bins_constant_values() {
        let values = vec![5.0; 20];
        let bins = histogram_bins(&values, 30);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 20);
    }

    #[test]
    fn test_histogram_bins_empty() {
        assert!(histogram_bins(&[], 30).is_empty());
    }

    #[test]
    fn test_heatmap_spec() {
        let table = sample_table();
        let chart = Chart::correlation_heatmap(&table, (10, 8))
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        assert_eq!(chart.size, (10, 8));
        match &chart.kind {
            ChartKind::Heatmap(spec) => {
                assert_eq!(spec.columns.len(), 4);
                assert_eq!(spec.values.len(), 4);
            }
            _ => panic!("Expected heatmap"),
        }
    }

    #[test]
    fn test_heatmap_requires_numeric_columns() {
        use std::sync::Arc;

        use arrow::{
            array::{RecordBatch, StringArray},
            datatypes::{DataType, Field, Schema},
        };

        let schema = Arc::new(Schema::new(vec![Field::new("s", DataType::Utf8, false)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(StringArray::from(vec!["a", "b"]))],
        )
        .ok()
        .unwrap_or_else(|| panic!("Should create batch"));
        let table = Table::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create table"));

        let result = Chart::correlation_heatmap(&table, (10, 8));
        assert!(matches!(result, Err(Error::InsufficientColumns { .. })));
    }

    #[test]
    fn test_histograms_default_columns() {
        let table = sample_table();
        let chart = Chart::histograms(&table, None, (12, 8))
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        match &chart.kind {
            ChartKind::Histograms(spec) => {
                assert_eq!(spec.panels.len(), 4);
                assert_eq!((spec.rows, spec.cols), (2, 3));
                for panel in &spec.panels {
                    assert_eq!(panel.bins.len(), HISTOGRAM_BINS);
                }
            }
            _ => panic!("Expected histograms"),
        }
    }

    #[test]
    fn test_histograms_selected_columns() {
        let table = sample_table();
        let chart = Chart::histograms(&table, Some(&["age", "income"]), (12, 4))
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        match &chart.kind {
            ChartKind::Histograms(spec) => {
                assert_eq!(spec.panels.len(), 2);
                assert_eq!((spec.rows, spec.cols), (1, 2));
            }
            _ => panic!("Expected histograms"),
        }
    }

    #[test]
    fn test_histograms_unknown_column() {
        let table = sample_table();
        let result = Chart::histograms(&table, Some(&["salary"]), (12, 4));
        assert!(matches!(result, Err(Error::ColumnNotFound { .. })));
    }

    #[test]
    fn test_boxplots_spec() {
        let table = sample_table();
        let chart = Chart::grouped_boxplots(&table, &["income", "satisfaction"], "department")
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        match &chart.kind {
            ChartKind::Boxplots(spec) => {
                assert_eq!(spec.group_column, "department");
                assert_eq!(spec.panels.len(), 2);
                let labels: Vec<&str> = spec.panels[0]
                    .groups
                    .iter()
                    .map(|(label, _)| label.as_str())
                    .collect();
                assert_eq!(labels, vec!["Engineering", "HR", "Planning", "Sales"]);
            }
            _ => panic!("Expected boxplots"),
        }
    }

    #[test]
    fn test_save_missing_parent_directory() {
        let table = sample_table();
        let chart = Chart::correlation_heatmap(&table, (4, 4))
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        let result = chart.save(
            "/nonexistent-dir/heatmap.png",
            &SaveOptions::new().with_resolution(40),
        );
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_save_heatmap() {
        let table = sample_table();
        let chart = Chart::correlation_heatmap(&table, (6, 5))
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("heatmap.png");

        chart
            .save(&path, &SaveOptions::new().with_resolution(60))
            .ok()
            .unwrap_or_else(|| panic!("Should save"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_histograms() {
        let table = sample_table();
        let chart = Chart::histograms(&table, None, (9, 6))
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("histograms.png");

        chart
            .save(&path, &SaveOptions::new().with_resolution(60))
            .ok()
            .unwrap_or_else(|| panic!("Should save"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_boxplots() {
        let table = sample_table();
        let chart = Chart::grouped_boxplots(&table, &["income"], "department")
            .ok()
            .unwrap_or_else(|| panic!("Should build"));

        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("boxplots.png");

        chart
            .save(&path, &SaveOptions::new().with_resolution(60))
            .ok()
            .unwrap_or_else(|| panic!("Should save"));
        assert!(path.exists());
    }

    #[test]
    fn test_diverging_color() {
        assert_eq!(diverging_color(1.0), RGBColor(255, 0, 0));
        assert_eq!(diverging_color(-1.0), RGBColor(0, 0, 255));
        assert_eq!(diverging_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(diverging_color(f64::NAN), RGBColor(200, 200, 200));
    }

    #[test]
    fn test_chart_style_builder() {
        let style = ChartStyle::new()
            .with_font_family("serif")
            .with_font_size(24)
            .with_background(RGBColor(240, 240, 240));

        assert_eq!(style.font_family, "serif");
        assert_eq!(style.font_size, 24);
        assert_eq!(style.background, RGBColor(240, 240, 240));
    }

    #[test]
    fn test_save_options_builder() {
        let options = SaveOptions::new().with_resolution(150).with_padding(20);
        assert_eq!(options.resolution, 150);
        assert_eq!(options.padding, 20);
    }
}
