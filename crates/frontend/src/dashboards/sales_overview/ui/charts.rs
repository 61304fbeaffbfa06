//! SVG chart components for the sales dashboard.
//!
//! Charts are plain `<svg>` markup computed from already-aggregated rows;
//! there is no client-side charting runtime. Every chart receives its data
//! in final display order and renders it verbatim.

use chrono::Datelike;
use contracts::dashboards::sales_overview::dto::{MonthRow, StateRow};
use leptos::prelude::*;

/// Year series palette, indexed by series position.
const SERIES_COLORS: [&str; 4] = ["#2563eb", "#d97706", "#059669", "#dc2626"];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Vertical bar chart with a per-bar value label.
#[component]
pub fn BarChart(
    /// (label, value, formatted value) per bar, already in display order
    bars: Vec<(String, f64, String)>,
    #[prop(into)] title: String,
) -> impl IntoView {
    const WIDTH: f64 = 480.0;
    const MARGIN: f64 = 16.0;
    const PLOT_TOP: f64 = 32.0;
    const PLOT_BOTTOM: f64 = 288.0;

    let max = bars.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);
    let plot_h = PLOT_BOTTOM - PLOT_TOP;
    let n = bars.len().max(1) as f64;
    let step = (WIDTH - 2.0 * MARGIN) / n;
    let bar_w = (step * 0.6).min(64.0);

    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            <svg viewBox="0 0 480 320" class="chart__svg">
                <line
                    x1=MARGIN
                    y1=PLOT_BOTTOM
                    x2={WIDTH - MARGIN}
                    y2=PLOT_BOTTOM
                    class="chart__axis"
                />
                {bars
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, value, formatted))| {
                        let height = if max > 0.0 { value / max * plot_h } else { 0.0 };
                        let x = MARGIN + i as f64 * step + (step - bar_w) / 2.0;
                        let y = PLOT_BOTTOM - height;
                        let center = x + bar_w / 2.0;
                        view! {
                            <rect x=x y=y width=bar_w height=height rx="2" class="chart__bar" />
                            <text
                                x=center
                                y={y - 6.0}
                                text-anchor="middle"
                                class="chart__value"
                            >
                                {formatted}
                            </text>
                            <text
                                x=center
                                y={PLOT_BOTTOM + 16.0}
                                text-anchor="middle"
                                class="chart__label"
                            >
                                {label}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

/// Horizontal bar chart; used for the top-N seller rankings.
#[component]
pub fn HBarChart(
    /// (label, value, formatted value) per bar, already in display order
    bars: Vec<(String, f64, String)>,
    #[prop(into)] title: String,
) -> impl IntoView {
    const WIDTH: f64 = 480.0;
    const ROW_H: f64 = 32.0;
    const LABEL_W: f64 = 140.0;

    let max = bars.iter().map(|(_, v, _)| *v).fold(0.0_f64, f64::max);
    let height = bars.len().max(1) as f64 * ROW_H + 16.0;
    let view_box = format!("0 0 {} {}", WIDTH, height);

    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            <svg viewBox=view_box class="chart__svg">
                {bars
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, value, formatted))| {
                        let y = 8.0 + i as f64 * ROW_H;
                        let w = if max > 0.0 {
                            value / max * (WIDTH - LABEL_W - 110.0)
                        } else {
                            0.0
                        };
                        view! {
                            <text
                                x={LABEL_W - 8.0}
                                y={y + 16.0}
                                text-anchor="end"
                                class="chart__label"
                            >
                                {label}
                            </text>
                            <rect
                                x=LABEL_W
                                y=y
                                width=w
                                height={ROW_H - 8.0}
                                rx="2"
                                class="chart__bar"
                            />
                            <text x={LABEL_W + w + 6.0} y={y + 16.0} class="chart__value">
                                {formatted}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

/// Monthly line chart with one colored series per year, so the same month
/// of different years stays visually separate.
#[component]
pub fn LineChart(
    /// Month rows in chronological order
    rows: Vec<MonthRow>,
    #[prop(into)] title: String,
) -> impl IntoView {
    const WIDTH: f64 = 480.0;
    const LEFT: f64 = 24.0;
    const RIGHT: f64 = 16.0;
    const PLOT_TOP: f64 = 24.0;
    const PLOT_BOTTOM: f64 = 284.0;

    let max = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);
    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = PLOT_BOTTOM - PLOT_TOP;

    // Rows arrive chronological, so dedup keeps the year order
    let mut years: Vec<i32> = rows.iter().map(|r| r.year).collect();
    years.dedup();

    let series: Vec<(i32, &'static str, Vec<(f64, f64)>)> = years
        .iter()
        .enumerate()
        .map(|(i, &year)| {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let points: Vec<(f64, f64)> = rows
                .iter()
                .filter(|r| r.year == year)
                .map(|r| {
                    let x = LEFT + (r.month.month0() as f64 + 0.5) / 12.0 * plot_w;
                    let y = if max > 0.0 {
                        PLOT_BOTTOM - r.value / max * plot_h
                    } else {
                        PLOT_BOTTOM
                    };
                    (x, y)
                })
                .collect();
            (year, color, points)
        })
        .collect();

    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            <svg viewBox="0 0 480 320" class="chart__svg">
                <line
                    x1=LEFT
                    y1=PLOT_BOTTOM
                    x2={WIDTH - RIGHT}
                    y2=PLOT_BOTTOM
                    class="chart__axis"
                />
                {MONTH_LABELS
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let x = LEFT + (i as f64 + 0.5) / 12.0 * plot_w;
                        view! {
                            <text
                                x=x
                                y={PLOT_BOTTOM + 16.0}
                                text-anchor="middle"
                                class="chart__label"
                            >
                                {*label}
                            </text>
                        }
                    })
                    .collect_view()}
                {series
                    .into_iter()
                    .map(|(_, color, points)| {
                        let path = points
                            .iter()
                            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                            .collect::<Vec<_>>()
                            .join(" ");
                        view! {
                            <polyline
                                points=path
                                fill="none"
                                stroke=color
                                stroke-width="2"
                                class="chart__line"
                            />
                            {points
                                .into_iter()
                                .map(|(x, y)| {
                                    view! { <circle cx=x cy=y r="3" fill=color /> }
                                })
                                .collect_view()}
                        }
                    })
                    .collect_view()}
            </svg>
            <div class="chart__legend">
                {years
                    .iter()
                    .enumerate()
                    .map(|(i, year)| {
                        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
                        view! {
                            <span class="chart__legend-item">
                                <span
                                    class="chart__legend-swatch"
                                    style=format!("background-color: {}", color)
                                ></span>
                                {year.to_string()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Geographic bubble scatter of per-state totals: longitude maps to x,
/// latitude to y, bubble area to the state's value.
#[component]
pub fn GeoScatter(
    /// State rows sorted descending by value
    rows: Vec<StateRow>,
    #[prop(into)] title: String,
) -> impl IntoView {
    // Bounding box around Brazil, padded
    const LON_MIN: f64 = -74.5;
    const LON_MAX: f64 = -34.0;
    const LAT_MIN: f64 = -34.5;
    const LAT_MAX: f64 = 5.5;
    const WIDTH: f64 = 480.0;
    const HEIGHT: f64 = 420.0;
    const PAD: f64 = 24.0;

    let max = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);

    view! {
        <div class="chart">
            <h3 class="chart__title">{title}</h3>
            <svg viewBox="0 0 480 420" class="chart__svg">
                <rect x="0" y="0" width="480" height="420" rx="6" class="map__background" />
                {rows
                    .iter()
                    .map(|row| {
                        let x = (row.lon - LON_MIN) / (LON_MAX - LON_MIN) * (WIDTH - 2.0 * PAD)
                            + PAD;
                        let y = (LAT_MAX - row.lat) / (LAT_MAX - LAT_MIN) * (HEIGHT - 2.0 * PAD)
                            + PAD;
                        let r = if max > 0.0 {
                            (row.value / max).sqrt() * 26.0 + 4.0
                        } else {
                            4.0
                        };
                        view! {
                            <circle cx=x cy=y r=r class="map__bubble" />
                            <text
                                x=x
                                y={y - r - 4.0}
                                text-anchor="middle"
                                class="map__state"
                            >
                                {row.state.clone()}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            <ul class="map__legend">
                {rows
                    .iter()
                    .take(5)
                    .map(|row| {
                        view! {
                            <li>
                                <span class="map__legend-state">{row.state.clone()}</span>
                                <span class="map__legend-value">{row.formatted.clone()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
