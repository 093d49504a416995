use crate::model::metrics::{Dimension, Metric};
use crate::model::record::CompanyRecord;
use crate::panels::defs::{BarStyle, PanelDef, PanelKind};
use crate::panels::{
    AxisSpec, Bar, BarSpec, ChartSpec, HeatmapSpec, MetricCard, MetricsSpec, PanelSpec,
    ScatterPoint, ScatterSpec, TableRow, TableSpec,
};
use crate::pipeline::stage4_lookup::company_kpis;
use crate::pipeline::{DerivedView, Views};

/// Value-axis field of category count panels.
pub const COUNT_FIELD: &str = "count";

pub const TABLE_COLUMNS: [&str; 9] = [
    "Company",
    "Country",
    "Industry",
    "Sales",
    "Profits",
    "Assets",
    "Market_Value",
    "ROA",
    "Profit_Margin",
];

/// Turns every derived view into its panel description, in catalogue order.
pub fn present(views: &Views<'_>) -> Vec<PanelSpec> {
    views
        .panels
        .iter()
        .filter_map(|(def, view)| {
            let spec = present_panel(def, view, views.params.top_n);
            if spec.is_none() {
                tracing::warn!(panel = def.id, "panel kind and derived view disagree; skipping");
            }
            spec
        })
        .collect()
}

pub fn present_panel(def: &PanelDef, view: &DerivedView<'_>, top_n: usize) -> Option<PanelSpec> {
    let chart = match (def.kind, view) {
        (PanelKind::Table, DerivedView::Records(records)) => ChartSpec::Table(TableSpec {
            columns: TABLE_COLUMNS.to_vec(),
            rows: records.iter().map(|r| table_row(r)).collect(),
        }),
        (
            PanelKind::Scatter {
                x,
                y,
                color,
                hover,
            },
            DerivedView::Records(records),
        ) => ChartSpec::Scatter(ScatterSpec {
            x: metric_axis(x),
            y: metric_axis(y),
            color_by: color.column(),
            hover: hover.column(),
            points: records
                .iter()
                .map(|r| ScatterPoint {
                    label: hover.value(r).to_string(),
                    category: color.value(r).to_string(),
                    x: x.value(r),
                    y: y.value(r),
                })
                .collect(),
        }),
        (PanelKind::CompanyKpi { metrics }, DerivedView::Company { options, selection }) => {
            ChartSpec::Metrics(MetricsSpec {
                options: options.iter().map(|s| s.to_string()).collect(),
                requested: selection.as_ref().and_then(|s| s.requested.clone()),
                selected: selection.as_ref().map(|s| s.record.company.clone()),
                fell_back: selection.as_ref().is_some_and(|s| s.fell_back),
                cards: selection
                    .as_ref()
                    .map(|s| {
                        company_kpis(s.record, metrics)
                            .into_iter()
                            .map(|(metric, value)| MetricCard {
                                label: metric.column(),
                                value,
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            })
        }
        (PanelKind::Correlation { colorscale, .. }, DerivedView::Correlation(matrix)) => {
            let labels = matrix.metrics.iter().map(|m| m.column()).collect::<Vec<_>>();
            ChartSpec::Heatmap(HeatmapSpec {
                rows: labels.clone(),
                columns: labels,
                annotations: matrix
                    .values
                    .iter()
                    .map(|row| row.iter().map(|v| format!("{v:.2}")).collect())
                    .collect(),
                values: matrix.values.clone(),
                colorscale,
            })
        }
        (
            PanelKind::CategoryCount {
                dimension,
                value_label,
                style,
                ..
            },
            DerivedView::Counts(counts),
        ) => bar_chart(
            style,
            dimension_axis(dimension),
            AxisSpec {
                field: COUNT_FIELD,
                label: value_label,
            },
            counts
                .iter()
                .map(|c| Bar {
                    category: c.value.clone(),
                    value: c.count as f64,
                })
                .collect(),
        ),
        (PanelKind::TopByMetric { metric, style }, DerivedView::Ranked(records)) => bar_chart(
            style,
            dimension_axis(Dimension::Company),
            metric_axis(metric),
            ranked_bars(records, metric),
        ),
        (PanelKind::GroupMean { group, metric, style }, DerivedView::GroupMeans(means)) => {
            bar_chart(
                style,
                dimension_axis(group),
                metric_axis(metric),
                means
                    .iter()
                    .map(|g| Bar {
                        category: g.group.clone(),
                        value: g.mean,
                    })
                    .collect(),
            )
        }
        _ => return None,
    };

    Some(PanelSpec {
        id: def.id,
        title: def.title.replace("{n}", &top_n.to_string()),
        source: def.source,
        chart,
    })
}

pub fn table_row(record: &CompanyRecord) -> TableRow {
    TableRow {
        company: record.company.clone(),
        country: record.country.clone(),
        industry: record.industry.clone(),
        sales: record.sales,
        profits: record.profits,
        assets: record.assets,
        market_value: record.market_value,
        roa: record.roa,
        profit_margin: record.profit_margin,
    }
}

fn ranked_bars(records: &[&CompanyRecord], metric: Metric) -> Vec<Bar> {
    records
        .iter()
        .map(|r| Bar {
            category: r.company.clone(),
            value: metric.value(r),
        })
        .collect()
}

fn bar_chart(style: BarStyle, category_axis: AxisSpec, value_axis: AxisSpec, bars: Vec<Bar>) -> ChartSpec {
    ChartSpec::Bar(BarSpec {
        category_axis,
        value_axis,
        orientation: style.orientation,
        color: style.color,
        tick_angle: style.tick_angle,
        bars,
    })
}

fn metric_axis(metric: Metric) -> AxisSpec {
    AxisSpec {
        field: metric.column(),
        label: metric.label(),
    }
}

fn dimension_axis(dimension: Dimension) -> AxisSpec {
    AxisSpec {
        field: dimension.column(),
        label: dimension.column(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_present.rs"]
mod tests;
