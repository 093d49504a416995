use crate::pipeline::RankScope;
use crate::report::{SummaryData, format_f64_2};

pub fn render_report_text(summary: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Forbes Global 2000 Companies Analysis\n");
    out.push_str("=====================================\n\n");

    out.push_str("1. Input and filters\n");
    out.push_str(&format!("Source: {}\n", summary.source));
    out.push_str(&format!(
        "Companies: {} loaded, {} after filtering\n",
        summary.n_companies, summary.n_filtered
    ));
    out.push_str(&format!(
        "Countries selected: {} of {}\n",
        summary.n_countries_selected, summary.n_countries_total
    ));
    out.push_str(&format!(
        "Industries selected: {} of {}\n",
        summary.n_industries_selected, summary.n_industries_total
    ));
    out.push_str(&format!(
        "Rankings computed over: {} (top {})\n\n",
        rank_scope_label(summary.rank_scope),
        summary.top_n
    ));

    out.push_str("2. Selected company\n");
    match &summary.selected_company {
        Some(name) => {
            out.push_str(&format!("Company: {}\n", name));
            if summary.company_fell_back {
                if let Some(requested) = &summary.requested_company {
                    out.push_str(&format!(
                        "Note: {} is not in the filtered set; showing the first available company.\n",
                        requested
                    ));
                }
            }
            for (label, value) in &summary.company_kpis {
                out.push_str(&format!("{}: {}\n", label, format_f64_2(*value)));
            }
        }
        None => out.push_str("No company available under the current filters.\n"),
    }
    out.push('\n');

    out.push_str("3. Leaders\n");
    if summary.leaders.is_empty() {
        out.push_str("No ranking data.\n");
    }
    for leader in &summary.leaders {
        let value = if leader.is_count {
            format!("{:.0}", leader.value)
        } else {
            format_f64_2(leader.value)
        };
        out.push_str(&format!("{}: {} ({})\n", leader.title, leader.category, value));
    }
    out.push('\n');

    out.push_str("4. Metric correlation\n");
    match &summary.strongest_correlation {
        Some(pair) => out.push_str(&format!(
            "Strongest pair: {} / {} (r = {})\n",
            pair.a,
            pair.b,
            format_f64_2(pair.r)
        )),
        None => out.push_str("Correlation undefined for this dataset.\n"),
    }
    out.push('\n');

    out.push_str("5. Data caveats\n");
    out.push_str(&format!(
        "Non-finite ROA values (zero assets or missing data): {}\n",
        summary.non_finite_roa
    ));
    out.push_str(&format!(
        "Non-finite profit margins (zero sales or missing data): {}\n",
        summary.non_finite_profit_margin
    ));
    if summary.non_finite_roa + summary.non_finite_profit_margin > 0 {
        out.push_str("Non-finite ratios are ranked after all finite values.\n");
    }

    out
}

fn rank_scope_label(scope: RankScope) -> &'static str {
    match scope {
        RankScope::Full => "full dataset",
        RankScope::Filtered => "filtered companies",
    }
}
