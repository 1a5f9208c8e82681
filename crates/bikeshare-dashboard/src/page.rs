//! Static HTML page for a dashboard run

use crate::render::ChartSet;
use crate::view::DashboardView;
use bikeshare_graphs::PieChart;
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem auto;max-width:1200px;color:#222}\
.metrics{display:flex;gap:3rem;margin:1rem 0}\
.metric .label{font-size:.9rem;color:#666}\
.metric .value{font-size:2rem}\
.notice{padding:.75rem 1rem;background:#F5F5F5;border-left:4px solid #D3D3D3}\
img{width:100%;height:auto}";

/// Builds `index.html` from the view and the charts that were written
pub fn render_page(view: &DashboardView, charts: &ChartSet) -> String {
    let mut html = String::new();
    let title = escape_html(&view.title);

    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<h1>{title}</h1>");
    let _ = writeln!(
        html,
        "<p class=\"range\">{} to {}</p>",
        view.range.start(),
        view.range.end()
    );

    if view.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"notice\">No rentals were recorded between {} and {}.</p>",
            view.range.start(),
            view.range.end()
        );
    }

    let _ = writeln!(html, "<h2>Daily Bike Rents</h2>");
    let _ = writeln!(html, "<div class=\"metrics\">");
    metric(&mut html, "Total Bike Rents", view.metrics.total);
    metric(&mut html, "Casual", view.metrics.casual);
    metric(&mut html, "Registered", view.metrics.registered);
    let _ = writeln!(html, "</div>");
    image(&mut html, charts.daily, "Daily bike rents");

    let _ = writeln!(html, "<h2>Highest &amp; Lowest Bike Rent Time</h2>");
    image(&mut html, charts.hourly, "Highest and lowest bike rent hours");

    let _ = writeln!(html, "<h2>Working Day and Off Day Bike Rent Ratio</h2>");
    image(&mut html, charts.ratio, "Working day and off day rent ratio");
    if !view.is_empty() {
        for pie in [&view.ratio_pie, &view.work_pie, &view.off_pie] {
            empty_pie_notice(&mut html, pie);
        }
    }
    image(&mut html, charts.breakdown, "Casual and registered rents per day type");

    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");
    html
}

fn metric(html: &mut String, label: &str, value: u64) {
    let _ = writeln!(
        html,
        "<div class=\"metric\"><div class=\"label\">{label}</div><div class=\"value\">{value}</div></div>"
    );
}

fn image(html: &mut String, file: Option<&str>, alt: &str) {
    if let Some(file) = file {
        let _ = writeln!(html, "<img src=\"{file}\" alt=\"{alt}\">");
    }
}

fn empty_pie_notice(html: &mut String, pie: &PieChart) {
    if !pie.is_empty() {
        return;
    }
    let name = if pie.title.is_empty() {
        "Working day and off day ratio"
    } else {
        pie.title.as_str()
    };
    let _ = writeln!(
        html,
        "<p class=\"notice\">{}: no rentals in the selected range.</p>",
        escape_html(name)
    );
}

/// Escapes text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DAILY_CHART, HOURLY_CHART};
    use bikeshare_common::test_utils::{dataset_fixtures, date};
    use bikeshare_config::StyleSettings;
    use bikeshare_data::{aggregate_by_day_type, aggregate_by_hour, filter_by_date, DateRange};

    fn view_for(range: DateRange) -> DashboardView {
        let daily = filter_by_date(&dataset_fixtures::daily_records(), &range);
        let hourly = filter_by_date(&dataset_fixtures::hourly_records(), &range);
        DashboardView::build(
            "Melody's <Bike> Dashboard",
            range,
            &daily,
            aggregate_by_hour(&hourly),
            aggregate_by_day_type(&daily),
            &StyleSettings::default(),
        )
    }

    #[test]
    fn test_page_sections_and_metrics() {
        let view = view_for(DateRange::new(date(2011, 1, 1), date(2011, 1, 3)).unwrap());
        let charts = ChartSet {
            daily: Some(DAILY_CHART),
            hourly: Some(HOURLY_CHART),
            ..ChartSet::default()
        };

        let html = render_page(&view, &charts);

        assert!(html.contains("<h1>Melody&#39;s &lt;Bike&gt; Dashboard</h1>"));
        assert!(html.contains("Daily Bike Rents"));
        assert!(html.contains("Highest &amp; Lowest Bike Rent Time"));
        assert!(html.contains("Working Day and Off Day Bike Rent Ratio"));
        assert!(html.contains("<div class=\"value\">296</div>"));
        assert!(html.contains("src=\"daily_rentals.svg\""));
        assert!(!html.contains("day_type_ratio.svg"));
    }

    #[test]
    fn test_empty_state_notice() {
        let view = view_for(DateRange::single_day(date(2011, 4, 1)));
        let html = render_page(&view, &ChartSet::default());

        assert!(html.contains("No rentals were recorded between 2011-04-01 and 2011-04-01."));
        assert!(html.contains("<div class=\"value\">0</div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_missing_day_type_notice() {
        let view = view_for(DateRange::single_day(date(2011, 1, 3)));
        let html = render_page(&view, &ChartSet::default());

        assert!(html.contains("Off Day Casual and Registered: no rentals in the selected range."));
        assert!(!html.contains("Working Day Casual and Registered: no rentals"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"x\" <y>"), "&quot;x&quot; &lt;y&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
