//! View model for the ranked side panel: a top-15 bar chart plus a detail
//! card for the selected country. Pure data in, pure data out, so the whole
//! panel is testable off-browser; the wasm layer only serializes it to HTML.

use foundation::color::Rgba;
use rankings::CountryRecord;

pub const BAR_SELECTED: Rgba = Rgba::rgb(0x38, 0xbd, 0xf8);
pub const BAR_DEFAULT: Rgba = Rgba::rgb(0x64, 0x74, 0x8b);

/// The chart shows at most this many countries, rank order.
pub const MAX_ROWS: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct PanelRow {
    pub rank: u32,
    pub name: String,
    pub iso_code: String,
    pub gdp_label: String,
    /// Bar length as a fraction of the longest bar, in `[0, 1]`.
    pub bar_fraction: f64,
    pub bar_color: Rgba,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub rank: u32,
    pub name: String,
    pub gdp_label: String,
    pub growth_label: String,
    pub growth_positive: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelView {
    pub rows: Vec<PanelRow>,
    pub detail: Option<DetailCard>,
}

/// Builds the panel for the given records and selection. Records are shown
/// in rank order regardless of input order; the detail card follows the
/// selection even when the selected country sits outside the top 15.
pub fn build(records: &[CountryRecord], selected_code: Option<&str>) -> PanelView {
    let mut ordered: Vec<&CountryRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.rank);

    let top: Vec<&CountryRecord> = ordered.iter().take(MAX_ROWS).copied().collect();
    let max_gdp = top
        .iter()
        .map(|record| record.gdp_trillions)
        .fold(0.0, f64::max);

    let rows = top
        .iter()
        .map(|record| {
            let selected = selected_code == Some(record.iso_code.as_str());
            PanelRow {
                rank: record.rank,
                name: record.country_name.clone(),
                iso_code: record.iso_code.clone(),
                gdp_label: record.gdp_label(),
                bar_fraction: if max_gdp > 0.0 {
                    record.gdp_trillions / max_gdp
                } else {
                    0.0
                },
                bar_color: if selected { BAR_SELECTED } else { BAR_DEFAULT },
                selected,
            }
        })
        .collect();

    let detail = selected_code
        .and_then(|code| ordered.iter().find(|record| record.iso_code == code))
        .map(|record| DetailCard {
            rank: record.rank,
            name: record.country_name.clone(),
            gdp_label: record.gdp_label(),
            growth_label: record.growth_label(),
            growth_positive: record.growth_rate >= 0.0,
            description: record.description.clone(),
        });

    PanelView { rows, detail }
}

/// Renders the panel as an HTML fragment for the sidebar container.
pub fn to_html(view: &PanelView) -> String {
    let mut html = String::from("<ul class=\"rank-list\">\n");
    for row in &view.rows {
        let width_pct = (row.bar_fraction * 100.0).clamp(0.0, 100.0);
        html.push_str(&format!(
            concat!(
                "<li class=\"rank-row{sel}\" data-code=\"{code}\">",
                "<span class=\"rank\">{rank}</span>",
                "<span class=\"name\">{name}</span>",
                "<span class=\"bar\" style=\"width: {width:.1}%; background: {color}\"></span>",
                "<span class=\"gdp\">{gdp}</span>",
                "</li>\n",
            ),
            sel = if row.selected { " selected" } else { "" },
            code = escape(&row.iso_code),
            rank = row.rank,
            name = escape(&row.name),
            width = width_pct,
            color = row.bar_color.to_css(),
            gdp = escape(&row.gdp_label),
        ));
    }
    html.push_str("</ul>\n");

    if let Some(detail) = &view.detail {
        html.push_str(&format!(
            concat!(
                "<div class=\"detail-card\">",
                "<h2>#{rank} {name}</h2>",
                "<p class=\"gdp\">{gdp}</p>",
                "<p class=\"growth {dir}\">{growth}</p>",
                "<p class=\"blurb\">{blurb}</p>",
                "</div>\n",
            ),
            rank = detail.rank,
            name = escape(&detail.name),
            gdp = escape(&detail.gdp_label),
            dir = if detail.growth_positive { "up" } else { "down" },
            growth = escape(&detail.growth_label),
            blurb = escape(&detail.description),
        ));
    }
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
