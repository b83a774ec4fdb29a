// Vizb - Benchmark Visualization Toolkit
//
// Copyright (c) 2025 Goptics and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTML export.
//!
//! The page is self-contained apart from the ECharts library, which is loaded from a
//! CDN. Chart data is embedded as JSON and drawn by a small script.

use super::ReportView;
use crate::error::CliError;
use vizb_core::aggregate::ColorAllocator;
use vizb_core::Report;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// Render one or more reports into a single page.
///
/// Series colors are shared across all reports, so a subject keeps its color
/// everywhere on the page.
pub fn render_html(reports: &[Report]) -> Result<String, CliError> {
    let mut colors = ColorAllocator::new();
    let views: Vec<ReportView> = reports
        .iter()
        .map(|r| ReportView::build(r, &mut colors))
        .collect();

    let data = serde_json::to_string(&views).map_err(CliError::json_format)?;
    let title = match reports {
        [single] => single.name.as_str(),
        _ => "Benchmarks",
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str("<style>\n");
    html.push_str(include_str!("style.css"));
    html.push_str("</style>\n");
    html.push_str(&format!("<script src=\"{}\"></script>\n", ECHARTS_CDN));
    html.push_str("</head>\n<body>\n");
    html.push_str("<main id=\"vizb\"></main>\n");
    html.push_str("<script id=\"vizb-data\" type=\"application/json\">");
    html.push_str(&escape_script(&data));
    html.push_str("</script>\n<script>\n");
    html.push_str(include_str!("chart.js"));
    html.push_str("</script>\n</body>\n</html>\n");

    Ok(html)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// JSON inside <script> must not close the element early.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\!--")
}
