// HTML page hosting the chart mount element
use crate::domain::chart::ChartConfig;

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js";
const TIME_ADAPTER_JS: &str = "https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns/dist/chartjs-adapter-date-fns.bundle.min.js";

/// Render the dashboard page. The canvas stays empty when `chart` is None.
pub fn render_page(title: &str, mount_id: &str, chart: Option<&ChartConfig>) -> anyhow::Result<String> {
    let script = match chart {
        Some(config) => {
            // Keep "</script>" inside string values from closing the tag
            let json = serde_json::to_string(config)?.replace("</", "<\\/");
            format!(
                "<script>\nnew Chart(document.getElementById('{}'), {});\n</script>",
                escape_html(mount_id),
                json
            )
        }
        None => String::new(),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<script src="{CHART_JS}"></script>
<script src="{TIME_ADAPTER_JS}"></script>
</head>
<body>
<main class="container">
<h1>{title}</h1>
<canvas id="{mount}" width="900" height="380"></canvas>
</main>
{script}
</body>
</html>
"#,
        title = escape_html(title),
        mount = escape_html(mount_id),
        script = script,
    ))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
