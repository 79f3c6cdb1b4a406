use crate::models::{Metric, Selection};

const COUNTRIES: [&str; 12] = [
    "worldwide",
    "USA",
    "India",
    "Brazil",
    "France",
    "Germany",
    "UK",
    "Italy",
    "Spain",
    "Russia",
    "South Africa",
    "Japan",
];

pub fn render_index(selection: &Selection) -> String {
    let tabs: String = Metric::ALL
        .iter()
        .map(|metric| {
            let active = *metric == selection.metric;
            format!(
                r#"<button class="tab{}" type="button" data-metric="{metric}" role="tab" aria-selected="{active}">{}</button>"#,
                if active { " active" } else { "" },
                title_case(metric.as_str()),
            )
        })
        .collect();
    let countries: String = COUNTRIES
        .iter()
        .map(|country| format!(r#"<option value="{country}"></option>"#))
        .collect();

    INDEX_HTML
        .replace("{{METRIC_TABS}}", &tabs)
        .replace("{{COUNTRY_OPTIONS}}", &countries)
        .replace("{{METRIC}}", selection.metric.as_str())
        // User input goes in last so it is never scanned for placeholders.
        .replace("{{COUNTRY}}", &escape_html(&selection.country))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
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

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>COVID-19 Daily Trend</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #eef1f4;
      --ink: #20262d;
      --muted: #6a737c;
      --accent: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(32, 38, 45, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #dde4ea 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      appearance: none;
      border: none;
      background: transparent;
      border-radius: 999px;
      padding: 8px 16px;
      font: inherit;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    #country-form input {
      font: inherit;
      padding: 8px 14px;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      width: 200px;
    }

    .chart-card {
      position: relative;
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 320px;
      display: block;
    }

    #chart text {
      font-family: inherit;
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .chart-guide {
      stroke: rgba(32, 38, 45, 0.35);
    }

    .tooltip {
      position: absolute;
      pointer-events: none;
      background: rgba(32, 38, 45, 0.9);
      color: white;
      border-radius: 8px;
      padding: 6px 10px;
      font-size: 0.85rem;
      white-space: nowrap;
      display: none;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Daily new <span id="metric-name">{{METRIC}}</span></h1>
      <p class="subtitle">Day-over-day change for <span id="country-name">{{COUNTRY}}</span>.</p>
    </header>

    <section class="controls">
      <div class="tabs" role="tablist">{{METRIC_TABS}}</div>
      <form id="country-form">
        <input id="country" name="country" list="countries" value="{{COUNTRY}}" autocomplete="off" />
        <datalist id="countries">{{COUNTRY_OPTIONS}}</datalist>
      </form>
    </section>

    <div class="chart-card">
      <svg id="chart" viewBox="0 0 800 320" aria-label="Daily change chart" role="img"></svg>
      <div class="tooltip" id="tooltip"></div>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const chartEl = document.getElementById('chart');
    const tooltipEl = document.getElementById('tooltip');
    const statusEl = document.getElementById('status');
    const metricNameEl = document.getElementById('metric-name');
    const countryNameEl = document.getElementById('country-name');
    const countryForm = document.getElementById('country-form');
    const countryInput = document.getElementById('country');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const width = 800;
    const height = 320;
    const paddingX = 52;
    const paddingY = 34;
    const paddingTop = 16;

    let view = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderChart = (data) => {
      view = data;
      tooltipEl.style.display = 'none';
      if (!data || !data.points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const ticks = data.y_ticks.map((tick) => tick.value);
      const min = ticks.length ? Math.min(...ticks) : 0;
      let max = ticks.length ? Math.max(...ticks) : 1;
      if (max === min) {
        max = min + 1;
      }
      const xStep = data.points.length > 1 ? (width - paddingX * 2) / (data.points.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - ((value - min) * (height - paddingTop - paddingY)) / (max - min);

      const segments = [];
      let current = [];
      data.points.forEach((point, index) => {
        if (point.y === null) {
          if (current.length) segments.push(current);
          current = [];
        } else {
          current.push([x(index), y(point.y)]);
        }
      });
      if (current.length) segments.push(current);

      const baseline = y(Math.max(min, Math.min(0, max)));
      const areas = segments
        .map((seg) => {
          const line = seg.map(([px, py]) => `L ${px.toFixed(2)} ${py.toFixed(2)}`).join(' ');
          return `<path d="M ${seg[0][0].toFixed(2)} ${baseline} ${line} L ${seg[seg.length - 1][0].toFixed(2)} ${baseline} Z" fill="${data.colors.fill}" />`;
        })
        .join('');
      const lines = segments
        .map((seg) => {
          const d = seg.map(([px, py], i) => `${i === 0 ? 'M' : 'L'} ${px.toFixed(2)} ${py.toFixed(2)}`).join(' ');
          return `<path d="${d}" fill="none" stroke="${data.colors.line}" stroke-width="2" />`;
        })
        .join('');

      const yLabels = data.y_ticks
        .map((tick) => `<text class="chart-label" x="${paddingX - 10}" y="${y(tick.value) + 4}" text-anchor="end">${tick.label}</text>`)
        .join('');

      const labelEvery = Math.max(1, Math.ceil(data.points.length / 8));
      const xLabels = data.labels
        .map((label, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${label.axis_date}</text>`;
        })
        .join('');

      chartEl.setAttribute('viewBox', `0 0 ${width} ${height}`);
      chartEl.innerHTML = `
        ${areas}
        ${lines}
        ${yLabels}
        ${xLabels}
        <line id="guide" class="chart-guide" x1="0" y1="${paddingTop}" x2="0" y2="${height - paddingY}" visibility="hidden" />
      `;
    };

    const showTooltip = (event) => {
      if (!view || !view.points.length) {
        return;
      }
      const box = chartEl.getBoundingClientRect();
      const svgX = ((event.clientX - box.left) / box.width) * width;
      const xStep = view.points.length > 1 ? (width - paddingX * 2) / (view.points.length - 1) : 1;
      const index = Math.min(view.points.length - 1, Math.max(0, Math.round((svgX - paddingX) / xStep)));
      const label = view.labels[index];
      const guide = document.getElementById('guide');
      const guideX = paddingX + index * xStep;
      guide.setAttribute('x1', guideX);
      guide.setAttribute('x2', guideX);
      guide.setAttribute('visibility', 'visible');
      tooltipEl.textContent = `${label.date}: ${label.value === null ? 'n/a' : label.value}`;
      tooltipEl.style.left = `${(guideX / width) * box.width + 24}px`;
      tooltipEl.style.top = '24px';
      tooltipEl.style.display = 'block';
    };

    const hideTooltip = () => {
      tooltipEl.style.display = 'none';
      const guide = document.getElementById('guide');
      if (guide) {
        guide.setAttribute('visibility', 'hidden');
      }
    };

    const setActiveTab = (metric) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.metric === metric;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
    };

    const showSelection = (selection) => {
      metricNameEl.textContent = selection.metric;
      countryNameEl.textContent = selection.country;
      setActiveTab(selection.metric);
    };

    const loadChart = async () => {
      const res = await fetch('/api/chart');
      if (!res.ok) {
        throw new Error('Unable to load chart');
      }
      return res.json();
    };

    const waitForChart = async (selection) => {
      for (let attempt = 0; attempt < 20; attempt += 1) {
        const data = await loadChart();
        const v = data.view;
        if (v && v.country === selection.country && v.metric === selection.metric) {
          renderChart(v);
          setStatus('', '');
          return;
        }
        await new Promise((resolve) => setTimeout(resolve, 500));
      }
      setStatus('No data for this selection yet', 'error');
    };

    const select = async (change) => {
      setStatus('Loading...', 'info');
      const res = await fetch('/api/selection', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(change)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      const selection = await res.json();
      showSelection(selection);
      await waitForChart(selection);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        select({ metric: button.dataset.metric }).catch((err) => setStatus(err.message, 'error'));
      });
    });

    countryForm.addEventListener('submit', (event) => {
      event.preventDefault();
      select({ country: countryInput.value }).catch((err) => setStatus(err.message, 'error'));
    });
    countryInput.addEventListener('change', () => {
      select({ country: countryInput.value }).catch((err) => setStatus(err.message, 'error'));
    });

    chartEl.addEventListener('mousemove', showTooltip);
    chartEl.addEventListener('mouseleave', hideTooltip);

    loadChart()
      .then((data) => {
        showSelection(data.selection);
        return waitForChart(data.selection);
      })
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
