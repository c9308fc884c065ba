use crate::aggregate::{HourMap, WeeklySummary};
use crate::errors::FETCH_FAILED_MESSAGE;
use crate::hours::{format_hours, HourFormat};
use crate::week::{date_key, WeekRange};
use maud::{html, Markup};

/// What the area under the form shows.
pub enum Report<'a> {
    /// Nothing fetched yet: the week heading over header-only tables.
    Pending(WeekRange),
    Summary(&'a WeeklySummary),
    Failed,
}

pub fn render_index(api_key: &str, report: &Report<'_>, format: HourFormat) -> String {
    let api_key = html! { (api_key) }.into_string();
    INDEX_HTML
        .replace("{{API_KEY}}", &api_key)
        .replace("{{REPORT}}", &render_report(report, format).into_string())
}

pub fn render_report(report: &Report<'_>, format: HourFormat) -> Markup {
    match report {
        Report::Pending(range) => render_summary(range, &HourMap::new(), &HourMap::new(), format),
        Report::Summary(summary) => {
            render_summary(&summary.range, &summary.customers, &summary.projects, format)
        }
        Report::Failed => html! {
            p.danger { (FETCH_FAILED_MESSAGE) }
        },
    }
}

fn render_summary(
    range: &WeekRange,
    customers: &HourMap,
    projects: &HourMap,
    format: HourFormat,
) -> Markup {
    html! {
        h2 { (date_key(range.from_date())) " → " (date_key(range.to_date())) }
        div.row {
            (render_hour_table("Customer", customers, format))
            (render_hour_table("Project", projects, format))
        }
    }
}

fn render_hour_table(label: &str, totals: &HourMap, format: HourFormat) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { (label) }
                    th { "Hours" }
                }
            }
            tbody {
                @for (name, hours) in totals {
                    tr {
                        td { (name) }
                        td { (format_hours(*hours, format)) }
                    }
                }
            }
        }
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Hours</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 16px;
      font-size: 1.4rem;
    }

    form {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    input {
      flex: 1 1 240px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 14px 18px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
    }

    th, td {
      padding: 10px 14px;
      text-align: left;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    th {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    td:last-child {
      font-variant-numeric: tabular-nums;
      color: var(--accent-2);
      font-weight: 600;
    }

    .danger {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weekly Hours</h1>
    </header>

    <form id="form" method="post" action="/report">
      <input id="api-key" name="api_key" type="password" placeholder="API key" value="{{API_KEY}}" autocomplete="off" />
      <button type="submit">Fetch</button>
    </form>

    <section id="app">
{{REPORT}}
    </section>
  </main>
</body>
</html>
"#;
