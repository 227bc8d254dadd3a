pub fn render_index() -> String {
    INDEX_HTML.to_owned()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Workout Week</title>
  <style>
    :root {
      --bg: #0f1512;
      --card: #18211c;
      --ink: #e8f3ec;
      --muted: #8fa39a;
      --accent: #7cfead;
      --danger: #ff7b6b;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, #1d2b24, var(--bg) 65%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 22px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .meta {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .tab {
      border: 1px solid #2c3a33;
      background: transparent;
      color: var(--ink);
      border-radius: 999px;
      padding: 8px 14px;
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: #0b130f;
    }

    .tab.today {
      box-shadow: inset 0 0 0 2px rgba(124, 254, 173, 0.3);
    }

    .badge {
      margin-left: 6px;
      font-size: 0.8rem;
      opacity: 0.8;
    }

    .panel {
      display: none;
      gap: 10px;
    }

    .panel.active {
      display: grid;
    }

    .panel label {
      display: flex;
      gap: 10px;
      align-items: center;
      padding: 10px 12px;
      border-radius: 12px;
      background: rgba(255, 255, 255, 0.03);
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    button.action {
      border: none;
      border-radius: 12px;
      padding: 10px 14px;
      background: #26342d;
      color: var(--ink);
      cursor: pointer;
    }

    button.danger {
      background: var(--danger);
      color: #1a0c09;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Workout Week</h1>
      <p class="meta" id="week-meta">Loading...</p>
    </header>

    <nav class="tabs" id="tabs"></nav>
    <section id="panels"></section>

    <div class="actions">
      <button class="action danger" id="start-week">Start new week</button>
      <button class="action" id="reset-all">Reset all days</button>
      <a class="action" id="export" href="/api/export"><button class="action">Export JSON</button></a>
      <label class="action">Import JSON <input type="file" id="import" accept="application/json" hidden /></label>
    </div>

    <div class="status" id="status"></div>
  </main>

  <script>
    const tabsEl = document.getElementById('tabs');
    const panelsEl = document.getElementById('panels');
    const metaEl = document.getElementById('week-meta');
    const statusEl = document.getElementById('status');
    const importEl = document.getElementById('import');

    let activeDay = 1;
    let importing = false;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (method, url, body) => {
      const init = { method };
      if (body !== undefined) {
        init.headers = { 'content-type': 'application/json' };
        init.body = typeof body === 'string' ? body : JSON.stringify(body);
      }
      const res = await fetch(url, init);
      if (!res.ok) {
        const msg = await res.text();
        const err = new Error(msg || 'Request failed');
        err.status = res.status;
        throw err;
      }
      return res.json();
    };

    const selectDay = (day) => {
      activeDay = day;
      document.querySelectorAll('.tab').forEach((tab) => {
        tab.classList.toggle('active', Number(tab.dataset.day) === day);
      });
      document.querySelectorAll('.panel').forEach((panel) => {
        panel.classList.toggle('active', Number(panel.dataset.day) === day);
      });
    };

    const setBadges = (percents) => {
      percents.forEach((pct, i) => {
        const badge = document.querySelector(`[data-badge="${i + 1}"]`);
        if (badge) badge.textContent = `${pct}%`;
      });
    };

    const renderPanel = (panel, view) => {
      panel.innerHTML = '';
      view.items.forEach((item) => {
        const label = document.createElement('label');
        const cb = document.createElement('input');
        cb.type = 'checkbox';
        cb.checked = item.checked;
        cb.dataset.id = item.id;
        cb.addEventListener('change', () => toggle(view.day, item.id, cb.checked));
        label.append(cb, document.createTextNode(item.label));
        panel.append(label);
      });

      const actions = document.createElement('div');
      actions.className = 'actions';
      [['check-all', 'Check all'], ['uncheck-all', 'Uncheck all'], ['reset', 'Reset day']].forEach(([action, text]) => {
        const button = document.createElement('button');
        button.className = 'action';
        button.textContent = text;
        button.addEventListener('click', () => dayAction(view.day, action));
        actions.append(button);
      });
      panel.append(actions);
    };

    const applyDayUpdate = (update) => {
      const panel = document.querySelector(`.panel[data-day="${update.day.day}"]`);
      if (panel) renderPanel(panel, update.day);
      setBadges(update.percents);
    };

    const renderWeek = (week) => {
      metaEl.textContent = week.week_label;
      tabsEl.innerHTML = '';
      panelsEl.innerHTML = '';
      week.days.forEach((view) => {
        const tab = document.createElement('button');
        tab.className = 'tab';
        tab.dataset.day = view.day;
        tab.textContent = `Day ${view.day}: ${view.title}`;
        const badge = document.createElement('span');
        badge.className = 'badge';
        badge.dataset.badge = view.day;
        tab.append(badge);
        if (view.day === week.suggested_day) {
          tab.classList.add('today');
          tab.title = "Today's suggested workout";
        }
        tab.addEventListener('click', () => selectDay(view.day));
        tabsEl.append(tab);

        const panel = document.createElement('div');
        panel.className = 'panel';
        panel.dataset.day = view.day;
        renderPanel(panel, view);
        panelsEl.append(panel);
      });
      setBadges(week.days.map((view) => view.percent));
      selectDay(week.active_day);
    };

    const toggle = async (day, item, checked) => {
      try {
        const update = await request('POST', `/api/days/${day}/toggle`, { item, checked });
        applyDayUpdate(update);
        const next = update.auto_advance;
        if (next) {
          setTimeout(() => selectDay(next.target), next.delay_ms);
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const dayAction = async (day, action) => {
      try {
        applyDayUpdate(await request('POST', `/api/days/${day}/${action}`));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('reset-all').addEventListener('click', async () => {
      if (!confirm('Reset all days? This clears all saved checkmarks.')) return;
      try {
        renderWeek(await request('POST', '/api/week/reset'));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('start-week').addEventListener('click', async () => {
      if (!confirm('Start a new week? This resets all checkmarks.')) return;
      try {
        renderWeek(await request('POST', '/api/week/start'));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    importEl.addEventListener('change', async (event) => {
      const file = event.target.files[0];
      if (!file || importing) return;
      importing = true;
      try {
        const text = await file.text();
        renderWeek(await request('POST', '/api/import', text));
        setStatus('Import successful.', 'ok');
      } catch (err) {
        const prefix = err.status === 400 ? 'Invalid JSON. ' : '';
        setStatus(`${prefix}${err.message}`, 'error');
      } finally {
        importing = false;
        event.target.value = '';
      }
    });

    request('GET', '/api/week')
      .then(renderWeek)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_wires_every_action_route() {
        let page = render_index();
        for route in ["/api/week", "/api/export", "/api/import", "/api/week/start", "/api/week/reset", "/toggle"] {
            assert!(page.contains(route), "page does not call {route}");
        }
    }

    #[test]
    fn plan_text_is_never_parsed_as_markup() {
        let page = render_index();
        assert!(!page.contains("innerHTML = `"));
        assert!(page.contains("tab.textContent = `Day ${view.day}: ${view.title}`"));
    }

    #[test]
    fn only_rejected_payloads_are_reported_as_invalid_json() {
        let page = render_index();
        assert!(page.contains("err.status = res.status"));
        assert!(page.contains("err.status === 400 ? 'Invalid JSON. ' : ''"));
    }
}
