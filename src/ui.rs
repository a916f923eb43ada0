use crate::models::TodayResponse;

pub fn render_index(today: &TodayResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &today.date)
        .replace("{{LITERS}}", &format!("{:.2}", today.liters_logged))
        .replace("{{GOAL}}", &today.goal_liters.to_string())
        .replace("{{PERCENT}}", &today.percentage.to_string())
        .replace("{{SERVINGS}}", &today.creatine_servings.to_string())
        .replace("{{GRAMS}}", &today.creatine_grams.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #e8f3f6;
      --bg-2: #bfe3ef;
      --ink: #22323a;
      --accent: #1f9ecf;
      --accent-2: #2f5848;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(31, 88, 108, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #d8f0ea 60%, #eef7f3 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #56686f;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 88, 72, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #5d6d73;
      box-shadow: none;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(31, 88, 108, 0.12);
    }

    .pages {
      overflow: hidden;
    }

    .page-strip {
      display: flex;
      width: 300%;
      transition: transform 280ms ease;
    }

    .page {
      width: calc(100% / 3);
      flex-shrink: 0;
      display: grid;
      gap: 20px;
      padding: 4px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 88, 72, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7d8a8f;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.highlight {
      color: var(--accent);
    }

    .stat .value.goal-achieved {
      color: #2d7a4b;
    }

    .progress-track {
      height: 14px;
      border-radius: 999px;
      background: rgba(31, 158, 207, 0.15);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), #5cc6ea);
      width: 0%;
      transition: width 300ms ease;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    button.action {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(31, 158, 207, 0.3);
    }

    button.action:active {
      transform: scale(0.98);
    }

    button.action.secondary {
      background: var(--accent-2);
      box-shadow: 0 10px 24px rgba(47, 88, 72, 0.3);
    }

    button.action:disabled {
      background: #9fb4ac;
      box-shadow: none;
      cursor: default;
    }

    .goal-row {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    .goal-row label {
      font-weight: 600;
    }

    .goal-row input {
      width: 110px;
      border: 1px solid rgba(47, 88, 72, 0.25);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
      font-family: inherit;
    }

    .history-list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .history-list li {
      background: white;
      border-radius: 14px;
      border: 1px solid rgba(47, 88, 72, 0.08);
      padding: 12px 16px;
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      gap: 8px;
    }

    .history-list .day {
      font-weight: 600;
    }

    .history-list .detail {
      color: #56686f;
    }

    .empty {
      color: #7d8a8f;
      font-style: italic;
    }

    .status {
      font-size: 0.95rem;
      color: #5d6d73;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #66757b;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button.action {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle" id="date">{{DATE}}</p>
      </div>
      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-index="0" role="tab" aria-selected="true">Hydration</button>
        <button class="tab" type="button" data-index="1" role="tab" aria-selected="false">Creatine</button>
        <button class="tab" type="button" data-index="2" role="tab" aria-selected="false">History</button>
      </div>
    </header>

    <div class="pages">
      <div class="page-strip" id="page-strip">
        <section class="page" role="tabpanel" aria-label="Hydration">
          <div class="panel">
            <div class="stat">
              <span class="label">Logged today</span>
              <span id="liter-count" class="value highlight">{{LITERS}}L</span>
            </div>
            <div class="stat">
              <span class="label">Daily goal</span>
              <span id="goal-display" class="value">{{GOAL}}L</span>
            </div>
            <div class="stat">
              <span class="label">Progress</span>
              <span id="percent" class="value">{{PERCENT}}%</span>
            </div>
          </div>
          <div class="progress-track">
            <div class="progress-fill" id="progress-fill"></div>
          </div>
          <div class="actions logging-buttons">
            <button class="action" type="button" data-amount="0.25">+0.25 L</button>
            <button class="action" type="button" data-amount="0.5">+0.5 L</button>
            <button class="action" type="button" data-amount="1">+1 L</button>
          </div>
          <div class="goal-row">
            <label for="hydration-goal-input">Goal (liters)</label>
            <input id="hydration-goal-input" type="number" min="0.5" step="0.5" value="{{GOAL}}" />
            <button class="action secondary" id="goal-save-btn" type="button">Save goal</button>
          </div>
        </section>

        <section class="page" role="tabpanel" aria-label="Creatine">
          <div class="panel">
            <div class="stat">
              <span class="label">Servings today</span>
              <span id="creatine-servings" class="value highlight">{{SERVINGS}} / 4</span>
            </div>
            <div class="stat">
              <span class="label">Creatine taken</span>
              <span id="creatine-grams" class="value">{{GRAMS}}g</span>
            </div>
          </div>
          <div class="actions">
            <button class="action secondary" id="creatine-log-btn" type="button">Log 5g serving</button>
          </div>
          <p class="hint">Up to four 5g servings per day; the log button locks at the cap.</p>
        </section>

        <section class="page" role="tabpanel" aria-label="History">
          <div class="panel">
            <div class="stat">
              <span class="label">Avg liters/day</span>
              <span id="avg-liters" class="value">--</span>
            </div>
            <div class="stat">
              <span class="label">Creatine consistency</span>
              <span id="consistency" class="value">--</span>
            </div>
            <div class="stat">
              <span class="label">Days tracked</span>
              <span id="total-days" class="value">0</span>
            </div>
          </div>
          <h2>Last 7 days</h2>
          <ul class="history-list" id="history-list">
            <li class="empty">No archived days yet.</li>
          </ul>
        </section>
      </div>
    </div>

    <div class="status" id="status"></div>
    <p class="hint">Days roll over at local midnight; yesterday's totals move into the history automatically.</p>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const literCountEl = document.getElementById('liter-count');
    const goalDisplayEl = document.getElementById('goal-display');
    const percentEl = document.getElementById('percent');
    const progressFillEl = document.getElementById('progress-fill');
    const goalInput = document.getElementById('hydration-goal-input');
    const goalSaveBtn = document.getElementById('goal-save-btn');
    const servingsEl = document.getElementById('creatine-servings');
    const gramsEl = document.getElementById('creatine-grams');
    const creatineBtn = document.getElementById('creatine-log-btn');
    const avgLitersEl = document.getElementById('avg-liters');
    const consistencyEl = document.getElementById('consistency');
    const totalDaysEl = document.getElementById('total-days');
    const historyListEl = document.getElementById('history-list');
    const statusEl = document.getElementById('status');
    const pageStrip = document.getElementById('page-strip');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const loggingBtns = Array.from(document.querySelectorAll('.logging-buttons button'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const setPage = (index) => {
      index = Math.max(0, Math.min(2, index));
      pageStrip.style.transform = `translateX(-${index * (100 / 3)}%)`;
      tabs.forEach((tab) => {
        const isActive = Number(tab.dataset.index) === index;
        tab.classList.toggle('active', isActive);
        tab.setAttribute('aria-selected', String(isActive));
      });
      if (index === 2) {
        loadHistory().catch((err) => setStatus(err.message, 'error'));
      }
    };

    const updateToday = (data) => {
      dateEl.textContent = data.date;
      literCountEl.textContent = `${data.liters_logged.toFixed(2)}L`;
      literCountEl.classList.toggle('goal-achieved', data.percentage >= 100);
      goalDisplayEl.textContent = `${data.goal_liters}L`;
      percentEl.textContent = `${data.percentage}%`;
      progressFillEl.style.width = `${data.percentage}%`;
      updateCreatine({
        servings: data.creatine_servings,
        total_grams: data.creatine_grams,
        at_max: data.creatine_at_max
      });
    };

    const updateCreatine = (data) => {
      servingsEl.textContent = `${data.servings} / 4`;
      gramsEl.textContent = `${data.total_grams}g`;
      creatineBtn.disabled = data.at_max;
      creatineBtn.textContent = data.at_max ? 'Daily max reached' : 'Log 5g serving';
    };

    const renderHistory = (data) => {
      avgLitersEl.textContent = data.stats ? `${data.stats.avg_liters}L` : '--';
      consistencyEl.textContent = data.stats ? `${data.stats.consistency_percent}%` : '--';
      totalDaysEl.textContent = data.total_days;

      historyListEl.innerHTML = '';
      if (!data.recent.length) {
        const li = document.createElement('li');
        li.className = 'empty';
        li.textContent = 'No archived days yet.';
        historyListEl.appendChild(li);
        return;
      }
      data.recent.forEach((record) => {
        const li = document.createElement('li');
        const day = document.createElement('span');
        day.className = 'day';
        day.textContent = record.date;
        const detail = document.createElement('span');
        detail.className = 'detail';
        detail.textContent = `${record.litersLogged.toFixed(2)}L · ${record.creatineServings} serving(s)`;
        li.append(day, detail);
        historyListEl.appendChild(li);
      });
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const loadToday = async () => {
      updateToday(await request('/api/today'));
    };

    const loadHistory = async () => {
      renderHistory(await request('/api/history'));
    };

    const flashSaved = () => {
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    loggingBtns.forEach((btn) => {
      btn.addEventListener('click', () => {
        const amount = parseFloat(btn.dataset.amount) || 0;
        request('/api/hydration', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ amount })
        })
          .then((data) => {
            updateToday(data);
            flashSaved();
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    goalSaveBtn.addEventListener('click', () => {
      const goal = parseFloat(goalInput.value);
      request('/api/goal', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ goal })
      })
        .then((data) => {
          updateToday(data);
          flashSaved();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    creatineBtn.addEventListener('click', () => {
      request('/api/creatine', { method: 'POST' })
        .then((data) => {
          updateCreatine(data);
          flashSaved();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((tab) => {
      tab.addEventListener('click', () => setPage(Number(tab.dataset.index) || 0));
    });

    setPage(0);
    loadToday().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
