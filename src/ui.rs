use crate::models::HabitStats;

pub fn render_index(date: &str, weekly_score: u8, stats: &HabitStats) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{WEEKLY}}", &weekly_score.to_string())
        .replace("{{TOTAL}}", &stats.total_habits.to_string())
        .replace("{{DONE}}", &stats.completed_today.to_string())
        .replace("{{RATE}}", &stats.completion_rate.to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Wellness Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6f1;
      --bg-2: #cfe8dc;
      --ink: #24312b;
      --accent: #3e8e7e;
      --accent-2: #2f4858;
      --mood: #4a90e2;
      --habit: #28a745;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2f1e8 60%, #f2f8f0 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
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
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #5c6b62;
      font-size: 1rem;
    }

    .score-badge {
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 18px;
      padding: 14px 22px;
      text-align: center;
    }

    .score-badge .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #84938a;
    }

    .score-badge .value {
      display: block;
      font-size: 2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 22px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 16px;
    }

    .mood-options {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(96px, 1fr));
      gap: 10px;
    }

    .mood-option {
      border: 2px solid transparent;
      border-radius: 16px;
      background: rgba(62, 142, 126, 0.07);
      padding: 12px 8px;
      text-align: center;
      cursor: pointer;
      font-family: inherit;
      font-size: 0.9rem;
      display: grid;
      gap: 4px;
      transition: transform 150ms ease, border-color 150ms ease;
    }

    .mood-option:hover {
      transform: translateY(-2px);
    }

    .mood-option.active {
      border-color: var(--accent);
      background: rgba(62, 142, 126, 0.16);
    }

    .mood-option .emoji {
      font-size: 1.6rem;
    }

    textarea {
      width: 100%;
      min-height: 70px;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 12px;
      padding: 10px 12px;
      font-family: inherit;
      font-size: 0.95rem;
      resize: vertical;
    }

    .row {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .row input {
      flex: 1;
      min-width: 180px;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 999px;
      padding: 12px 16px;
      font-family: inherit;
      font-size: 0.95rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-family: inherit;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(62, 142, 126, 0.3);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .history,
    .habit-list {
      display: grid;
      gap: 10px;
    }

    .history-entry {
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 12px 14px;
      display: grid;
      gap: 4px;
    }

    .history-entry .when {
      font-size: 0.8rem;
      color: #84938a;
    }

    .history-entry .what {
      display: flex;
      align-items: center;
      gap: 8px;
      font-weight: 600;
    }

    .history-entry .note {
      color: #5c6b62;
      font-size: 0.9rem;
      font-style: italic;
    }

    .habit-item {
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 12px 14px;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .habit-item.done {
      background: rgba(40, 167, 69, 0.08);
    }

    .habit-item .name {
      font-weight: 600;
    }

    .habit-item .meta {
      font-size: 0.85rem;
      color: #84938a;
    }

    .habit-item .actions {
      display: flex;
      gap: 8px;
    }

    .btn-done {
      background: var(--habit);
      color: white;
    }

    .btn-done[disabled] {
      opacity: 0.6;
      cursor: default;
    }

    .btn-delete {
      background: rgba(198, 59, 43, 0.1);
      color: #c63b2b;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      background: rgba(62, 142, 126, 0.07);
      border-radius: 14px;
      padding: 12px;
      display: grid;
      gap: 4px;
      text-align: center;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #84938a;
    }

    .stat .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .chart-card {
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 8px;
    }

    .chart-card svg {
      width: 100%;
      height: 220px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--mood);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--mood);
      stroke-width: 2;
    }

    .chart-bar {
      fill: var(--habit);
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a867e;
      font-size: 10px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .no-data {
      color: #84938a;
      font-size: 0.9rem;
      text-align: center;
      padding: 12px 0;
    }

    .tabs {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.85rem;
      color: #6b7a70;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .resource-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
      gap: 14px;
    }

    .resource-card {
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 8px;
      align-content: start;
    }

    .resource-card .category {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--accent);
      font-weight: 600;
    }

    .resource-card h3 {
      margin: 0;
      font-size: 1.05rem;
    }

    .resource-card p {
      margin: 0;
      color: #5c6b62;
      font-size: 0.9rem;
    }

    .resource-card ul {
      margin: 0;
      padding-left: 18px;
      color: #5c6b62;
      font-size: 0.85rem;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7a70;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
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
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Daily Wellness Tracker</h1>
        <p class="subtitle">Log your mood, keep your habits, watch the week add up. Today is {{DATE}}.</p>
      </div>
      <div class="score-badge">
        <span class="label">Weekly score</span>
        <span class="value" id="weekly-score">{{WEEKLY}}</span>
      </div>
    </header>

    <section class="card">
      <h2>How are you feeling today?</h2>
      <div class="mood-options" id="mood-options"></div>
      <textarea id="mood-notes" placeholder="Any notes about today? (optional)"></textarea>
      <div class="row">
        <button class="btn-primary" id="save-mood" type="button">Save mood</button>
      </div>
      <div class="history" id="mood-history">
        <p class="no-data">No mood data yet. Start logging your mood above!</p>
      </div>
    </section>

    <section class="card">
      <h2>Habits</h2>
      <div class="row">
        <input id="habit-input" placeholder="e.g. Drink 8 glasses of water" />
        <button class="btn-primary" id="add-habit" type="button">Add habit</button>
      </div>
      <div class="habit-list" id="habit-list">
        <p class="no-data">No habits yet. Add some habits above to get started!</p>
      </div>
      <div class="stat-grid">
        <div class="stat">
          <span class="label">Total habits</span>
          <span class="value" id="total-habits">{{TOTAL}}</span>
        </div>
        <div class="stat">
          <span class="label">Completed today</span>
          <span class="value" id="completed-today">{{DONE}}</span>
        </div>
        <div class="stat">
          <span class="label">Completion rate</span>
          <span class="value" id="completion-rate">{{RATE}}%</span>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Last 7 days</h2>
      <div class="charts">
        <div class="chart-card">
          <span class="subtitle">Mood score</span>
          <svg id="mood-chart" viewBox="0 0 440 220" role="img" aria-label="Mood chart"></svg>
        </div>
        <div class="chart-card">
          <span class="subtitle">Habit completion</span>
          <svg id="habit-chart" viewBox="0 0 440 220" role="img" aria-label="Habit chart"></svg>
        </div>
      </div>
    </section>

    <section class="card">
      <h2>Wellness resources</h2>
      <div class="tabs" id="resource-tabs">
        <button class="tab active" type="button" data-category="">All</button>
        <button class="tab" type="button" data-category="mental">Mental</button>
        <button class="tab" type="button" data-category="physical">Physical</button>
        <button class="tab" type="button" data-category="nutrition">Nutrition</button>
        <button class="tab" type="button" data-category="sleep">Sleep</button>
      </div>
      <div class="resource-grid" id="resource-grid"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const MOODS = [
      { name: 'excited', emoji: String.fromCodePoint(0x1F929), label: 'Excited' },
      { name: 'happy', emoji: String.fromCodePoint(0x1F60A), label: 'Happy' },
      { name: 'okay', emoji: String.fromCodePoint(0x1F610), label: 'Okay' },
      { name: 'sad', emoji: String.fromCodePoint(0x1F622), label: 'Sad' },
      { name: 'stressed', emoji: String.fromCodePoint(0x1F624), label: 'Stressed' }
    ];

    const statusEl = document.getElementById('status');
    const moodOptionsEl = document.getElementById('mood-options');
    const moodHistoryEl = document.getElementById('mood-history');
    const habitListEl = document.getElementById('habit-list');
    const resourceGridEl = document.getElementById('resource-grid');

    let selectedMood = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => {
          statusEl.textContent = '';
          statusEl.dataset.type = '';
        }, 2500);
      }
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    /* mood picker */

    const renderMoodOptions = () => {
      moodOptionsEl.innerHTML = MOODS.map(
        (mood) => `
          <button class="mood-option" type="button" data-mood="${mood.name}">
            <span class="emoji">${mood.emoji}</span>
            <span>${mood.label}</span>
          </button>`
      ).join('');

      moodOptionsEl.querySelectorAll('.mood-option').forEach((option) => {
        option.addEventListener('click', () => {
          moodOptionsEl
            .querySelectorAll('.mood-option')
            .forEach((other) => other.classList.remove('active'));
          option.classList.add('active');
          selectedMood = option.dataset.mood;
        });
      });
    };

    const renderMoodHistory = (entries) => {
      if (!entries.length) {
        moodHistoryEl.innerHTML =
          '<p class="no-data">No mood data yet. Start logging your mood above!</p>';
        return;
      }

      moodHistoryEl.innerHTML = entries
        .slice(0, 10)
        .map(
          (entry) => `
            <div class="history-entry">
              <span class="when">${entry.date}</span>
              <span class="what">${entry.emoji} ${entry.label}</span>
              ${entry.notes ? `<span class="note">"${escapeHtml(entry.notes)}"</span>` : ''}
            </div>`
        )
        .join('');
    };

    const loadMoods = async () => {
      renderMoodHistory(await api('/api/moods'));
    };

    const saveMood = async () => {
      if (!selectedMood) {
        setStatus('Please select a mood first!', 'error');
        return;
      }

      const notes = document.getElementById('mood-notes').value;
      const result = await api('/api/moods', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mood: selectedMood, notes })
      });

      document.getElementById('weekly-score').textContent = result.weekly_score;
      setStatus(result.updated ? "Today's mood updated!" : 'Mood saved!', 'ok');

      selectedMood = null;
      document.getElementById('mood-notes').value = '';
      moodOptionsEl
        .querySelectorAll('.mood-option')
        .forEach((option) => option.classList.remove('active'));

      await Promise.all([loadMoods(), loadDashboard()]);
    };

    /* habits */

    const renderHabits = (response) => {
      const { habits, stats } = response;

      document.getElementById('total-habits').textContent = stats.total_habits;
      document.getElementById('completed-today').textContent = stats.completed_today;
      document.getElementById('completion-rate').textContent = stats.completion_rate + '%';

      if (!habits.length) {
        habitListEl.innerHTML =
          '<p class="no-data">No habits yet. Add some habits above to get started!</p>';
        return;
      }

      habitListEl.innerHTML = habits
        .map(
          (habit) => `
            <div class="habit-item ${habit.completed_today ? 'done' : ''}">
              <div>
                <div class="name">${escapeHtml(habit.name)}</div>
                <div class="meta">${String.fromCodePoint(0x1F525)} ${habit.streak} day streak &middot; added ${habit.created_date}</div>
              </div>
              <div class="actions">
                <button class="btn-done" type="button" data-complete="${habit.id}"
                  ${habit.completed_today ? 'disabled' : ''}>
                  ${habit.completed_today ? 'Done' : 'Mark done'}
                </button>
                <button class="btn-delete" type="button" data-delete="${habit.id}">Delete</button>
              </div>
            </div>`
        )
        .join('');

      habitListEl.querySelectorAll('[data-complete]').forEach((button) => {
        button.addEventListener('click', () =>
          completeHabit(button.dataset.complete).catch((err) => setStatus(err.message, 'error'))
        );
      });
      habitListEl.querySelectorAll('[data-delete]').forEach((button) => {
        button.addEventListener('click', () =>
          deleteHabit(button.dataset.delete).catch((err) => setStatus(err.message, 'error'))
        );
      });
    };

    const loadHabits = async () => {
      renderHabits(await api('/api/habits'));
    };

    const addHabit = async () => {
      const input = document.getElementById('habit-input');
      const name = input.value.trim();
      if (!name) {
        setStatus('Please enter a habit!', 'error');
        return;
      }

      const response = await api('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name })
      });

      input.value = '';
      renderHabits(response);
      setStatus('Habit added!', 'ok');
      await loadDashboard();
    };

    const completeHabit = async (id) => {
      renderHabits(await api(`/api/habits/${id}/complete`, { method: 'POST' }));
      setStatus('Great job!', 'ok');
      await loadDashboard();
    };

    const deleteHabit = async (id) => {
      if (!confirm('Are you sure you want to delete this habit?')) {
        return;
      }
      renderHabits(await api(`/api/habits/${id}`, { method: 'DELETE' }));
      setStatus('Habit deleted.', 'ok');
      await loadDashboard();
    };

    /* dashboard charts */

    const chartFrame = (width, height, paddingX, paddingY) => {
      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (100 / 4) * i;
        const y = height - paddingY - (value / 100) * (height - paddingY * 2);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y}" x2="${width - paddingX}" y2="${y}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${y + 3}" text-anchor="end">${value}</text>`;
      }
      return grid;
    };

    const dayLabel = (date) => date.slice(5);

    // Line chart over a 0-100 scale; days without a value break the line but
    // present points are still plotted.
    const renderMoodChart = (series) => {
      const svg = document.getElementById('mood-chart');
      if (!series.some((point) => point.score !== null)) {
        svg.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No mood data yet</text>';
        return;
      }

      const width = 440;
      const height = 220;
      const paddingX = 36;
      const paddingY = 28;
      const xStep = (width - paddingX * 2) / (series.length - 1);
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / 100) * (height - paddingY * 2);

      let path = '';
      let pen = false;
      series.forEach((point, index) => {
        if (point.score === null) {
          pen = false;
          return;
        }
        path += `${pen ? 'L' : 'M'} ${x(index).toFixed(2)} ${y(point.score).toFixed(2)} `;
        pen = true;
      });

      const circles = series
        .map((point, index) =>
          point.score === null
            ? ''
            : `<circle class="chart-point" cx="${x(index)}" cy="${y(point.score)}" r="4" />`
        )
        .join('');

      const labels = series
        .map(
          (point, index) =>
            `<text class="chart-label" x="${x(index)}" y="${height - 8}" text-anchor="middle">${dayLabel(point.date)}</text>`
        )
        .join('');

      svg.innerHTML = `
        ${chartFrame(width, height, paddingX, paddingY)}
        <path class="chart-line" d="${path.trim()}" />
        ${circles}
        ${labels}
      `;
    };

    const renderHabitChart = (series, totalHabits) => {
      const svg = document.getElementById('habit-chart');
      if (!totalHabits) {
        svg.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No habits yet</text>';
        return;
      }

      const width = 440;
      const height = 220;
      const paddingX = 36;
      const paddingY = 28;
      const slot = (width - paddingX * 2) / series.length;
      const barWidth = slot * 0.6;

      const bars = series
        .map((point, index) => {
          const barHeight = (point.completion / 100) * (height - paddingY * 2);
          const x = paddingX + index * slot + (slot - barWidth) / 2;
          const y = height - paddingY - barHeight;
          const value = `<text class="chart-label" x="${x + barWidth / 2}" y="${y - 5}" text-anchor="middle">${point.completion}%</text>`;
          return `<rect class="chart-bar" x="${x}" y="${y}" width="${barWidth}" height="${barHeight}" rx="3" />${value}`;
        })
        .join('');

      const labels = series
        .map((point, index) => {
          const x = paddingX + index * slot + slot / 2;
          return `<text class="chart-label" x="${x}" y="${height - 8}" text-anchor="middle">${dayLabel(point.date)}</text>`;
        })
        .join('');

      svg.innerHTML = `
        ${chartFrame(width, height, paddingX, paddingY)}
        ${bars}
        ${labels}
      `;
    };

    const loadDashboard = async () => {
      const dashboard = await api('/api/dashboard');
      document.getElementById('weekly-score').textContent = dashboard.weekly_score;
      renderMoodChart(dashboard.mood_series);
      renderHabitChart(dashboard.habit_series, dashboard.stats.total_habits);
    };

    /* resources */

    const renderResources = (resources) => {
      if (!resources.length) {
        resourceGridEl.innerHTML = '<p class="no-data">No resources in this category.</p>';
        return;
      }

      resourceGridEl.innerHTML = resources
        .map(
          (resource) => `
            <div class="resource-card">
              <span class="category">${resource.category}</span>
              <h3>${resource.title}</h3>
              <p>${resource.description}</p>
              <p>${resource.content}</p>
              <ul>${resource.tips.map((tip) => `<li>${tip}</li>`).join('')}</ul>
            </div>`
        )
        .join('');
    };

    const loadResources = async (category) => {
      const query = category ? `?category=${encodeURIComponent(category)}` : '';
      renderResources(await api(`/api/resources${query}`));
    };

    document.querySelectorAll('#resource-tabs .tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        document
          .querySelectorAll('#resource-tabs .tab')
          .forEach((other) => other.classList.toggle('active', other === tab));
        loadResources(tab.dataset.category).catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('save-mood').addEventListener('click', () => {
      saveMood().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add-habit').addEventListener('click', () => {
      addHabit().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('habit-input').addEventListener('keypress', (event) => {
      if (event.key === 'Enter') {
        addHabit().catch((err) => setStatus(err.message, 'error'));
      }
    });

    renderMoodOptions();
    Promise.all([loadMoods(), loadHabits(), loadDashboard(), loadResources('')]).catch((err) =>
      setStatus(err.message, 'error')
    );
  </script>
</body>
</html>
"##;
