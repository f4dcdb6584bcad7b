use crate::catalog::Catalog;
use crate::handlers::completion_message;
use crate::models::{ProfileResponse, WorkoutResponse};

#[derive(Debug, Clone, Copy)]
pub enum Notice {
    Completed(u32),
    NotFound,
}

pub fn render_index(
    catalog: &Catalog,
    profile: &ProfileResponse,
    notice: Option<Notice>,
    workout: Option<&WorkoutResponse>,
) -> String {
    let (notice_type, notice_text) = match notice {
        Some(Notice::Completed(duration)) => ("ok", completion_message(duration)),
        Some(Notice::NotFound) => ("error", "Workout not found for this combination.".to_owned()),
        None => ("", String::new()),
    };
    let favorite = profile
        .favorite_category
        .as_deref()
        .map(capitalize)
        .unwrap_or_else(|| "-".to_owned());

    INDEX_HTML
        .replace("{{NOTICE_TYPE}}", notice_type)
        .replace("{{NOTICE}}", &escape(&notice_text))
        .replace("{{CATEGORY_OPTIONS}}", &options(&catalog.categories(), workout.map(|w| w.category.as_str())))
        .replace("{{LEVEL_OPTIONS}}", &options(&catalog.levels(), workout.map(|w| w.level.as_str())))
        .replace("{{DURATION_OPTIONS}}", &options(&catalog.durations(), workout.map(|w| w.duration.as_str())))
        .replace("{{WORKOUT}}", &workout.map(render_workout).unwrap_or_default())
        .replace("{{STREAK}}", &profile.streak.to_string())
        .replace("{{WORKOUTS}}", &profile.total_workouts.to_string())
        .replace("{{MINUTES}}", &profile.total_minutes.to_string())
        .replace("{{FAVORITE}}", &escape(&favorite))
        .replace("{{HISTORY}}", &render_history(profile))
}

fn render_workout(workout: &WorkoutResponse) -> String {
    let exercises: String = workout
        .exercises
        .iter()
        .map(|exercise| format!("<li>{}</li>", escape(exercise)))
        .collect();

    let video = match (&workout.video, &workout.thumbnail) {
        (Some(video), Some(thumb)) => format!(
            r#"<a class="thumb" href="{}" target="_blank" rel="noopener" style="background-image: url('{}')">&#9654;</a>"#,
            escape(video),
            escape(thumb)
        ),
        (Some(video), None) => format!(
            r#"<a class="thumb" href="{}" target="_blank" rel="noopener">&#9654;</a>"#,
            escape(video)
        ),
        _ => String::new(),
    };

    format!(
        r#"<section id="workout-section" class="workout">
      <h2 id="workout-title">{title}</h2>
      <ul class="workout-list">{exercises}</ul>
      {video}
      <form method="post" action="/workout/complete">
        <input type="hidden" name="category" value="{category}" />
        <input type="hidden" name="duration" value="{duration}" />
        <button id="finish-button" type="submit">Finish workout</button>
      </form>
    </section>"#,
        title = escape(&workout.title),
        category = escape(&workout.category),
        duration = escape(&workout.duration),
    )
}

fn render_history(profile: &ProfileResponse) -> String {
    if profile.logs.is_empty() {
        return r#"<li class="hint">No workouts yet.</li>"#.to_owned();
    }

    profile
        .logs
        .iter()
        .map(|log| {
            format!(
                "<li><strong>{}</strong> ({} min) - <small>{}</small></li>",
                escape(&log.category),
                log.duration,
                escape(&log.date)
            )
        })
        .collect()
}

fn options(values: &[&str], selected: Option<&str>) -> String {
    values
        .iter()
        .map(|value| {
            let marker = if Some(*value) == selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{marker}>{0}</option>"#, escape(value))
        })
        .collect()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>DailyFit</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #23211f;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg), #ffe9d4 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .picker {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
      align-items: end;
    }

    select, button {
      font: inherit;
      padding: 10px 14px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    button {
      background: var(--accent);
      color: white;
      border: none;
      font-weight: 600;
      cursor: pointer;
    }

    .thumb {
      display: flex;
      align-items: center;
      justify-content: center;
      height: 220px;
      border-radius: 20px;
      background: var(--accent-2) center / cover no-repeat;
      color: white;
      font-size: 3rem;
      text-decoration: none;
      margin-bottom: 14px;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      display: grid;
      gap: 4px;
    }

    .label {
      color: #6b645d;
      font-size: 0.85rem;
      text-transform: uppercase;
    }

    .value {
      font-size: 1.8rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      color: #6f6a65;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>DailyFit</h1>
      <p id="status" class="status" data-type="{{NOTICE_TYPE}}">{{NOTICE}}</p>
    </header>

    <form class="picker" method="get" action="/workout">
      <label>Category
        <select id="category" name="category">{{CATEGORY_OPTIONS}}</select>
      </label>
      <label>Level
        <select id="level" name="level">{{LEVEL_OPTIONS}}</select>
      </label>
      <label>Duration (min)
        <select id="duration" name="duration">{{DURATION_OPTIONS}}</select>
      </label>
      <button id="cta-button" type="submit">Generate workout</button>
    </form>

    {{WORKOUT}}

    <section id="view-profile" class="stats">
      <div class="stat">
        <span class="label">Streak</span>
        <span id="stat-streak" class="value">{{STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Workouts</span>
        <span id="stat-workouts" class="value">{{WORKOUTS}}</span>
      </div>
      <div class="stat">
        <span class="label">Minutes</span>
        <span id="stat-minutes" class="value">{{MINUTES}}</span>
      </div>
      <div class="stat">
        <span class="label">Favorite</span>
        <span id="stat-favorite" class="value">{{FAVORITE}}</span>
      </div>
    </section>

    <section>
      <h2>Recent workouts</h2>
      <ul id="history-list">{{HISTORY}}</ul>
    </section>
  </main>
</body>
</html>
"#;
