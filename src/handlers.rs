use crate::errors::AppError;
use crate::models::{
    AppData, DashboardResponse, Habit, HabitRequest, HabitView, HabitsResponse, MoodEntry,
    MoodKind, MoodRequest, MoodView, ResourceQuery, SaveMoodResponse,
};
use crate::resources;
use crate::scoring::{self, date_key};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let weekly = scoring::weekly_score(&data.moods, &data.habits, today);
    let stats = scoring::habit_stats(&data.habits, today);
    Html(render_index(&date_key(today), weekly, &stats))
}

pub async fn get_moods(State(state): State<AppState>) -> Result<Json<Vec<MoodView>>, AppError> {
    let data = state.data.lock().await;
    let mut entries: Vec<&MoodEntry> = data.moods.values().collect();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Ok(Json(entries.into_iter().map(MoodView::from).collect()))
}

// A second save on the same day replaces the entry; the day string is the key.
pub async fn save_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<SaveMoodResponse>, AppError> {
    let name = payload.mood.trim().to_lowercase();
    if name.is_empty() {
        return Err(AppError::bad_request("select a mood first"));
    }

    let now = Local::now();
    let today = now.date_naive();
    let key = date_key(today);

    let mut data = state.data.lock().await;
    let entry = MoodEntry {
        date: key.clone(),
        mood: MoodKind::from_name(&name),
        notes: payload.notes,
        timestamp: now.timestamp_millis(),
    };
    let updated = data.moods.insert(key, entry.clone()).is_some();
    let weekly_score = scoring::weekly_score(&data.moods, &data.habits, today);

    persist_data(&state.data_path, &data).await?;

    Ok(Json(SaveMoodResponse {
        entry: MoodView::from(&entry),
        updated,
        weekly_score,
    }))
}

pub async fn get_habits(State(state): State<AppState>) -> Result<Json<HabitsResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(habits_response(Local::now().date_naive(), &data)))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitRequest>,
) -> Result<Json<HabitsResponse>, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("enter a habit name"));
    }

    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;

    let lowered = name.to_lowercase();
    if data
        .habits
        .iter()
        .any(|habit| habit.name.to_lowercase() == lowered)
    {
        return Err(AppError::bad_request("this habit already exists"));
    }

    let habit = Habit {
        id: data.allocate_habit_id(),
        name,
        created_date: date_key(today),
        completed_dates: Default::default(),
    };
    data.habits.push(habit);

    persist_data(&state.data_path, &data).await?;

    Ok(Json(habits_response(today, &data)))
}

// Completion is monotonic per day: repeating the call changes nothing, and an
// unknown id is a no-op.
pub async fn complete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HabitsResponse>, AppError> {
    let today = Local::now().date_naive();
    let key = date_key(today);

    let mut data = state.data.lock().await;
    let changed = match data.habits.iter_mut().find(|habit| habit.id == id) {
        Some(habit) => habit.completed_dates.insert(key),
        None => false,
    };

    if changed {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(habits_response(today, &data)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HabitsResponse>, AppError> {
    let today = Local::now().date_naive();
    let mut data = state.data.lock().await;

    let before = data.habits.len();
    data.habits.retain(|habit| habit.id != id);

    if data.habits.len() != before {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(habits_response(today, &data)))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(scoring::build_dashboard(&data)))
}

pub async fn get_resources(
    Query(query): Query<ResourceQuery>,
) -> Json<Vec<resources::Resource>> {
    Json(resources::filtered(query.category.as_deref()))
}

fn habits_response(today: NaiveDate, data: &AppData) -> HabitsResponse {
    let key = date_key(today);
    let habits = data
        .habits
        .iter()
        .map(|habit| HabitView {
            id: habit.id,
            name: habit.name.clone(),
            created_date: habit.created_date.clone(),
            completed_today: habit.completed_on(&key),
            streak: scoring::streak(habit, today),
        })
        .collect();

    HabitsResponse {
        habits,
        stats: scoring::habit_stats(&data.habits, today),
    }
}
