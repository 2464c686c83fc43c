use crate::models::{
    AppData, DashboardResponse, Habit, HabitPoint, HabitStats, MoodEntry, MoodPoint,
};
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Consecutive completed days ending at `today`. A habit completed yesterday
/// but not today has a streak of 0.
pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;
    while habit.completed_on(&date_key(cursor)) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

/// Percentage of habits completed on `day`, 0 when there are no habits.
pub fn completion_rate(habits: &[Habit], day: NaiveDate) -> u8 {
    if habits.is_empty() {
        return 0;
    }
    let key = date_key(day);
    let completed = habits.iter().filter(|habit| habit.completed_on(&key)).count();
    (completed as f64 / habits.len() as f64 * 100.0).round() as u8
}

pub fn habit_stats(habits: &[Habit], day: NaiveDate) -> HabitStats {
    let key = date_key(day);
    HabitStats {
        total_habits: habits.len(),
        completed_today: habits.iter().filter(|habit| habit.completed_on(&key)).count(),
        completion_rate: completion_rate(habits, day),
    }
}

/// Blended score over the 7 days ending at `reference_day`.
///
/// A day counts toward the average when it has a mood entry or at least one
/// habit existed on it; days with neither are skipped entirely. Each counted
/// day scores up to 50 points from its mood and up to 50 from its habit
/// completions, using whichever halves are available.
pub fn weekly_score(
    moods: &BTreeMap<String, MoodEntry>,
    habits: &[Habit],
    reference_day: NaiveDate,
) -> u8 {
    let mut total = 0.0_f64;
    let mut valid_days = 0u32;

    for offset in (0..7).rev() {
        let key = date_key(reference_day - Duration::days(offset));
        let mood = moods.get(&key);
        let existing = habits.iter().filter(|habit| habit.exists_on(&key)).count();

        if mood.is_none() && existing == 0 {
            continue;
        }

        let mut day_score = 0.0;
        if let Some(entry) = mood {
            day_score += f64::from(entry.mood.score()) * 0.5;
        }
        if existing > 0 {
            let completed = habits
                .iter()
                .filter(|habit| habit.completed_on(&key))
                .count();
            day_score += completed as f64 / existing as f64 * 50.0;
        }

        total += day_score;
        valid_days += 1;
    }

    if valid_days == 0 {
        0
    } else {
        (total / f64::from(valid_days)).round() as u8
    }
}

pub fn build_dashboard(data: &AppData) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), data)
}

pub fn build_dashboard_at(today: NaiveDate, data: &AppData) -> DashboardResponse {
    let mut mood_series = Vec::with_capacity(7);
    let mut habit_series = Vec::with_capacity(7);

    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = date_key(date);
        mood_series.push(MoodPoint {
            score: data.moods.get(&key).map(|entry| entry.mood.score()),
            date: key.clone(),
        });
        habit_series.push(HabitPoint {
            completion: completion_rate(&data.habits, date),
            date: key,
        });
    }

    DashboardResponse {
        weekly_score: weekly_score(&data.moods, &data.habits, today),
        mood_series,
        habit_series,
        stats: habit_stats(&data.habits, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodKind;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(id: u64, name: &str, created: NaiveDate, completed: &[NaiveDate]) -> Habit {
        Habit {
            id,
            name: name.to_string(),
            created_date: date_key(created),
            completed_dates: completed.iter().map(|date| date_key(*date)).collect(),
        }
    }

    fn mood_entry(date: NaiveDate, mood: MoodKind) -> (String, MoodEntry) {
        let key = date_key(date);
        (
            key.clone(),
            MoodEntry {
                date: key,
                mood,
                notes: String::new(),
                timestamp: 0,
            },
        )
    }

    #[test]
    fn streak_is_zero_without_completions() {
        let today = day(2026, 3, 10);
        let habit = habit(1, "stretch", today, &[]);
        assert_eq!(streak(&habit, today), 0);
    }

    #[test]
    fn streak_counts_back_from_today_until_first_gap() {
        let today = day(2026, 3, 10);
        let completed = [
            today,
            today - Duration::days(1),
            today - Duration::days(2),
            // gap at today-3
            today - Duration::days(4),
        ];
        let habit = habit(1, "run", today - Duration::days(30), &completed);
        assert_eq!(streak(&habit, today), 3);
    }

    #[test]
    fn streak_is_zero_when_today_not_completed() {
        let today = day(2026, 3, 10);
        let habit = habit(1, "read", today - Duration::days(5), &[today - Duration::days(1)]);
        assert_eq!(streak(&habit, today), 0);
    }

    #[test]
    fn completion_rate_is_zero_with_no_habits() {
        assert_eq!(completion_rate(&[], day(2026, 3, 10)), 0);
    }

    #[test]
    fn completion_rate_rounds_to_nearest_percent() {
        let today = day(2026, 3, 10);
        let habits = vec![
            habit(1, "a", today, &[today]),
            habit(2, "b", today, &[]),
            habit(3, "c", today, &[]),
        ];
        assert_eq!(completion_rate(&habits, today), 33);

        let habits = vec![
            habit(1, "a", today, &[today]),
            habit(2, "b", today, &[today]),
            habit(3, "c", today, &[]),
        ];
        assert_eq!(completion_rate(&habits, today), 67);
    }

    #[test]
    fn weekly_score_is_zero_for_empty_inputs() {
        assert_eq!(weekly_score(&BTreeMap::new(), &[], day(2026, 3, 10)), 0);
    }

    #[test]
    fn weekly_score_mood_only_day() {
        let today = day(2026, 3, 10);
        let moods: BTreeMap<_, _> = [mood_entry(today, MoodKind::Happy)].into();
        assert_eq!(weekly_score(&moods, &[], today), 40);
    }

    #[test]
    fn weekly_score_habits_only_day() {
        let today = day(2026, 3, 10);
        let habits = vec![
            habit(1, "a", today, &[today]),
            habit(2, "b", today, &[]),
        ];
        assert_eq!(weekly_score(&BTreeMap::new(), &habits, today), 25);
    }

    #[test]
    fn weekly_score_blends_both_halves() {
        let today = day(2026, 3, 10);
        let moods: BTreeMap<_, _> = [mood_entry(today, MoodKind::Happy)].into();
        let habits = vec![
            habit(1, "a", today, &[today]),
            habit(2, "b", today, &[]),
        ];
        // 80 * 0.5 + (1/2) * 50 on the only counted day
        assert_eq!(weekly_score(&moods, &habits, today), 65);
    }

    #[test]
    fn weekly_score_averages_over_days_since_creation() {
        let today = day(2026, 3, 10);
        let created = today - Duration::days(2);
        let habits = vec![habit(
            1,
            "meditate",
            created,
            &[created, created + Duration::days(1), today],
        )];
        // three counted days, each fully completed
        assert_eq!(weekly_score(&BTreeMap::new(), &habits, today), 50);
    }

    #[test]
    fn weekly_score_skips_days_with_no_activity() {
        let today = day(2026, 3, 10);
        let moods: BTreeMap<_, _> = [
            mood_entry(today, MoodKind::Excited),
            mood_entry(today - Duration::days(3), MoodKind::Sad),
        ]
        .into();
        // (100 * 0.5 + 40 * 0.5) / 2, the other five days are skipped
        assert_eq!(weekly_score(&moods, &[], today), 35);
    }

    #[test]
    fn unknown_mood_name_falls_back_to_okay() {
        assert_eq!(MoodKind::from_name("grumpy"), MoodKind::Okay);
        assert_eq!(MoodKind::from_name("grumpy").score(), 60);
    }

    #[test]
    fn dashboard_series_cover_seven_days_oldest_first() {
        let today = day(2026, 3, 10);
        let mut data = AppData::default();
        let (key, entry) = mood_entry(today - Duration::days(2), MoodKind::Happy);
        data.moods.insert(key, entry);
        data.habits.push(habit(1, "walk", today - Duration::days(6), &[today]));

        let dashboard = build_dashboard_at(today, &data);
        assert_eq!(dashboard.mood_series.len(), 7);
        assert_eq!(dashboard.habit_series.len(), 7);
        assert_eq!(dashboard.mood_series[0].date, date_key(today - Duration::days(6)));
        assert_eq!(dashboard.mood_series[6].date, date_key(today));

        let present: Vec<_> = dashboard
            .mood_series
            .iter()
            .filter(|point| point.score.is_some())
            .collect();
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].score, Some(80));

        assert_eq!(dashboard.habit_series[6].completion, 100);
        assert_eq!(dashboard.habit_series[0].completion, 0);
        assert_eq!(dashboard.stats.total_habits, 1);
        assert_eq!(dashboard.stats.completed_today, 1);
    }
}
