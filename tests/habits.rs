#[cfg(test)]
mod tests {
    use dosa::db::db::Db;
    use dosa::libs::app::App;
    use dosa::libs::dates::{today_key, yesterday_key};
    use dosa::libs::habit::HABIT_TEMPLATES;
    use dosa::libs::projection::{completion_rate, max_streak};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AppTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for AppTestContext {
        fn setup() -> Self {
            AppTestContext { temp_dir: tempfile::tempdir().unwrap() }
        }
    }

    impl AppTestContext {
        fn app(&self) -> App {
            let db = Db::open_at(self.temp_dir.path().join("dosa.db")).unwrap();
            App::with_db(db).unwrap()
        }
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_first_completion_starts_streak(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit("Meditate", "").unwrap();
        let id = app.habits[0].id.clone();

        let outcome = app.toggle_habit(&id).unwrap();
        assert!(outcome.now_done);
        assert_eq!(outcome.streak, 1);
        assert!(app.habits[0].done_on(&today_key()));
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_completion_extends_streak_after_yesterday(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit("Run", "").unwrap();
        let id = app.habits[0].id.clone();
        app.habits[0].daily_records.insert(yesterday_key(), true);
        app.habits[0].streak = 4;

        let outcome = app.toggle_habit(&id).unwrap();
        assert_eq!(outcome.streak, 5);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_gap_resets_streak_to_one(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit("Read", "").unwrap();
        let id = app.habits[0].id.clone();
        // A stale streak with no completion yesterday: today's completion
        // restarts momentum at 1, not 0
        app.habits[0].streak = 6;

        let outcome = app.toggle_habit(&id).unwrap();
        assert_eq!(outcome.streak, 1);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_uncheck_decrements_with_floor(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit("Stretch", "").unwrap();
        let id = app.habits[0].id.clone();

        app.toggle_habit(&id).unwrap();
        let outcome = app.toggle_habit(&id).unwrap();
        assert!(!outcome.now_done);
        assert_eq!(outcome.streak, 0);
        assert!(!app.habits[0].done_on(&today_key()));

        // Un-toggling again from zero must not underflow
        app.toggle_habit(&id).unwrap();
        app.habits[0].streak = 0;
        let outcome = app.toggle_habit(&id).unwrap();
        assert_eq!(outcome.streak, 0);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_toggle_missing_is_noop(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(app.toggle_habit("ghost").is_none());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_full_completion_fires_once(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit("First", "").unwrap();
        app.create_habit("Second", "").unwrap();
        let first = app.habits[0].id.clone();
        let second = app.habits[1].id.clone();

        let outcome = app.toggle_habit(&first).unwrap();
        assert!(!outcome.all_done_today);

        let outcome = app.toggle_habit(&second).unwrap();
        assert!(outcome.all_done_today);

        // Unchecking afterwards is not a completion
        let outcome = app.toggle_habit(&second).unwrap();
        assert!(!outcome.all_done_today);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_no_completion_signal_without_habits(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(app.toggle_habit("anything").is_none());
        assert!(app.habits.is_empty());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_create_from_template(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit_from_template(1).unwrap();

        let habit = &app.habits[0];
        assert_eq!(habit.title, HABIT_TEMPLATES[1].title);
        assert_eq!(habit.schedule, "daily");
        assert_eq!(habit.streak, 0);
        assert!(habit.daily_records.is_empty());

        assert!(app.create_habit_from_template(HABIT_TEMPLATES.len()).is_err());
        assert_eq!(app.habits.len(), 1);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_create_requires_title(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(app.create_habit("  ", "desc").is_err());
        assert!(app.habits.is_empty());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_delete_and_undo(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit("Keep", "").unwrap();
        app.create_habit("Remove", "").unwrap();
        let before = app.habits.clone();
        let id = app.habits[1].id.clone();

        assert_eq!(app.delete_habit(&id).as_deref(), Some("Remove"));
        assert_eq!(app.habits.len(), 1);
        assert_eq!(app.undo().as_deref(), Some("Remove"));
        assert_eq!(app.habits, before);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_derived_stats(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_habit("A", "").unwrap();
        app.create_habit("B", "").unwrap();
        app.create_habit("C", "").unwrap();
        app.habits[0].streak = 2;
        app.habits[2].streak = 9;
        let today = today_key();
        app.habits[0].daily_records.insert(today.clone(), true);
        app.habits[1].daily_records.insert(today.clone(), true);

        assert_eq!(completion_rate(&app.habits, &today), 67);
        assert_eq!(max_streak(&app.habits), 9);
        assert_eq!(completion_rate(&[], &today), 0);
        assert_eq!(max_streak(&[]), 0);
    }
}
