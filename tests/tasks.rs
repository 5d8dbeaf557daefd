#[cfg(test)]
mod tests {
    use dosa::db::db::Db;
    use dosa::libs::app::App;
    use dosa::libs::dates::today_key;
    use dosa::libs::task::{Priority, SubtaskDraft, TaskDraft};
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

    fn draft(title: &str) -> TaskDraft {
        TaskDraft { title: title.to_string(), ..Default::default() }
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_create_requires_title(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(app.create_task(draft("   ")).is_err());
        assert!(app.tasks.is_empty());
        // Nothing may have been persisted by the failed operation
        let reloaded = ctx.app();
        assert!(reloaded.tasks.is_empty());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_create_defaults(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("First")).unwrap();
        app.create_task(draft("Second")).unwrap();

        let first = &app.tasks[0];
        assert!(!first.done);
        assert_eq!(first.priority, Priority::Medium);
        assert_eq!(first.due_date, "");
        assert!(first.subtasks.is_empty());
        assert_eq!(first.order, 1);
        assert_eq!(app.tasks[1].order, 2);
        assert_ne!(app.tasks[0].id, app.tasks[1].id);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_toggle_round_trip(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("Toggle me")).unwrap();
        let id = app.tasks[0].id.clone();

        assert_eq!(app.toggle_task(&id), Some(true));
        assert_eq!(app.toggle_task(&id), Some(false));
        assert!(!app.tasks[0].done);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_toggle_missing_is_noop(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("Keep")).unwrap();
        let before = app.tasks.clone();

        assert_eq!(app.toggle_task("no-such-id"), None);
        assert_eq!(app.tasks, before);

        let reloaded = ctx.app();
        assert_eq!(reloaded.tasks, before);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_update_overwrites_fields(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("Old title")).unwrap();
        let id = app.tasks[0].id.clone();
        let today = today_key();

        let updated = app
            .update_task(
                &id,
                TaskDraft {
                    title: "New title".to_string(),
                    description: "details".to_string(),
                    due_date: today.clone(),
                    priority: Some(Priority::High),
                    tags: vec!["work".to_string()],
                    subtasks: Vec::new(),
                },
            )
            .unwrap();
        assert!(updated);

        let task = &app.tasks[0];
        assert_eq!(task.title, "New title");
        assert_eq!(task.due_date, today);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.tags, vec!["work".to_string()]);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_update_missing_is_noop(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(!app.update_task("ghost", draft("Anything")).unwrap());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_subtask_reconciliation(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(TaskDraft {
            title: "Parent".to_string(),
            subtasks: vec![
                SubtaskDraft { id: None, text: "keep me".to_string() },
                SubtaskDraft { id: None, text: "drop me".to_string() },
            ],
            ..Default::default()
        })
        .unwrap();
        let task_id = app.tasks[0].id.clone();
        let kept_id = app.tasks[0].subtasks[0].id.clone();

        // Completion flags must survive an edit that matches by id
        assert_eq!(app.toggle_subtask(&task_id, &kept_id), Some(true));

        app.update_task(
            &task_id,
            TaskDraft {
                title: "Parent".to_string(),
                subtasks: vec![
                    SubtaskDraft { id: Some(kept_id.clone()), text: "keep me, reworded".to_string() },
                    SubtaskDraft { id: None, text: "   ".to_string() },
                    SubtaskDraft { id: None, text: "brand new".to_string() },
                ],
                ..Default::default()
            },
        )
        .unwrap();

        let subtasks = &app.tasks[0].subtasks;
        assert_eq!(subtasks.len(), 2);
        assert_eq!(subtasks[0].id, kept_id);
        assert_eq!(subtasks[0].text, "keep me, reworded");
        assert!(subtasks[0].done);
        assert_eq!(subtasks[1].text, "brand new");
        assert!(!subtasks[1].done);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_subtask_toggle_leaves_parent(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(TaskDraft {
            title: "Parent".to_string(),
            subtasks: vec![SubtaskDraft { id: None, text: "child".to_string() }],
            ..Default::default()
        })
        .unwrap();
        let task_id = app.tasks[0].id.clone();
        let subtask_id = app.tasks[0].subtasks[0].id.clone();

        app.toggle_subtask(&task_id, &subtask_id);
        assert!(app.tasks[0].subtasks[0].done);
        assert!(!app.tasks[0].done);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_delete_and_undo_restores_order(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("One")).unwrap();
        app.create_task(draft("Two")).unwrap();
        app.create_task(draft("Three")).unwrap();
        let before = app.tasks.clone();
        let middle_id = app.tasks[1].id.clone();

        assert_eq!(app.delete_task(&middle_id).as_deref(), Some("Two"));
        assert_eq!(app.tasks.len(), 2);

        assert_eq!(app.undo().as_deref(), Some("Two"));
        assert_eq!(app.tasks, before);

        // Restoration is persisted too
        let reloaded = ctx.app();
        assert_eq!(reloaded.tasks, before);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_delete_missing_is_noop(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("Only")).unwrap();
        assert_eq!(app.delete_task("ghost"), None);
        assert_eq!(app.tasks.len(), 1);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_tasks_survive_reload(ctx: &mut AppTestContext) {
        {
            let mut app = ctx.app();
            app.create_task(TaskDraft {
                title: "Persistent".to_string(),
                due_date: today_key(),
                priority: Some(Priority::High),
                tags: vec!["a".to_string(), "b".to_string()],
                ..Default::default()
            })
            .unwrap();
        }
        let reloaded = ctx.app();
        assert_eq!(reloaded.tasks.len(), 1);
        assert_eq!(reloaded.tasks[0].title, "Persistent");
        assert_eq!(reloaded.tasks[0].priority, Priority::High);
        assert_eq!(reloaded.tasks[0].tags, vec!["a".to_string(), "b".to_string()]);
    }
}
