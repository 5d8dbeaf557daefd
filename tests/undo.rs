#[cfg(test)]
mod tests {
    use dosa::db::db::Db;
    use dosa::libs::app::App;
    use dosa::libs::task::TaskDraft;
    use dosa::libs::undo::{UndoAction, UndoSlot};
    use std::time::Duration;
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
    fn test_second_delete_overwrites_slot(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("One")).unwrap();
        app.create_task(draft("Two")).unwrap();
        let one = app.tasks[0].id.clone();
        let two = app.tasks[1].id.clone();

        app.delete_task(&one);
        app.delete_task(&two);

        // Only the latest deletion can be reversed; the first is permanent
        assert_eq!(app.undo().as_deref(), Some("Two"));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Two");
        assert!(app.undo().is_none());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_undo_twice_is_noop(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("Solo")).unwrap();
        let id = app.tasks[0].id.clone();

        app.delete_task(&id);
        assert!(app.undo().is_some());
        assert!(app.undo().is_none());
        assert_eq!(app.tasks.len(), 1);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_expired_undo_is_noop(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_task(draft("Gone")).unwrap();
        let id = app.tasks[0].id.clone();
        let title = app.delete_task(&id).unwrap();
        assert_eq!(title, "Gone");

        // Re-arm the same kind of action with an already-elapsed window
        let task = dosa::libs::task::Task {
            id: "re-armed".to_string(),
            title: "Gone".to_string(),
            description: String::new(),
            due_date: String::new(),
            priority: dosa::libs::task::Priority::Medium,
            tags: Vec::new(),
            subtasks: Vec::new(),
            done: false,
            order: 1,
        };
        app.undo_slot_mut().arm_with_window(UndoAction::Task { index: 0, task }, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(20));

        assert!(app.undo().is_none());
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_slot_capacity_is_one() {
        let mut slot = UndoSlot::new();
        assert!(!slot.is_armed());

        let note = dosa::libs::note::Note {
            id: "n1".to_string(),
            title: "First".to_string(),
            body_markdown: String::new(),
            tags: Vec::new(),
            updated_at: 0,
        };
        let second = dosa::libs::note::Note { id: "n2".to_string(), title: "Second".to_string(), ..note.clone() };

        slot.arm(UndoAction::Note { index: 0, note });
        slot.arm(UndoAction::Note { index: 0, note: second });
        assert!(slot.is_armed());

        match slot.take() {
            Some(UndoAction::Note { note, .. }) => assert_eq!(note.title, "Second"),
            other => panic!("unexpected slot contents: {other:?}"),
        }
        assert!(!slot.is_armed());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_slot_expiry() {
        let mut slot = UndoSlot::new();
        let note = dosa::libs::note::Note {
            id: "n1".to_string(),
            title: "Ephemeral".to_string(),
            body_markdown: String::new(),
            tags: Vec::new(),
            updated_at: 0,
        };
        slot.arm_with_window(UndoAction::Note { index: 0, note }, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(20));
        assert!(slot.take().is_none());
    }
}
