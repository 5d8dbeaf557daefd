#[cfg(test)]
mod tests {
    use dosa::db::db::Db;
    use dosa::libs::app::App;
    use dosa::libs::projection::budgets_view;
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

    fn assert_remaining_invariant(app: &App) {
        for budget in &app.budgets {
            let items: f64 = budget.items.iter().map(|i| i.amount).sum();
            let spent: f64 = budget.transactions.iter().map(|t| t.amount.abs()).sum();
            assert!((budget.remaining() - (items - spent)).abs() < f64::EPSILON);
        }
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_create_requires_name(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(app.create_budget("  ", "USD").is_err());
        assert!(app.budgets.is_empty());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_remaining_under_mixed_operations(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_budget("Monthly", "USD").unwrap();
        let id = app.budgets[0].id.clone();

        app.add_budget_item(&id, "Groceries", 500.0, "").unwrap();
        assert_remaining_invariant(&app);

        app.add_budget_item(&id, "Fun", 150.0, "").unwrap();
        assert_remaining_invariant(&app);

        // Expenses are negative, income positive; both count as "spent"
        // through their absolute value
        app.add_transaction(&id, "Weekly shop", -45.5).unwrap();
        assert_remaining_invariant(&app);
        app.add_transaction(&id, "Refund", 10.0).unwrap();
        assert_remaining_invariant(&app);

        let budget = &app.budgets[0];
        assert!((budget.total() - 650.0).abs() < f64::EPSILON);
        assert!((budget.spent() - 55.5).abs() < f64::EPSILON);
        assert!((budget.remaining() - 594.5).abs() < f64::EPSILON);

        let item_id = app.budgets[0].items[0].id.clone();
        app.delete_budget_item(&id, &item_id).unwrap();
        assert_remaining_invariant(&app);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_percent_used_zero_total(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_budget("Empty", "EUR").unwrap();
        let id = app.budgets[0].id.clone();
        app.add_transaction(&id, "Stray expense", -10.0).unwrap();

        assert_eq!(app.budgets[0].percent_used(), 0.0);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_percent_used(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_budget("Monthly", "USD").unwrap();
        let id = app.budgets[0].id.clone();
        app.add_budget_item(&id, "All", 200.0, "").unwrap();
        app.add_transaction(&id, "Half", -100.0).unwrap();

        assert!((app.budgets[0].percent_used() - 50.0).abs() < f64::EPSILON);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_item_delete_and_undo(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_budget("Monthly", "USD").unwrap();
        let id = app.budgets[0].id.clone();
        app.add_budget_item(&id, "First", 10.0, "").unwrap();
        app.add_budget_item(&id, "Second", 20.0, "").unwrap();
        app.add_budget_item(&id, "Third", 30.0, "").unwrap();
        let before = app.budgets[0].items.clone();
        let middle = app.budgets[0].items[1].id.clone();

        assert_eq!(app.delete_budget_item(&id, &middle).as_deref(), Some("Second"));
        assert_eq!(app.budgets[0].items.len(), 2);

        assert_eq!(app.undo().as_deref(), Some("Second"));
        assert_eq!(app.budgets[0].items, before);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_budget_delete_has_no_undo(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_budget("Doomed", "USD").unwrap();
        let id = app.budgets[0].id.clone();

        assert!(app.delete_budget(&id));
        assert!(app.budgets.is_empty());
        assert!(app.undo().is_none());
        assert!(!app.delete_budget(&id));
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_operations_on_missing_budget_are_noops(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(app.add_budget_item("ghost", "Item", 1.0, "").is_none());
        assert!(app.add_transaction("ghost", "Tx", -1.0).is_none());
        assert!(app.delete_budget_item("ghost", "item").is_none());
        assert!(app.budgets.is_empty());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_transaction_item_link_stays_unset(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_budget("Monthly", "USD").unwrap();
        let id = app.budgets[0].id.clone();
        app.add_transaction(&id, "Shop", -5.0).unwrap();

        assert!(app.budgets[0].transactions[0].item_id.is_none());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_global_aggregates(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.create_budget("A", "USD").unwrap();
        app.create_budget("B", "USD").unwrap();
        let a = app.budgets[0].id.clone();
        let b = app.budgets[1].id.clone();
        app.add_budget_item(&a, "ItemA", 100.0, "").unwrap();
        app.add_budget_item(&b, "ItemB", 50.0, "").unwrap();
        app.add_transaction(&a, "SpendA", -30.0).unwrap();

        let view = budgets_view(&app.budgets);
        assert!((view.total - 150.0).abs() < f64::EPSILON);
        assert!((view.spent - 30.0).abs() < f64::EPSILON);
        assert!((view.remaining - 120.0).abs() < f64::EPSILON);
        assert_eq!(view.rows.len(), 2);
    }
}
