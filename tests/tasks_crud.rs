#[cfg(test)]
mod tests {
    use agenda::db::db::Db;
    use agenda::db::tasks::Tasks;
    use agenda::libs::dates::parse_human_date;
    use agenda::libs::error::StoreError;
    use agenda::libs::task::{NewTask, TaskFilter, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::open(temp_dir.path().join("agenda.db")).unwrap();
            TaskTestContext {
                _temp_dir: temp_dir,
                tasks,
            }
        }
    }

    fn new_task(name: &str, status: TaskStatus) -> NewTask {
        NewTask {
            name: name.to_string(),
            description: String::new(),
            start: parse_human_date("01/01/2025 09:00").unwrap(),
            end: parse_human_date("01/01/2025 10:00").unwrap(),
            task_type: "work".to_string(),
            status,
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_and_list_all(ctx: &mut TaskTestContext) {
        let first = ctx.tasks.insert(&new_task("Report", TaskStatus::NotDone)).unwrap();
        let second = ctx.tasks.insert(&new_task("Groceries", TaskStatus::Done)).unwrap();
        assert!(second > first);

        let all = ctx.tasks.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first);
        assert_eq!(all[0].name, "Report");
        assert_eq!(all[0].task_type, "work");
        assert_eq!(all[0].start, parse_human_date("01/01/2025 09:00").unwrap());
        assert_eq!(all[0].end, parse_human_date("01/01/2025 10:00").unwrap());
        assert_eq!(all[1].id, second);
        assert_eq!(all[1].status, TaskStatus::Done);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_dates_are_stored_in_canonical_form(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&new_task("Report", TaskStatus::NotDone)).unwrap();

        let conn = Db::connect(ctx.tasks.path()).unwrap();
        let (start, end): (String, String) = conn
            .query_row("SELECT \"start\", \"end\" FROM tasks WHERE id = ?1", [id], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(start, "2025-01-01 09:00");
        assert_eq!(end, "2025-01-01 10:00");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_by_status(ctx: &mut TaskTestContext) {
        ctx.tasks.insert(&new_task("Open 1", TaskStatus::NotDone)).unwrap();
        ctx.tasks.insert(&new_task("Closed", TaskStatus::Done)).unwrap();
        ctx.tasks.insert(&new_task("Open 2", TaskStatus::NotDone)).unwrap();

        let open = ctx.tasks.list_by_status(TaskStatus::NotDone).unwrap();
        let names: Vec<&str> = open.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Open 1", "Open 2"]);

        let done = ctx.tasks.fetch(TaskFilter::ByStatus(TaskStatus::Done)).unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].name, "Closed");

        assert_eq!(ctx.tasks.fetch(TaskFilter::All).unwrap().len(), 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_search_by_name_is_case_insensitive(ctx: &mut TaskTestContext) {
        ctx.tasks.insert(&new_task("Report", TaskStatus::NotDone)).unwrap();
        ctx.tasks.insert(&new_task("Weekly REPORT review", TaskStatus::Done)).unwrap();
        ctx.tasks.insert(&new_task("Groceries", TaskStatus::NotDone)).unwrap();

        let results = ctx.tasks.search_by_name("rep").unwrap();
        let names: Vec<&str> = results.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Report", "Weekly REPORT review"]);

        assert!(ctx.tasks.search_by_name("xyz").unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_search_matches_wildcards_literally(ctx: &mut TaskTestContext) {
        ctx.tasks.insert(&new_task("100% done", TaskStatus::NotDone)).unwrap();
        ctx.tasks.insert(&new_task("1000 things", TaskStatus::NotDone)).unwrap();
        ctx.tasks.insert(&new_task("snake_case", TaskStatus::NotDone)).unwrap();
        ctx.tasks.insert(&new_task("snakeXcase", TaskStatus::NotDone)).unwrap();

        let percent = ctx.tasks.search_by_name("0%").unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].name, "100% done");

        let underscore = ctx.tasks.search_by_name("e_c").unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].name, "snake_case");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&new_task("Report", TaskStatus::NotDone)).unwrap();

        assert!(ctx.tasks.set_status(id, TaskStatus::Done).unwrap());
        assert_eq!(ctx.tasks.get(id).unwrap().unwrap().status, TaskStatus::Done);

        // Setting the current status again still counts as an update.
        assert!(ctx.tasks.set_status(id, TaskStatus::Done).unwrap());

        assert!(ctx.tasks.set_status(id, TaskStatus::NotDone).unwrap());
        assert_eq!(ctx.tasks.get(id).unwrap().unwrap().status, TaskStatus::NotDone);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_status_on_missing_task(ctx: &mut TaskTestContext) {
        assert!(!ctx.tasks.set_status(42, TaskStatus::Done).unwrap());
        assert!(!ctx.tasks.set_status(42, TaskStatus::NotDone).unwrap());
        assert!(ctx.tasks.list_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_is_guarded_by_status(ctx: &mut TaskTestContext) {
        let id = ctx.tasks.insert(&new_task("Report", TaskStatus::NotDone)).unwrap();
        ctx.tasks.set_status(id, TaskStatus::Done).unwrap();

        assert!(!ctx.tasks.delete_if_not_done(id).unwrap());
        assert_eq!(ctx.tasks.list_all().unwrap().len(), 1);

        ctx.tasks.set_status(id, TaskStatus::NotDone).unwrap();
        assert!(ctx.tasks.delete_if_not_done(id).unwrap());
        assert!(ctx.tasks.list_all().unwrap().is_empty());
        assert!(ctx.tasks.get(id).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task(ctx: &mut TaskTestContext) {
        assert!(!ctx.tasks.delete_if_not_done(7).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_not_reused(ctx: &mut TaskTestContext) {
        ctx.tasks.insert(&new_task("First", TaskStatus::NotDone)).unwrap();
        let second = ctx.tasks.insert(&new_task("Second", TaskStatus::NotDone)).unwrap();
        assert!(ctx.tasks.delete_if_not_done(second).unwrap());

        let third = ctx.tasks.insert(&new_task("Third", TaskStatus::NotDone)).unwrap();
        assert!(third > second);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_initialize_is_idempotent(ctx: &mut TaskTestContext) {
        ctx.tasks.insert(&new_task("Report", TaskStatus::NotDone)).unwrap();

        ctx.tasks.initialize().unwrap();
        let reopened = Tasks::open(ctx.tasks.path()).unwrap();

        assert_eq!(reopened.list_all().unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_null_description_reads_as_empty(ctx: &mut TaskTestContext) {
        let conn = Db::connect(ctx.tasks.path()).unwrap();
        conn.execute(
            "INSERT INTO tasks (name, description, \"start\", \"end\", \"type\", status)
             VALUES ('Call', NULL, '2025-01-01 09:00', '2025-01-01 09:15', 'personal', 'not_done')",
            [],
        )
        .unwrap();

        let all = ctx.tasks.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_status_outside_domain_is_a_constraint_violation(ctx: &mut TaskTestContext) {
        let conn = Db::connect(ctx.tasks.path()).unwrap();
        let err = conn
            .execute(
                "INSERT INTO tasks (name, \"start\", \"end\", \"type\", status)
                 VALUES ('Call', '2025-01-01 09:00', '2025-01-01 09:15', 'personal', 'finished')",
                [],
            )
            .unwrap_err();

        assert!(matches!(StoreError::from(err), StoreError::ConstraintViolation(_)));
        assert!(ctx.tasks.list_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_missing_required_column_is_a_constraint_violation(ctx: &mut TaskTestContext) {
        let conn = Db::connect(ctx.tasks.path()).unwrap();
        let err = conn
            .execute(
                "INSERT INTO tasks (name, \"start\", \"type\", status)
                 VALUES ('Call', '2025-01-01 09:00', 'personal', 'not_done')",
                [],
            )
            .unwrap_err();

        assert!(matches!(StoreError::from(err), StoreError::ConstraintViolation(_)));
    }

    #[test]
    fn test_open_creates_missing_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("agenda.db");

        let tasks = Tasks::open(&path).unwrap();
        assert!(path.exists());
        assert!(tasks.list_all().unwrap().is_empty());
    }
}
