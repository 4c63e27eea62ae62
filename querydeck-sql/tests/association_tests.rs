use pretty_assertions::assert_eq;
use querydeck_sql::{QueryText, SavedQuery, find_queries_for_table, query_references_table};
use serde_json::json;

// ── query_references_table ───────────────────────────────────────

#[test]
fn schema_qualified_query_matches_bare_table() {
    assert!(query_references_table("SELECT * FROM public.users", "users"));
}

#[test]
fn bare_query_matches_schema_qualified_table() {
    assert!(query_references_table("SELECT * FROM users", "public.users"));
}

#[test]
fn exact_match_case_insensitive() {
    assert!(query_references_table("SELECT * FROM Orders", "ORDERS"));
}

#[test]
fn different_schemas_same_table_still_match() {
    assert!(query_references_table("SELECT * FROM archive.users", "public.users"));
}

#[test]
fn unrelated_table_does_not_match() {
    assert!(!query_references_table("SELECT * FROM users", "orders"));
    assert!(!query_references_table("SELECT * FROM users_archive", "users"));
}

#[test]
fn commented_reference_does_not_match() {
    assert!(!query_references_table("-- SELECT * FROM users\nSELECT 1", "users"));
}

#[test]
fn empty_inputs() {
    assert!(!query_references_table("", "users"));
    assert!(!query_references_table("SELECT * FROM users", ""));
    assert!(!query_references_table("SELECT * FROM users", "   "));
}

// ── find_queries_for_table ───────────────────────────────────────

#[test]
fn filters_saved_queries() {
    let queries = vec![
        SavedQuery::new("Active users", "SELECT * FROM users WHERE active"),
        SavedQuery::new("Revenue", "SELECT sum(total) FROM orders"),
        SavedQuery::new(
            "User orders",
            "SELECT * FROM public.users u JOIN orders o ON o.user_id = u.id",
        ),
    ];
    let found: Vec<&str> = find_queries_for_table(&queries, "users")
        .iter()
        .map(|q| q.name.as_str())
        .collect();
    assert_eq!(found, vec!["Active users", "User orders"]);
}

#[test]
fn json_records_use_conventional_fields() {
    let records = vec![
        json!({"id": 1, "query": "SELECT * FROM users"}),
        json!({"id": 2, "sql": "SELECT * FROM users"}),
        json!({"id": 3, "content": "SELECT * FROM users"}),
        json!({"id": 4, "body": "SELECT * FROM users"}),
        json!({"id": 5, "query": 42}),
        json!({"id": 6, "query": "", "sql": "SELECT * FROM users"}),
        json!("SELECT * FROM users"),
    ];
    let ids: Vec<i64> = find_queries_for_table(&records, "users")
        .iter()
        .filter_map(|r| r["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 6]);
}

#[test]
fn json_field_priority() {
    let record = json!({"query": "SELECT 1", "sql": "SELECT 2", "content": "SELECT 3"});
    assert_eq!(record.query_text(), Some("SELECT 1"));
    let record = json!({"sql": "SELECT 2", "content": "SELECT 3"});
    assert_eq!(record.query_text(), Some("SELECT 2"));
}

#[test]
fn plain_strings_are_records() {
    let queries = ["SELECT * FROM a", "SELECT * FROM b", "UPDATE a SET x = 1"];
    let found = find_queries_for_table(&queries, "a");
    assert_eq!(found, vec![&"SELECT * FROM a", &"UPDATE a SET x = 1"]);
}

#[test]
fn empty_collection() {
    let queries: Vec<SavedQuery> = Vec::new();
    assert!(find_queries_for_table(&queries, "users").is_empty());
}
