use pretty_assertions::assert_eq;
use querydeck_sql::{
    ParameterType, PlaceholderSyntax, SavedQuery, StatementType, analyze_query, classify_statement,
};
use std::collections::BTreeSet;

// ── Statement classification ─────────────────────────────────────

#[test]
fn classify_common_statements() {
    assert_eq!(classify_statement("SELECT 1"), StatementType::Select);
    assert_eq!(classify_statement("with x as (select 1) select * from x"), StatementType::Select);
    assert_eq!(classify_statement("INSERT INTO t VALUES (1)"), StatementType::Insert);
    assert_eq!(classify_statement("update t set a = 1"), StatementType::Update);
    assert_eq!(classify_statement("DELETE FROM t"), StatementType::Delete);
    assert_eq!(classify_statement("CREATE TABLE t (id int)"), StatementType::CreateTable);
    assert_eq!(classify_statement("ALTER TABLE t ADD c int"), StatementType::AlterTable);
    assert_eq!(classify_statement("VACUUM"), StatementType::Other);
    assert_eq!(classify_statement(""), StatementType::Other);
}

#[test]
fn classify_skips_leading_comments() {
    assert_eq!(
        classify_statement("/* header */\n-- note\n  delete from t"),
        StatementType::Delete
    );
}

#[test]
fn mutation_flag() {
    assert!(!StatementType::Select.is_mutation());
    assert!(!StatementType::Other.is_mutation());
    assert!(StatementType::Insert.is_mutation());
    assert!(StatementType::AlterTable.is_mutation());
}

// ── Whole-query analysis ─────────────────────────────────────────

#[test]
fn analyze_bundles_everything() {
    let analysis = analyze_query(
        "SELECT * FROM orders o JOIN users u ON u.id = o.user_id WHERE o.total > :min_total",
    );
    assert_eq!(analysis.statement_type, StatementType::Select);
    assert_eq!(
        analysis.tables,
        ["orders", "users"].iter().map(|s| s.to_string()).collect::<BTreeSet<_>>()
    );
    assert_eq!(analysis.parameters.len(), 1);
    assert_eq!(analysis.parameters[0].param_type, ParameterType::Number);
}

#[test]
fn analysis_serializes_lowercase_tags() {
    let analysis = analyze_query("SELECT * FROM t WHERE a = ${flag}");
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["statement_type"], "select");
    assert_eq!(json["tables"], serde_json::json!(["t"]));
    assert_eq!(json["parameters"][0]["param_type"], "boolean");
    assert_eq!(json["parameters"][0]["syntax"], "dollar");
    assert_eq!(json["parameters"][0]["placeholder"], "${flag}");
}

// ── Enums ────────────────────────────────────────────────────────

#[test]
fn parameter_type_parse_and_display() {
    for ty in [
        ParameterType::Date,
        ParameterType::Number,
        ParameterType::Boolean,
        ParameterType::Text,
    ] {
        assert_eq!(ty.to_string().parse::<ParameterType>().unwrap(), ty);
    }
    assert_eq!("NUMBER".parse::<ParameterType>().unwrap(), ParameterType::Number);
}

#[test]
fn placeholder_rendering() {
    assert_eq!(PlaceholderSyntax::Colon.placeholder("id"), ":id");
    assert_eq!(PlaceholderSyntax::Dollar.placeholder("id"), "${id}");
    assert_eq!(PlaceholderSyntax::Mustache.placeholder("id"), "{{id}}");
}

#[test]
fn rendered_placeholders_are_detected() {
    for syntax in [
        PlaceholderSyntax::Colon,
        PlaceholderSyntax::Dollar,
        PlaceholderSyntax::Mustache,
    ] {
        let sql = format!("SELECT * FROM t WHERE x = {}", syntax.placeholder("x"));
        let params = querydeck_sql::detect_parameters(&sql);
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].syntax, syntax);
    }
}

// ── SavedQuery ───────────────────────────────────────────────────

#[test]
fn saved_query_new() {
    let q = SavedQuery::new("Orders", "SELECT * FROM orders").with_description("all orders");
    assert_eq!(q.name, "Orders");
    assert_eq!(q.description.as_deref(), Some("all orders"));
    assert!(!q.is_view);
    assert_eq!(q.created_at, q.modified_at);
    assert!(uuid::Uuid::parse_str(&q.id).is_ok());
}

#[test]
fn saved_query_ids_are_unique() {
    let a = SavedQuery::new("a", "SELECT 1");
    let b = SavedQuery::new("a", "SELECT 1");
    assert_ne!(a.id, b.id);
}

#[test]
fn saved_query_tables() {
    let q = SavedQuery::new("Join", "SELECT * FROM a x JOIN b y ON true");
    assert_eq!(q.tables().into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn saved_query_deserializes_without_is_view() {
    let q: SavedQuery = serde_json::from_str(
        r#"{"id":"1","name":"n","sql":"SELECT 1","created_at":1,"modified_at":2}"#,
    )
    .unwrap();
    assert!(!q.is_view);
    assert!(q.description.is_none());
    assert_eq!(q.modified_at, 2);
}
