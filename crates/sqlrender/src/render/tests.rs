//! End-to-end rendering scenarios.

use crate::error::RenderError;
use crate::model::{
    Condition, OrderByModel, QueryExpressionModel, SelectModel, SetClause, SqlField,
};
use crate::param::ParameterSequence;
use crate::render::{
    InsertRenderer, NamedBindStrategy, QuestionMarkStrategy, SelectRenderer, UpdateRenderer,
};
use crate::value::Value;

fn users() -> QueryExpressionModel {
    QueryExpressionModel::builder("users").build()
}

#[test]
fn test_single_expression_identity() {
    // With no trailing clauses the statement is exactly the sole
    // expression's rendered text.
    let model = SelectModel::of(
        QueryExpressionModel::builder("users")
            .where_clause(Condition::eq("status", "active"))
            .build(),
    );
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert_eq!(statement.statement(), statement.query_expression());
    assert_eq!(
        statement.statement(),
        "select * from users where status = :p1"
    );
}

#[test]
fn test_union_parameters_are_disjoint() {
    let model = SelectModel::builder()
        .query_expression(
            QueryExpressionModel::builder("users")
                .where_clause(Condition::eq("status", "active"))
                .build(),
        )
        .query_expression(
            QueryExpressionModel::builder("archived_users")
                .connector("union")
                .where_clause(Condition::eq("status", "active"))
                .build(),
        )
        .query_expression(
            QueryExpressionModel::builder("banned_users")
                .connector("union all")
                .where_clause(Condition::gt("age", 18i32))
                .build(),
        )
        .build();
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert_eq!(
        statement.statement(),
        "select * from users where status = :p1 \
         union select * from archived_users where status = :p2 \
         union all select * from banned_users where age > :p3"
    );
    // Disjoint union of each expression's local keys: 1 + 1 + 1.
    let names: Vec<_> = statement.parameters().names().collect();
    assert_eq!(names, vec!["p1", "p2", "p3"]);
}

#[test]
fn test_order_by_rendering() {
    let col_a = SqlField::<String>::new("colA");
    let col_b = SqlField::<String>::new("colB");
    let model = SelectModel::builder()
        .query_expression(users())
        .order_by(OrderByModel::of(vec![col_a.asc(), col_b.desc()]))
        .build();
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert!(statement.statement().ends_with("order by colA, colB DESC"));
    assert!(statement.parameters().is_empty());
}

#[test]
fn test_order_by_uses_alias_when_present() {
    let created = SqlField::<i64>::new("created_at").with_alias("created");
    let model = SelectModel::builder()
        .query_expression(users())
        .order_by(OrderByModel::of(vec![created.desc()]))
        .build();
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert!(statement.statement().ends_with("order by created DESC"));
}

#[test]
fn test_limit_alone() {
    let model = SelectModel::builder()
        .query_expression(users())
        .limit(10)
        .build();
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert_eq!(statement.statement(), "select * from users limit :_limit");
    assert_eq!(statement.parameters().len(), 1);
    assert_eq!(statement.parameters().get("_limit"), Some(&Value::Int8(10)));
}

#[test]
fn test_offset_alone() {
    let model = SelectModel::builder()
        .query_expression(users())
        .offset(5)
        .build();
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert_eq!(statement.statement(), "select * from users offset :_offset");
    assert_eq!(statement.parameters().get("_offset"), Some(&Value::Int8(5)));
}

#[test]
fn test_offset_does_not_disturb_limit() {
    let with_limit = SelectModel::builder()
        .query_expression(users())
        .limit(10)
        .build();
    let with_both = SelectModel::builder()
        .query_expression(users())
        .limit(10)
        .offset(5)
        .build();
    let a = with_limit.render(&NamedBindStrategy).unwrap();
    let b = with_both.render(&NamedBindStrategy).unwrap();
    // Adding the offset adds exactly one parameter and leaves the limit
    // binding untouched.
    assert_eq!(a.parameters().get("_limit"), b.parameters().get("_limit"));
    assert_eq!(b.parameters().len(), a.parameters().len() + 1);
    assert_eq!(a.limit_clause(), b.limit_clause());
}

#[test]
fn test_end_to_end_limit_offset() {
    let model = SelectModel::builder()
        .query_expression(QueryExpressionModel::builder("foo").build())
        .limit(10)
        .offset(0)
        .build();
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert_eq!(
        statement.statement(),
        "select * from foo limit :_limit offset :_offset"
    );
    assert_eq!(statement.parameters().get("_limit"), Some(&Value::Int8(10)));
    assert_eq!(statement.parameters().get("_offset"), Some(&Value::Int8(0)));
}

#[test]
fn test_clause_assembly_order() {
    let model = SelectModel::builder()
        .query_expression(users())
        .order_by(OrderByModel::of(vec![SqlField::<i64>::new("id").asc()]))
        .limit(10)
        .offset(20)
        .build();
    let statement = model.render(&NamedBindStrategy).unwrap();
    assert_eq!(
        statement.statement(),
        "select * from users order by id limit :_limit offset :_offset"
    );
}

#[test]
fn test_render_twice_is_idempotent() {
    let model = SelectModel::builder()
        .query_expression(
            QueryExpressionModel::builder("users")
                .where_clause(Condition::and(vec![
                    Condition::eq("status", "active"),
                    Condition::gt("age", 18i32),
                ]))
                .build(),
        )
        .limit(10)
        .build();
    let first = model.render(&NamedBindStrategy).unwrap();
    let second = model.render(&NamedBindStrategy).unwrap();
    assert_eq!(first.statement(), second.statement());
    assert_eq!(first.parameters(), second.parameters());
}

#[test]
fn test_missing_query_expressions() {
    let model = SelectModel::builder().build();
    assert_eq!(
        model.render(&NamedBindStrategy).unwrap_err(),
        RenderError::MissingQueryExpressions
    );
}

#[test]
fn test_external_sequence_continues_numbering() {
    let sequence = ParameterSequence::new();
    assert_eq!(sequence.next(), 1);
    assert_eq!(sequence.next(), 2);

    let model = SelectModel::of(
        QueryExpressionModel::builder("users")
            .where_clause(Condition::eq("id", 7i64))
            .build(),
    );
    let statement = SelectRenderer::with_sequence(&model, &NamedBindStrategy, &sequence)
        .render()
        .unwrap();
    // The parent already consumed p1 and p2.
    assert_eq!(statement.statement(), "select * from users where id = :p3");
}

#[test]
fn test_question_mark_strategy() {
    let model = SelectModel::builder()
        .query_expression(
            QueryExpressionModel::builder("users")
                .where_clause(Condition::eq("status", "active"))
                .build(),
        )
        .limit(10)
        .build();
    let statement = model.render(&QuestionMarkStrategy).unwrap();
    assert_eq!(statement.statement(), "select * from users where status = ? limit ?");
    // Insertion order matches placeholder order for positional execution.
    let names: Vec<_> = statement.parameters().names().collect();
    assert_eq!(names, vec!["p1", "_limit"]);
    assert_eq!(statement.parameters().as_refs().len(), 2);
}

#[test]
fn test_update_set_and_where_share_sequence() {
    let set_clause = SetClause::builder()
        .set(SqlField::new("name"), "alice")
        .set_null(SqlField::<String>::new("nickname"))
        .set(SqlField::new("age"), 30i32)
        .build();
    let condition = Condition::eq("id", 1i64);
    let statement = UpdateRenderer::new("users", &set_clause, &NamedBindStrategy)
        .where_clause(&condition)
        .render()
        .unwrap();
    assert_eq!(
        statement.statement(),
        "update users set name = :p1, nickname = null, age = :p2 where id = :p3"
    );
    let names: Vec<_> = statement.parameters().names().collect();
    assert_eq!(names, vec!["p1", "p2", "p3"]);
}

#[test]
fn test_update_ignoring_alias() {
    let aliased = SetClause::builder()
        .set(SqlField::new("name").with_table_alias("u"), "alice")
        .build();
    let statement = UpdateRenderer::new("users", &aliased, &NamedBindStrategy)
        .render()
        .unwrap();
    assert_eq!(statement.statement(), "update users set u.name = :p1");

    let bare = SetClause::builder()
        .set(SqlField::new("name").with_table_alias("u"), "alice")
        .build_ignoring_alias();
    let statement = UpdateRenderer::new("users", &bare, &NamedBindStrategy)
        .render()
        .unwrap();
    assert_eq!(statement.statement(), "update users set name = :p1");
}

#[test]
fn test_update_requires_assignments() {
    let empty = SetClause::builder().build();
    let err = UpdateRenderer::new("users", &empty, &NamedBindStrategy)
        .render()
        .unwrap_err();
    assert_eq!(err, RenderError::EmptySetClause);
}

#[test]
fn test_insert_rendering() {
    let pairs = SetClause::builder()
        .set(SqlField::new("username"), "alice")
        .set(SqlField::new("email"), "alice@example.com")
        .set_null(SqlField::<String>::new("bio"))
        .build();
    let statement = InsertRenderer::new("users", &pairs, &NamedBindStrategy)
        .render()
        .unwrap();
    assert_eq!(statement.fields_phrase(), "(username, email, bio)");
    assert_eq!(statement.values_phrase(), "values (:p1, :p2, null)");
    assert_eq!(
        statement.statement(),
        "insert into users (username, email, bio) values (:p1, :p2, null)"
    );
    // The NULL slot binds nothing.
    assert_eq!(statement.parameters().len(), 2);
}

#[test]
fn test_insert_fields_render_bare() {
    let pairs = SetClause::builder()
        .set(SqlField::new("name").with_table_alias("u"), "alice")
        .build();
    let statement = InsertRenderer::new("users", &pairs, &NamedBindStrategy)
        .render()
        .unwrap();
    assert_eq!(statement.fields_phrase(), "(name)");
}

#[test]
fn test_update_and_insert_can_share_one_sequence() {
    // A caller composing several statements can thread one sequence through
    // all of them so the combined parameter space stays collision-free.
    let sequence = ParameterSequence::new();
    let set_clause = SetClause::builder()
        .set(SqlField::new("status"), "inactive")
        .build();
    let update = UpdateRenderer::new("users", &set_clause, &NamedBindStrategy)
        .sequence(&sequence)
        .render()
        .unwrap();
    let pairs = SetClause::builder()
        .set(SqlField::new("event"), "deactivated")
        .build();
    let insert = InsertRenderer::new("audit_log", &pairs, &NamedBindStrategy)
        .sequence(&sequence)
        .render()
        .unwrap();
    assert_eq!(update.statement(), "update users set status = :p1");
    assert_eq!(insert.values_phrase(), "values (:p2)");
}
