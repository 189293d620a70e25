//! Reuse a cached baseline condition across requests.
//!
//! Run with: cargo run -p sqlcond --example condition

use sqlcond::{Condition, Dialect, JoinType, Placeholder, RenderConfig, args};

fn baseline() -> Condition {
    let mut cond = Condition::new();
    cond.set_join(JoinType::Left, "roles r", "r.id = u.role_id", args![])
        .set_where("u.deleted_at IS NULL", args![])
        .set_order(["-u.created_at"])
        .set_limit(20);
    cond
}

fn main() -> sqlcond::CondResult<()> {
    let cached = baseline();

    // Request A: filter by several ids, Postgres markers.
    let mut scope = Condition::new();
    scope.set_where("u.id IN (?)", args![vec![3i64, 5, 8]]);
    let mut request = cached.clone();
    request.merge(&scope);
    let rendered = request.render(&mut Placeholder::dollar())?;
    println!("SELECT u.* FROM users u {}", rendered.sql());
    println!("  args = {}", serde_json::to_string(rendered.args()).unwrap_or_default());

    // Request B: MySQL markers, UPDATE-style use after the SET list.
    let mut request = cached.clone();
    request
        .set_where("u.status = ?", args!["inactive"])
        .reset(&[sqlcond::Category::Join, sqlcond::Category::Order, sqlcond::Category::Limit]);
    let config = RenderConfig::new().with_dialect(Dialect::MySql);
    let rendered = request.render_with(&config)?;
    println!("UPDATE users u SET name = ? {}", rendered.sql());

    // The cached baseline is untouched.
    println!("baseline: {}", cached.render_for(Dialect::Postgres)?.sql());
    Ok(())
}
