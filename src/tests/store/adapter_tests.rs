use super::*;
use crate::model::ItemId;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        anyhow::bail!("device unavailable")
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        anyhow::bail!("device unavailable")
    }
}

fn item(id: &str, title: &str, completed: bool) -> Item {
    Item {
        id: ItemId(id.to_string()),
        title: title.to_string(),
        completed,
    }
}

#[test]
fn missing_namespace_loads_empty() {
    let store = MemoryStore::new();
    assert!(load_items(&store, "todos").is_empty());
}

#[test]
fn save_then_load_keeps_order_and_fields() -> Result<()> {
    let mut store = MemoryStore::new();
    let items = vec![
        item("b", "second letter", true),
        item("a", "first letter", false),
        item("c", "  padded stays as saved ", false),
    ];
    save_items(&mut store, "todos", &items)?;
    assert_eq!(load_items(&store, "todos"), items);
    Ok(())
}

#[test]
fn namespaces_do_not_share_values() -> Result<()> {
    let mut store = MemoryStore::new();
    save_items(&mut store, "work", &[item("1", "ship", false)])?;
    assert!(load_items(&store, "home").is_empty());
    assert_eq!(load_items(&store, "work").len(), 1);
    Ok(())
}

#[test]
fn malformed_values_load_empty() {
    for raw in [
        "",
        "not json",
        "null",
        "{\"id\":\"1\",\"title\":\"x\",\"completed\":false}",
        "[{\"id\":\"1\",\"title\":\"x\"}]",
        "[{\"id\":1,\"title\":\"x\",\"completed\":false}]",
        "[{\"id\":\"1\",\"title\":\"x\",\"completed\":\"yes\"}]",
    ] {
        let store = MemoryStore::with_entry("todos", raw);
        assert!(load_items(&store, "todos").is_empty(), "raw={:?}", raw);
    }
}

#[test]
fn repeated_ids_are_malformed() {
    let raw = r#"[{"id":"d","title":"A","completed":false},{"id":"d","title":"B","completed":false}]"#;
    let err = parse_items(raw).unwrap_err();
    assert!(format!("{:#}", err).contains("more than once"), "{:#}", err);

    let store = MemoryStore::with_entry("todos", raw);
    assert!(load_items(&store, "todos").is_empty());
}

#[test]
fn extra_fields_are_ignored() {
    let store = MemoryStore::with_entry(
        "todos",
        r#"[{"id":"1","title":"x","completed":true,"order":3}]"#,
    );
    assert_eq!(load_items(&store, "todos"), vec![item("1", "x", true)]);
}

#[test]
fn unreadable_store_loads_empty() {
    assert!(load_items(&BrokenStore, "todos").is_empty());
}

#[test]
fn failed_save_reports_namespace() {
    let err = save_items(&mut BrokenStore, "todos", &[]).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("save namespace todos"), "{}", msg);
    assert!(msg.contains("device unavailable"), "{}", msg);
}

#[test]
fn persisted_layout_is_a_plain_array() -> Result<()> {
    let mut store = MemoryStore::new();
    save_items(&mut store, "todos", &[item("1", "x", false)])?;
    let raw = store.get("todos")?.unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(
        value,
        serde_json::json!([{"id": "1", "title": "x", "completed": false}])
    );
    Ok(())
}

#[test]
fn keys_are_restricted_to_file_safe_names() {
    assert!(validate_key("todos-checklist").is_ok());
    assert!(validate_key("work_2.v1").is_ok());
    assert!(validate_key("").is_err());
    assert!(validate_key("..").is_err());
    assert!(validate_key("a/b").is_err());
    assert!(validate_key("with space").is_err());
}
