use serde_json::json;
use treebind::{Field, TreeBind};

/// Verifies that `#[treebind(crate = "treebind")]` is accepted and the
/// generated code compiles correctly. Uses the real crate name as a
/// self-referential alias so no workspace reconfiguration is needed.
#[derive(Debug, Default, TreeBind)]
#[treebind(crate = "treebind")]
struct AliasedConfig {
    #[treebind(nilable)]
    value: Field,
}

fn main() {
    let doc = json!({"value": 1});
    let tree = doc.as_object().expect("object literal");
    let cfg = AliasedConfig::from_tree(tree).expect("load");
    assert_eq!(cfg.value.get(), &json!(1));
}
