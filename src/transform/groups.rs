//! Proxy-group selection.
//!
//! # Responsibilities
//! - Find the first group whose `name` is one of the selector labels
//! - Rename it to the canonical label
//! - Collapse `proxy-groups` to that single group
//!
//! # Design Decisions
//! - Exact, case-sensitive string match; no substring or case folding
//! - No match leaves `proxy-groups` exactly as it was (including absent)

use serde_yaml::{Mapping, Value};

/// Document key holding the proxy-group list.
pub const PROXY_GROUPS_KEY: &str = "proxy-groups";

/// Group names that identify the main selector group.
pub const SELECTOR_LABELS: [&str; 3] = ["代理", "proxy", "Proxy"];

/// Name given to the surviving selector group.
pub const CANONICAL_LABEL: &str = "Selection";

/// Collapse `proxy-groups` to the first selector group, renamed.
///
/// Returns the original name of the selected group, or `None` when nothing matched and
/// the document was left untouched.
pub fn collapse_proxy_groups(doc: &mut Mapping) -> Option<String> {
    let groups = doc.get_mut(PROXY_GROUPS_KEY)?.as_sequence_mut()?;
    let index = groups.iter().position(is_selector_group)?;

    let mut selected = groups.swap_remove(index);
    let group = selected.as_mapping_mut()?;
    let original = group.get("name").and_then(Value::as_str).map(str::to_owned);
    group.insert(Value::from("name"), Value::from(CANONICAL_LABEL));

    doc.insert(Value::from(PROXY_GROUPS_KEY), Value::Sequence(vec![selected]));
    original
}

fn is_selector_group(group: &Value) -> bool {
    group
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| SELECTOR_LABELS.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_first_match_wins_and_others_dropped() {
        let mut d = doc(
            r#"
proxy-groups:
  - name: other
  - name: proxy
    type: select
    proxies: [a, b]
  - name: Proxy
  - name: x
"#,
        );

        assert_eq!(collapse_proxy_groups(&mut d).as_deref(), Some("proxy"));

        let expected = doc(
            r#"
proxy-groups:
  - name: Selection
    type: select
    proxies: [a, b]
"#,
        );
        assert_eq!(d, expected);
    }

    #[test]
    fn test_chinese_label_matches() {
        let mut d = doc("proxy-groups:\n  - name: 代理\n    type: select\n");
        assert_eq!(collapse_proxy_groups(&mut d).as_deref(), Some("代理"));
        assert_eq!(d, doc("proxy-groups:\n  - name: Selection\n    type: select\n"));
    }

    #[test]
    fn test_match_is_exact() {
        let original = doc(
            r#"
proxy-groups:
  - name: PROXY
  - name: proxy-auto
  - name: " proxy"
  - name: other
"#,
        );
        let mut d = original.clone();
        assert_eq!(collapse_proxy_groups(&mut d), None);
        assert_eq!(d, original);
    }

    #[test]
    fn test_absent_key_stays_absent() {
        let mut d = doc("proxies: []\n");
        assert_eq!(collapse_proxy_groups(&mut d), None);
        assert!(!d.contains_key(PROXY_GROUPS_KEY));
    }

    #[test]
    fn test_non_sequence_and_non_mapping_entries_ignored() {
        let mut d = doc("proxy-groups: proxy\n");
        assert_eq!(collapse_proxy_groups(&mut d), None);

        let mut d = doc("proxy-groups:\n  - proxy\n  - {name: 1}\n  - {name: Proxy}\n");
        assert_eq!(collapse_proxy_groups(&mut d).as_deref(), Some("Proxy"));
        assert_eq!(d, doc("proxy-groups:\n  - {name: Selection}\n"));
    }

    #[test]
    fn test_name_from_merge_key_matches() {
        let mut d = crate::yaml::parse_mapping(
            "base: &b\n  name: proxy\n  type: select\nproxy-groups:\n  - name: other\n  - <<: *b\n    proxies: [a]\n",
        )
        .unwrap();

        assert_eq!(collapse_proxy_groups(&mut d).as_deref(), Some("proxy"));
        assert_eq!(
            d.get(PROXY_GROUPS_KEY),
            doc("proxy-groups:\n  - {name: Selection, type: select, proxies: [a]}\n")
                .get(PROXY_GROUPS_KEY)
        );
    }
}
