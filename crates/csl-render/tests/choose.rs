//! Branch selection for `<choose>` blocks built from serialized trees.

use csl_model::{Condition, Label, Node};
use csl_render::{NumberElement, RenderContext, matches, number};
use std::collections::HashMap;

struct Item {
    item_type: String,
    variables: HashMap<String, String>,
}

impl Item {
    fn new(item_type: &str, variables: &[(&str, &str)]) -> Self {
        Self {
            item_type: item_type.to_string(),
            variables: variables
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl RenderContext for Item {
    fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    fn item_type(&self) -> &str {
        &self.item_type
    }
}

fn choose() -> Vec<Condition> {
    let node: Node = serde_json::from_str(
        r#"{
            "name": "choose",
            "children": [
                {"name": "if", "attributes": [
                    {"name": "type", "value": "chapter paper-conference"},
                    {"name": "match", "value": "any"}]},
                {"name": "else-if", "attributes": [
                    {"name": "is-numeric", "value": "volume"}]},
                {"name": "else-if", "attributes": [
                    {"name": "variable", "value": "DOI URL"},
                    {"name": "match", "value": "none"}]},
                {"name": "else"}
            ]
        }"#,
    )
    .expect("valid node json");

    node.all_children()
        .iter()
        .map(|child| Condition::from_node(child).expect("valid condition"))
        .collect()
}

fn branch(conditions: &[Condition], item: &Item) -> Option<usize> {
    conditions.iter().position(|c| matches(c, item))
}

#[test]
fn test_first_matching_branch_wins() {
    let conditions = choose();

    let chapter = Item::new("chapter", &[("volume", "3")]);
    assert_eq!(branch(&conditions, &chapter), Some(0));

    let book = Item::new("book", &[("volume", "3"), ("DOI", "10.1/x")]);
    assert_eq!(branch(&conditions, &book), Some(1));

    let unnumbered = Item::new("book", &[("volume", "second")]);
    assert_eq!(branch(&conditions, &unnumbered), Some(2));

    let online = Item::new("webpage", &[("URL", "https://example.com")]);
    assert_eq!(branch(&conditions, &online), Some(3));
}

#[test]
fn test_choose_rejects_other_elements() {
    let node = Node::new("text").with_attribute("variable", "title");
    let err = Condition::from_node(&node).unwrap_err();
    assert_eq!(err.code(), "Q-11-1");
}

#[test]
fn test_numeric_locators_parse_with_labels() {
    let item = Item::new("book", &[("locator", "pp. 4-5"), ("page", "12-14")]);

    let locator = item.variable("locator").expect("locator");
    assert!(!csl_render::is_numeric(locator));
    assert_eq!(
        number::parse(locator),
        [NumberElement::new("4–5", Some(Label::Page), true)]
    );

    let page = item.variable("page").expect("page");
    assert!(csl_render::is_numeric(page));
    assert_eq!(number::parse(page), [NumberElement::new("12–14", None, true)]);
}
