//! Property tests for the indentation parser and renderers

use orgchart::{parse, render, OrgTree, OutputFormat};
use proptest::prelude::*;

/// A well-formed outline: an unindented root followed by entries whose
/// indentation never jumps past "one deeper than some open manager".
fn outline() -> impl Strategy<Value = String> {
    prop::collection::vec((0usize..6, "[A-Za-z][A-Za-z .&'-]{0,15}"), 0..40).prop_map(
        |entries| {
            let mut text = String::from("Root\n");
            let mut open = vec![0usize];
            for (step, name) in entries {
                let depth = step % open.len() + 1;
                open.truncate(depth);
                let indent = open[depth - 1] + 1 + step;
                open.push(indent);
                text.push_str(&" ".repeat(indent));
                text.push_str(name.trim_end());
                text.push('\n');
            }
            text
        },
    )
}

fn check_parent_property(tree: &OrgTree) {
    for (id, _) in tree.walk() {
        let node = tree.node(id);
        if let Some(parent) = node.parent() {
            let manager = tree.node(parent);
            assert!(manager.indent() < node.indent());
            assert!(manager.line() < node.line());
            assert!(parent.index() < id.index());
        }
    }
}

proptest! {
    #[test]
    fn prop_parent_is_earlier_and_shallower(input in outline()) {
        let tree = parse(&input).unwrap();
        check_parent_property(&tree);
        prop_assert_eq!(tree.walk().count(), tree.len());
    }

    #[test]
    fn prop_arbitrary_text_never_panics(input in "[ \t#a-z\n]{0,200}") {
        if let Ok(tree) = parse(&input) {
            check_parent_property(&tree);
        }
    }

    #[test]
    fn prop_rendering_is_deterministic(input in outline()) {
        for format in OutputFormat::ALL {
            let first = render(&input, format).unwrap();
            let second = render(&input, format).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_tree_output_has_one_line_per_node(input in outline()) {
        let tree = parse(&input).unwrap();
        let output = render(&input, OutputFormat::Tree).unwrap();
        prop_assert_eq!(output.lines().count(), tree.len());
        prop_assert_eq!(
            render(&input, OutputFormat::Mermaid).unwrap().matches(" --> ").count(),
            tree.len() - 1
        );
    }
}
