#[cfg(test)]
mod rendering_tests {
    use crate::{
        classify, Exporter, IdentifierStore, Node, NodeChild, NodeRole, OutputFormat,
        StyleAnnotation,
    };
    use tempfile::{tempdir, TempDir};

    const ALL_FORMATS: [OutputFormat; 3] = [
        OutputFormat::PlainText,
        OutputFormat::Markdown,
        OutputFormat::Wiki,
    ];

    fn style(bold: bool, italic: bool) -> NodeChild {
        NodeChild::Style(StyleAnnotation { bold, italic })
    }

    fn heading(text: &str) -> Node {
        let mut node = Node::new(text);
        node.children.push(style(true, false));
        node
    }

    fn requirement(text: &str, raw_id: &str) -> Node {
        let mut node = Node::new(text).with_raw_id(raw_id);
        node.children.push(style(false, true));
        node
    }

    fn container(text: &str, children: Vec<Node>) -> Node {
        let mut node = Node::new(text);
        node.children
            .extend(children.into_iter().map(NodeChild::Node));
        node
    }

    fn fresh_store() -> (TempDir, IdentifierStore) {
        let dir = tempdir().unwrap();
        let store = IdentifierStore::open(dir.path().join("doc.req")).unwrap();
        (dir, store)
    }

    fn render(format: OutputFormat, store: &mut IdentifierStore, node: &Node) -> String {
        Exporter::new(format.heading_format(), store)
            .export(node)
            .unwrap()
    }

    #[test]
    fn leaf_renders_as_a_paragraph_in_every_format() {
        let (_dir, mut store) = fresh_store();
        let leaf = Node::new("Just text");
        for format in ALL_FORMATS {
            assert_eq!(render(format, &mut store, &leaf), "Just text\n\n");
        }
    }

    #[test]
    fn heading_formats_at_depth_two() {
        let (_dir, mut store) = fresh_store();
        let tree = container(
            "Doc",
            vec![container("Part", vec![heading("Overview")])],
        );

        assert_eq!(
            render(OutputFormat::Markdown, &mut store, &tree),
            "Doc\n\nPart\n\n### Overview\n\n"
        );
        assert_eq!(
            render(OutputFormat::Wiki, &mut store, &tree),
            "Doc\n\nPart\n\nh3. Overview\n\n"
        );
        assert_eq!(
            render(OutputFormat::PlainText, &mut store, &tree),
            "Doc\n\nPart\n\nOverview\n\n"
        );
    }

    #[test]
    fn top_level_heading_gets_one_marker() {
        let (_dir, mut store) = fresh_store();
        let node = heading("Title");
        assert_eq!(
            render(OutputFormat::Markdown, &mut store, &node),
            "# Title\n\n"
        );
        assert_eq!(render(OutputFormat::Wiki, &mut store, &node), "h1. Title\n\n");
    }

    #[test]
    fn first_requirement_in_a_fresh_store_is_number_two_in_every_format() {
        let (_dir, mut store) = fresh_store();
        let node = requirement("Must support X", "ID_7");

        // All passes of one run share the store, so every format agrees.
        for format in ALL_FORMATS {
            assert_eq!(
                render(format, &mut store, &node),
                "Requirement 2: Must support X\n\n"
            );
        }
    }

    #[test]
    fn requirement_numbers_match_across_formats_in_one_run() {
        let (_dir, mut store) = fresh_store();
        let tree = container(
            "Spec",
            vec![
                requirement("First obligation", "ID_a"),
                requirement("Second obligation", "ID_b"),
            ],
        );

        let markdown = render(OutputFormat::Markdown, &mut store, &tree);
        let wiki = render(OutputFormat::Wiki, &mut store, &tree);
        assert_eq!(markdown, wiki);
        assert!(markdown.contains("Requirement 2: First obligation\n\n"));
        assert!(markdown.contains("Requirement 3: Second obligation\n\n"));
    }

    #[test]
    fn requirement_without_identifier_is_an_error() {
        let (_dir, mut store) = fresh_store();
        let mut node = Node::new("Orphan obligation");
        node.children.push(style(false, true));

        let result = Exporter::new(OutputFormat::PlainText.heading_format(), &mut store)
            .export(&node);
        assert!(result.is_err());
    }

    #[test]
    fn container_fallback_introduces_children_once() {
        let (_dir, mut store) = fresh_store();
        let tree = container(
            "Parent",
            vec![Node::new("Child one"), Node::new("Child two")],
        );
        assert_eq!(
            render(OutputFormat::Markdown, &mut store, &tree),
            "Parent\n\nChild one\n\nChild two\n\n"
        );
    }

    #[test]
    fn unflagged_annotation_renders_nothing() {
        let (_dir, mut store) = fresh_store();
        let mut node = Node::new("Styled but plain");
        node.children.push(style(false, false));
        for format in ALL_FORMATS {
            assert_eq!(render(format, &mut store, &node), "");
        }
    }

    #[test]
    fn first_flagged_annotation_decides_the_role() {
        let mut bold_then_italic = Node::new("n");
        bold_then_italic.children.push(style(true, false));
        bold_then_italic.children.push(style(false, true));
        assert_eq!(classify(&bold_then_italic), NodeRole::Heading);

        let mut italic_then_bold = Node::new("n");
        italic_then_bold.children.push(style(false, true));
        italic_then_bold.children.push(style(true, false));
        assert_eq!(classify(&italic_then_bold), NodeRole::Requirement);

        // Only bold-then-heading is rendered; no requirement line appears.
        let (_dir, mut store) = fresh_store();
        let mut node = heading("Both");
        node.children.push(style(false, true));
        node.raw_id = Some("ID_both".into());
        assert_eq!(
            render(OutputFormat::Markdown, &mut store, &node),
            "# Both\n\n"
        );
    }

    #[test]
    fn bold_wins_within_a_single_annotation() {
        let mut node = Node::new("n");
        node.children.push(style(true, true));
        assert_eq!(classify(&node), NodeRole::Heading);
    }

    #[test]
    fn markdown_depth_beyond_six_levels_is_not_clamped() {
        let (_dir, mut store) = fresh_store();
        // Heading ends up at depth 6, one past Markdown's deepest level.
        let mut tree = heading("Deep");
        for _ in 0..6 {
            tree = container("Wrap", vec![tree]);
        }
        let output = render(OutputFormat::Markdown, &mut store, &tree);
        assert!(output.ends_with("####### Deep\n\n"));
    }

    #[test]
    fn rendering_is_deterministic_for_a_fixed_store() {
        let (_dir, mut store) = fresh_store();
        let tree = container(
            "Doc",
            vec![heading("Section"), requirement("Obligation", "ID_1")],
        );
        let first = render(OutputFormat::Wiki, &mut store, &tree);
        let second = render(OutputFormat::Wiki, &mut store, &tree);
        assert_eq!(first, second);
    }

    #[test]
    fn requirement_numbers_stick_to_identifiers_when_reordered() {
        let (_dir, mut store) = fresh_store();

        let original = container(
            "Spec",
            vec![
                requirement("Alpha", "ID_alpha"),
                requirement("Beta", "ID_beta"),
            ],
        );
        let reordered = container(
            "Spec",
            vec![
                requirement("Beta", "ID_beta"),
                requirement("Alpha", "ID_alpha"),
            ],
        );

        render(OutputFormat::PlainText, &mut store, &original);
        let output = render(OutputFormat::PlainText, &mut store, &reordered);
        assert!(output.contains("Requirement 3: Beta\n\n"));
        assert!(output.contains("Requirement 2: Alpha\n\n"));
    }
}
