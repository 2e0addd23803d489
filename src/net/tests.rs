// src/net/tests.rs

//! Unit tests for the net descriptor parser: document shape, attribute
//! validation and the permissive handling of unknown kinds.

#[cfg(test)]
mod parser_tests {
    use crate::error::{NetError, Origin};
    use crate::net::{parse_net, MetalLayer, PointKind, Primitive};

    fn assert_malformed(text: &str, needle: &str) {
        match parse_net(text) {
            Err(NetError::MalformedInput { reason }) => assert!(
                reason.contains(needle),
                "reason {:?} should mention {:?}",
                reason,
                needle
            ),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test_log::test]
    fn test_builder_output_parses() {
        let text = r#"<net grid_size="4" pin_count="2">
    <point x="0" y="0" layer="pins" type="pin" />
    <point x="3" y="2" layer="m2_m3" type="via" />
    <segment x1="0" y1="0" x2="3" y2="0" layer="m2" />
    <segment x1="3" y1="0" x2="3" y2="2" layer="m3" />
</net>"#;
        let net = parse_net(text).unwrap();
        assert_eq!(net.size, 4);
        assert_eq!(net.primitives.len(), 4);

        assert_eq!(
            net.primitives[0],
            Primitive::Point {
                x: 0,
                y: 0,
                kind: PointKind::Pin,
                origin: Origin {
                    tag: "point",
                    line: 2,
                    column: 5
                },
            }
        );
        assert!(matches!(
            net.primitives[1],
            Primitive::Point {
                x: 3,
                y: 2,
                kind: PointKind::Via,
                ..
            }
        ));
        assert!(matches!(
            net.primitives[3],
            Primitive::Segment {
                x1: 3,
                y1: 0,
                x2: 3,
                y2: 2,
                layer: MetalLayer::Metal3,
                ..
            }
        ));
        assert!(matches!(
            net.primitives[3],
            Primitive::Segment {
                origin: Origin { line: 5, .. },
                ..
            }
        ));
    }

    #[test_log::test]
    fn test_unknown_kinds_become_none_variants() {
        let text = r#"<net grid_size="3">
    <point x="1" y="1" layer="undef" type="undef" />
    <point x="1" y="2" type="PIN" />
    <segment x1="0" y1="0" x2="2" y2="0" layer="undef" />
</net>"#;
        let net = parse_net(text).unwrap();
        assert!(matches!(
            net.primitives[0],
            Primitive::Point {
                kind: PointKind::None,
                ..
            }
        ));
        // Matching is exact; case variants are unknown values.
        assert!(matches!(
            net.primitives[1],
            Primitive::Point {
                kind: PointKind::None,
                ..
            }
        ));
        assert!(matches!(
            net.primitives[2],
            Primitive::Segment {
                layer: MetalLayer::None,
                ..
            }
        ));
    }

    #[test_log::test]
    fn test_unknown_children_are_skipped() {
        let text = r#"<net grid_size="2">
    <!-- routed by smt -->
    <wire from="a" to="b" />
    <point x="1" y="1" type="pin" />
</net>"#;
        let net = parse_net(text).unwrap();
        assert_eq!(net.primitives.len(), 1);
    }

    #[test_log::test]
    fn test_empty_net() {
        let net = parse_net(r#"<net grid_size="1"/>"#).unwrap();
        assert_eq!(net.size, 1);
        assert!(net.primitives.is_empty());
    }

    #[test_log::test]
    fn test_whitespace_around_integers_is_accepted() {
        let net = parse_net(r#"<net grid_size=" 5 "><point x=" 2" y="3 " type="via"/></net>"#)
            .unwrap();
        assert_eq!(net.size, 5);
        assert!(matches!(
            net.primitives[0],
            Primitive::Point { x: 2, y: 3, .. }
        ));
    }

    #[test_log::test]
    fn test_grid_size_validation() {
        assert_malformed(r#"<net pin_count="3"/>"#, "lacks the `grid_size`");
        assert_malformed(r#"<net grid_size="abc"/>"#, "must be an integer");
        assert_malformed(r#"<net grid_size="2.5"/>"#, "must be an integer");
        assert_malformed(r#"<net grid_size=""/>"#, "must be an integer");
        assert_malformed(r#"<net grid_size="0"/>"#, "must be positive");
        assert_malformed(r#"<net grid_size="-4"/>"#, "must be positive");
    }

    #[test_log::test]
    fn test_not_xml_is_malformed() {
        assert_malformed("grid_size=3", "not a valid XML document");
        assert_malformed(r#"<net grid_size="3">"#, "not a valid XML document");
        assert_malformed("", "not a valid XML document");
    }

    #[test_log::test]
    fn test_missing_coordinate_is_reported_with_element() {
        let text = "<net grid_size=\"3\">\n  \
                    <segment x1=\"0\" y1=\"0\" y2=\"1\" layer=\"m2\"/>\n</net>";
        let err = parse_net(text).unwrap_err();
        assert_eq!(
            err,
            NetError::MissingAttribute {
                origin: Origin {
                    tag: "segment",
                    line: 2,
                    column: 3
                },
                attribute: "x2",
            }
        );
        assert_eq!(
            err.to_string(),
            "<segment> at 2:3: missing required attribute `x2`"
        );
    }

    #[test_log::test]
    fn test_missing_kind_attributes() {
        let err = parse_net(r#"<net grid_size="3"><point x="0" y="0"/></net>"#).unwrap_err();
        assert!(matches!(
            err,
            NetError::MissingAttribute {
                attribute: "type",
                ..
            }
        ));

        let err = parse_net(r#"<net grid_size="3"><segment x1="0" y1="0" x2="1" y2="0"/></net>"#)
            .unwrap_err();
        assert!(matches!(
            err,
            NetError::MissingAttribute {
                attribute: "layer",
                ..
            }
        ));
    }

    #[test_log::test]
    fn test_non_numeric_coordinate() {
        assert_malformed(
            r#"<net grid_size="3"><point x="one" y="0" type="pin"/></net>"#,
            "<point> at 1:20: attribute `x` must be an integer, found \"one\"",
        );
    }

    #[test_log::test]
    fn test_coordinate_beyond_i64_is_out_of_range() {
        assert_malformed(
            r#"<net grid_size="3"><point x="99999999999999999999" y="0" type="pin"/></net>"#,
            "<point> at 1:20: attribute `x` is out of range, found \"99999999999999999999\"",
        );
        assert_malformed(
            r#"<net grid_size="3"><point x="0" y="-99999999999999999999" type="pin"/></net>"#,
            "attribute `y` is out of range",
        );
        assert_malformed(
            r#"<net grid_size="99999999999999999999"/>"#,
            "attribute `grid_size` is too large",
        );
    }

    #[test_log::test]
    fn test_parser_does_not_bounds_check() {
        // Range checks happen against the grid during rasterization.
        let text = r#"<net grid_size="3"><segment x1="5" y1="0" x2="-1" y2="0" layer="m2"/></net>"#;
        let net = parse_net(text).unwrap();
        assert!(matches!(
            net.primitives[0],
            Primitive::Segment { x1: 5, x2: -1, .. }
        ));
    }
}
