//! Tests for wire decoding and encoding.

use super::*;
use crate::color::SemanticColor;
use crate::schema::FieldKind;
use easel_common::Color;

fn pool() -> StringPool {
    StringPool::with_capacity(256)
}

/// One sample line per tool, covering hex and semantic colors.
const SAMPLE_LINES: &[&str] = &[
    r#"{"tool":"fill_rect","x":0,"y":0,"w":100,"h":50,"color":"FF0000"}"#,
    r#"{"tool":"stroke_rect","x":10.5,"y":20,"w":30,"h":40,"thickness":2,"color":"border"}"#,
    r#"{"tool":"fill_rounded_rect","x":1,"y":2,"w":3,"h":4,"radius":8,"color":"surface"}"#,
    r#"{"tool":"fill_circle","cx":250,"cy":200,"radius":40,"color":"primary"}"#,
    r#"{"tool":"fill_ellipse","cx":100,"cy":80,"rx":60,"ry":20,"color":"00FF7F"}"#,
    r#"{"tool":"stroke_circle","cx":5,"cy":6,"radius":7,"thickness":1.5,"color":"accent"}"#,
    r#"{"tool":"fill_triangle","x1":0,"y1":400,"x2":250,"y2":0,"x3":500,"y3":400,"color":"warning"}"#,
    r#"{"tool":"draw_line","x1":0,"y1":0,"x2":500,"y2":400,"thickness":3,"color":"text_muted"}"#,
    r#"{"tool":"draw_text","x":10,"y":10,"text":"Hello","font_size":16,"color":"primary"}"#,
    r#"{"tool":"draw_text_centered","cx":250,"cy":20,"text":"Title \"quoted\"","font_size":24,"color":"text"}"#,
    r#"{"tool":"set_background","color":"background"}"#,
];

#[test]
fn sample_lines_cover_every_tool() {
    let mut pool = pool();
    let mut seen: Vec<CommandKind> = SAMPLE_LINES
        .iter()
        .map(|line| decode(line, &mut pool).unwrap().kind())
        .collect();
    seen.dedup();
    assert_eq!(seen, CommandKind::ALL.to_vec());
}

#[test]
fn sample_lines_encode_back_verbatim() {
    let mut pool = pool();
    for line in SAMPLE_LINES {
        let cmd = decode(line, &mut pool).unwrap();
        assert_eq!(&encode(&cmd, &pool), line);
    }
}

#[test]
fn decode_of_encode_is_identity_for_every_variant() {
    let mut first = pool();
    let mut second = pool();
    for line in SAMPLE_LINES {
        let cmd = decode(line, &mut first).unwrap();
        let again = decode(&encode(&cmd, &first), &mut second).unwrap();
        assert_eq!(cmd, again);
    }
}

/// Edge values first, then a deterministic xorshift walk over finite f32
/// bit patterns.
fn finite_floats(seed: u32) -> impl Iterator<Item = f32> {
    let edges = [
        0.0,
        -0.0,
        1.0,
        -1.5,
        f32::MAX,
        f32::MIN,
        f32::MIN_POSITIVE,
        f32::EPSILON,
        f32::from_bits(1),
    ];
    let mut state = seed;
    let walk = std::iter::from_fn(move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        Some(f32::from_bits(state))
    });
    edges.into_iter().chain(walk.filter(|v| v.is_finite()))
}

/// Every semantic role plus hex tokens in each accepted spelling.
fn every_color_token() -> Vec<String> {
    let mut tokens: Vec<String> = SemanticColor::ALL
        .iter()
        .map(|role| role.name().to_string())
        .collect();
    tokens.extend(["000000", "FFFFFF", "#a1b2c3", "00ff7f"].map(String::from));
    tokens
}

#[test]
fn generated_lines_round_trip_for_every_variant() {
    let colors = every_color_token();
    let mut values = finite_floats(0x9E37_79B9);
    for kind in CommandKind::ALL {
        let schema = kind.schema();
        for (i, color) in colors.iter().cycle().take(2_000).enumerate() {
            let mut line = format!(r#"{{"tool":"{}""#, schema.name);
            for prop in schema.properties {
                let value = match prop.kind {
                    FieldKind::Number => {
                        serde_json::to_string(&values.next().unwrap()).unwrap()
                    }
                    FieldKind::Color => format!("\"{color}\""),
                    FieldKind::Text => format!("\"line {i}\""),
                };
                line.push_str(&format!(r#","{}":{}"#, prop.name, value));
            }
            line.push('}');

            let mut first = pool();
            let cmd = decode(&line, &mut first).unwrap();
            let encoded = encode(&cmd, &first);
            let mut second = pool();
            let again = decode(&encoded, &mut second).unwrap();
            assert_eq!(cmd, again, "{line}");
            assert_eq!(encode(&again, &second), encoded);
        }
    }
}

#[test]
fn fill_rect_with_semantic_color() {
    let mut pool = pool();
    let cmd = decode(
        r#"{"tool":"fill_rect","x":0,"y":0,"w":100,"h":50,"color":"primary"}"#,
        &mut pool,
    )
    .unwrap();
    assert_eq!(
        cmd,
        DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 50.0,
            color: ColorToken::Semantic(SemanticColor::Primary),
        }
    );
}

#[test]
fn text_is_stored_in_pool_under_alias() {
    let mut pool = pool();
    let cmd = decode(SAMPLE_LINES[8], &mut pool).unwrap();
    let text_ref = cmd.text_ref().unwrap();
    assert_eq!(pool.get(text_ref), "Hello");
    assert_eq!(text_ref, TextRef { offset: 0, len: 5 });
}

#[test]
fn hash_prefixed_hex_is_accepted_and_normalised() {
    let mut pool = pool();
    let cmd = decode(r##"{"tool":"set_background","color":"#0a0B0c"}"##, &mut pool).unwrap();
    assert_eq!(
        cmd,
        DrawCommand::SetBackground {
            color: ColorToken::Hex(Color::from_rgba(10, 11, 12, 255)),
        }
    );
    assert_eq!(
        encode(&cmd, &pool),
        r#"{"tool":"set_background","color":"0A0B0C"}"#
    );
}

#[test]
fn extra_fields_are_ignored() {
    let mut pool = pool();
    let cmd = decode(
        r#"{"tool":"set_background","color":"FFFFFF","opacity":0.5}"#,
        &mut pool,
    );
    assert!(cmd.is_ok());
}

#[test]
fn unknown_tool_is_rejected() {
    let mut pool = pool();
    let err = decode(r#"{"tool":"draw_star","x":1}"#, &mut pool).unwrap_err();
    assert_eq!(err, DecodeError::UnknownTool("draw_star".into()));
}

#[test]
fn missing_field_is_rejected() {
    let mut pool = pool();
    let err = decode(r#"{"tool":"fill_circle","cx":1,"cy":2,"color":"FFFFFF"}"#, &mut pool)
        .unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingField {
            tool: "fill_circle",
            field: "radius"
        }
    );
}

#[test]
fn missing_tool_key_is_a_missing_field() {
    let mut pool = pool();
    let err = decode(r#"{"x":1}"#, &mut pool).unwrap_err();
    assert!(matches!(err, DecodeError::MissingField { field: "tool", .. }));
}

#[test]
fn wrong_primitive_type_is_rejected() {
    let mut pool = pool();
    let err = decode(
        r#"{"tool":"fill_rect","x":"0","y":0,"w":1,"h":1,"color":"FFFFFF"}"#,
        &mut pool,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TypeMismatch {
            tool: "fill_rect",
            field: "x",
            ..
        }
    ));
}

#[test]
fn bad_color_is_a_type_mismatch() {
    let mut pool = pool();
    let err = decode(r#"{"tool":"set_background","color":"blue"}"#, &mut pool).unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { field: "color", .. }));
}

#[test]
fn rejected_line_does_not_consume_pool() {
    let mut pool = pool();
    // text is valid but font_size is not: nothing may be allocated
    let err = decode(
        r#"{"tool":"draw_text","x":0,"y":0,"text":"leak?","font_size":"big","color":"text"}"#,
        &mut pool,
    );
    assert!(err.is_err());
    assert_eq!(pool.used(), 0);
}

#[test]
fn oversized_text_reports_pool_exhaustion() {
    let mut pool = StringPool::with_capacity(4);
    let err = decode(SAMPLE_LINES[8], &mut pool).unwrap_err();
    assert_eq!(err, DecodeError::PoolExhausted { tool: "draw_text" });
}

#[test]
fn non_object_lines_are_syntax_errors() {
    let mut pool = pool();
    assert!(matches!(decode("[1,2]", &mut pool), Err(DecodeError::Syntax(_))));
    assert!(matches!(decode("{not json", &mut pool), Err(DecodeError::Syntax(_))));
}

#[test]
fn tool_names_map_both_ways() {
    for kind in CommandKind::ALL {
        assert_eq!(CommandKind::from_tool_name(kind.tool_name()), Some(kind));
        assert_eq!(kind.schema().name, kind.tool_name());
    }
    assert_eq!(CommandKind::from_tool_name("fill_square"), None);
}
