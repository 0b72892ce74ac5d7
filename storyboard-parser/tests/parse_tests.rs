// tests/parse_tests.rs

use storyboard_core::{AnimationType, Element, Layer};
use storyboard_parser::{parse, DiagnosticKind, Error, Parser, ParserConfig};

fn files(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(Element::file).collect()
}

const SCRIPT: &str = r#"[Events]
//Background and Video events
$bg="sb\\bg.jpg"
Sprite,Background,TopLeft,$bg,0,0
 F,0,0,5000,1
Sprite,Foreground,Centre,"sb/star.png",320,240
 M,0,1000,2000,100,200,300,400
 L,1000,3
  F,0,0,100,0,1
 S,0,1000,,0.5
//Storyboard Layer 3 (Foreground)
Sprite,Overlay,BottomCentre,"sb/title.png",320,480
 C,0,0,500,255,0,0
"#;

#[test]
fn parses_full_script() {
    let output = parse(SCRIPT);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);

    let timeline = output.timeline;
    assert_eq!((timeline.width, timeline.height), (854.0, 480.0));
    assert_eq!(files(&timeline.elements), vec!["sb/bg.jpg", "sb/star.png", "sb/title.png"]);

    let bg = &timeline.elements[0];
    assert_eq!((bg.x, bg.y), (107.0, 0.0));
    assert_eq!((bg.start_time, bg.end_time), (0.0, 5000.0));

    let star = &timeline.elements[1];
    assert_eq!(star.layer, Layer::Foreground);
    assert_eq!((star.x, star.y), (427.0, 240.0));
    // MoveX, MoveY, three loop fades and the scale
    assert_eq!(star.animations.len(), 6);
    assert_eq!((star.start_time, star.end_time), (1000.0, 2000.0));

    let fade_starts: Vec<f64> = star
        .animations
        .iter()
        .filter(|a| a.kind == AnimationType::Fade)
        .map(|a| a.start_time)
        .collect();
    assert_eq!(fade_starts, vec![1000.0, 1100.0, 1200.0]);

    let title = &timeline.elements[2];
    assert_eq!(title.animations[0].value_start, "#FF0000");
    assert_eq!(title.z_index, 2);
}

#[test]
fn loop_replicates_with_span_offsets() {
    let output = parse("Sprite,Background,Centre,\"a.png\",0,0\n L,1000,3\n  F,0,0,100,1\n");
    let anims = &output.timeline.elements[0].animations;

    assert_eq!(anims.len(), 3);
    let starts: Vec<f64> = anims.iter().map(|a| a.start_time).collect();
    assert_eq!(starts, vec![1000.0, 1100.0, 1200.0]);
    assert!(anims.iter().all(|a| a.duration == 100.0 && a.kind == AnimationType::Fade));
}

#[test]
fn loop_closed_at_end_of_input() {
    let output = parse("Sprite,Background,Centre,\"a.png\",0,0\n L,0,2\n  F,0,0,250,1");
    assert_eq!(output.timeline.elements[0].animations.len(), 2);
    assert_eq!(output.timeline.elements[0].end_time, 500.0);
}

#[test]
fn expands_animated_sprite() {
    let output = parse("Animation,Background,TopLeft,\"run.png\",0,0,4,250,LoopOnce");
    let elements = &output.timeline.elements;

    assert_eq!(elements.len(), 4);
    for (i, frame) in elements.iter().enumerate() {
        assert_eq!(frame.file(), format!("run{i}.png"));
        assert!(frame.frames.is_none());
        assert_eq!(frame.animations.len(), 2);
        assert!(frame.animations.iter().all(|a| a.kind == AnimationType::Fade));
        assert_eq!(frame.start_time, i as f64 * 250.0);
        assert_eq!(frame.end_time, (i + 1) as f64 * 250.0);
        assert_eq!(frame.z_index, i);
    }
}

#[test]
fn animated_sprite_loops_over_authored_span() {
    let script = "Animation,Foreground,Centre,\"fx/spark.png\",320,240,2,100\n F,0,0,1000,1\n";
    let output = parse(script);
    let elements = &output.timeline.elements;

    assert_eq!(elements.len(), 2);
    assert_eq!(files(elements), vec!["fx/spark0.png", "fx/spark1.png"]);
    // authored fade plus a show/hide pair for each of the five cycles
    for frame in elements {
        assert_eq!(frame.animations.len(), 1 + 5 * 2);
        assert_eq!(frame.animations[0].duration, 1000.0);
    }
}

#[test]
fn animated_sprite_falls_back_to_configured_loop_count() {
    let config = ParserConfig {
        fallback_loop_count: 3,
        ..ParserConfig::default()
    };
    // a zero frame delay leaves nothing to divide by
    let output = Parser::new(config).parse("Animation,0,Centre,\"a.png\",0,0,2,0");

    for frame in &output.timeline.elements {
        assert_eq!(frame.animations.len(), 3 * 2);
    }
}

#[test]
fn equal_start_times_keep_script_order() {
    let script = "\
Sprite,Background,Centre,\"first.png\",0,0
 F,0,500,600,1
Sprite,Background,Centre,\"second.png\",0,0
 F,0,500,600,1
Sprite,Background,Centre,\"early.png\",0,0
 F,0,100,600,1
";
    let output = parse(script);
    assert_eq!(
        files(&output.timeline.elements),
        vec!["early.png", "first.png", "second.png"]
    );
}

#[test]
fn malformed_line_is_isolated() {
    let script = "\
Sprite,Background,Centre,\"a.png\",0,0
 F,0,0,1000,1
 MX,0,0,1000,left,right
Sprite,Foreground,Centre,\"b.png\",0,0
 S,0,0,500,1,2
";
    let output = parse(script);

    assert_eq!(output.timeline.elements.len(), 2);
    assert_eq!(output.timeline.elements[0].animations.len(), 1);
    assert_eq!(output.timeline.elements[1].animations.len(), 1);

    assert_eq!(output.diagnostics.len(), 1);
    let diag = &output.diagnostics[0];
    assert_eq!(diag.line, 3);
    assert_eq!(diag.text, " MX,0,0,1000,left,right");
    assert!(matches!(diag.kind, DiagnosticKind::Malformed(Error::InvalidNumber { index: 4, .. })));
}

#[test]
fn malformed_element_drops_its_commands() {
    let script = "\
Sprite,Background,Centre,\"a.png\",x,0
 F,0,0,1000,1
Sprite,Background,Centre,\"b.png\",0,0
 F,0,0,1000,1
";
    let output = parse(script);

    assert_eq!(files(&output.timeline.elements), vec!["b.png"]);
    let kinds: Vec<&DiagnosticKind> = output.diagnostics.iter().map(|d| &d.kind).collect();
    assert!(matches!(kinds[0], DiagnosticKind::Malformed(_)));
    assert_eq!(kinds[1], &DiagnosticKind::UnattachedCommand { depth: 1 });
}

#[test]
fn triggers_and_parameters_are_ignored() {
    let script = "\
Sprite,Background,Centre,\"a.png\",0,0
 P,0,0,,A
 T,HitSoundClap,0,5000
  F,0,0,100,1
 F,0,0,100,1
";
    let output = parse(script);
    assert_eq!(output.timeline.elements[0].animations.len(), 1);
    // the fade under the trigger has no loop to join
    assert_eq!(
        output.diagnostics.iter().map(|d| &d.kind).collect::<Vec<_>>(),
        vec![&DiagnosticKind::UnattachedCommand { depth: 2 }]
    );
}

#[test]
fn element_without_animations_is_reported() {
    let output = parse("Sprite,Background,Centre,\"still.png\",0,0\n");
    assert_eq!(output.timeline.elements.len(), 1);
    assert_eq!(
        output.diagnostics[0].kind,
        DiagnosticKind::NoAnimations { file: "still.png".into() }
    );
}

#[test]
fn crlf_lines_parse() {
    let output = parse("Sprite,Background,Centre,\"a.png\",0,0\r\n F,0,0,100,0,1\r\n");
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(output.timeline.elements[0].animations[0].value_end, "1");
}

#[test]
fn leading_byte_order_mark_is_skipped() {
    let output = parse("\u{feff}[Events]\nSprite,Background,Centre,\"a.png\",0,0\n F,0,0,100,1\n");
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(output.timeline.elements.len(), 1);
}

#[test]
fn overlapping_variables_substitute_longest_name() {
    let output = parse("$a=1\n$ab=2\nSprite,Background,Centre,\"x.png\",$ab,$a\n F,0,0,1,1\n");

    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].line, 2);
    assert_eq!(
        output.diagnostics[0].kind,
        DiagnosticKind::AmbiguousVariable { name: "$ab".into(), other: "$a".into() }
    );

    let element = &output.timeline.elements[0];
    assert_eq!((element.x, element.y), (109.0, 1.0));
}

#[test]
fn empty_script_yields_empty_timeline() {
    let output = parse("");
    assert!(output.timeline.is_empty());
    assert!(output.diagnostics.is_empty());
}
