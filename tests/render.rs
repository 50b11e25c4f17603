// tests/render.rs
use lindenmayer::{
    OutputFormat, PathInterpreter, PathTrace, TraceConfig, koch_curve, rasterize, svg_document,
    write_svg,
};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn koch_trace(n: u32) -> PathTrace {
    let koch = koch_curve();
    PathInterpreter::new(TraceConfig::default())
        .with_commands(koch.commands.clone())
        .trace(&koch.expand(n))
}

#[test]
fn svg_document_strokes_the_polyline_over_the_bounds() {
    let markup = svg_document(&koch_trace(1)).unwrap().to_string();

    assert!(markup.contains("<polyline"), "{markup}");
    assert!(markup.contains(r#"fill="none""#), "{markup}");
    assert!(markup.contains(r#"stroke="black""#), "{markup}");
    // Koch generation 1 spans (0,0)..(30,10); the viewBox is exactly that.
    assert!(markup.contains(r#"viewBox="0.00 0.00 30.00 10.00""#), "{markup}");
    assert!(markup.contains("0.00,0.00 10.00,0.00 10.00,10.00"), "{markup}");
}

#[test]
fn png_bytes_carry_the_signature_and_viewbox_dimensions() {
    let markup = svg_document(&koch_trace(1)).unwrap().to_string();
    let png = rasterize(&markup).unwrap();

    assert_eq!(png[..8], PNG_SIGNATURE);
    // IHDR width and height are big-endian u32s at offsets 16 and 20.
    let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
    assert_eq!((width, height), (30, 10));
}

#[test]
fn degenerate_trace_still_renders() {
    // No commands registered at all: the trace is the single origin point.
    let trace = PathInterpreter::new(TraceConfig::default()).trace("F+F-");
    assert_eq!(trace.points.len(), 1);

    let markup = svg_document(&trace).unwrap().to_string();
    let png = rasterize(&markup).unwrap();
    assert_eq!(png[..8], PNG_SIGNATURE);
}

#[test]
fn write_svg_creates_the_file() {
    let path = std::env::temp_dir().join("lindenmayer-test-koch.svg");
    write_svg(&koch_trace(2), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"), "{written}");
    assert!(written.contains("<polyline"), "{written}");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn format_names_parse() {
    assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
    assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
    assert!("pdf".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::Png.extension(), "png");
}
