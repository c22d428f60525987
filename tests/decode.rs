use image::{Rgba, RgbaImage};
use omniscan::decode::{
    default_decoder, first_payload, format_results, SymbolDecoder, NO_SYMBOL_TEXT,
};

const MODULE: u32 = 8;
const QUIET: u32 = 4;

/// Rasterize a QR code for `payload` onto a white canvas at `(left, top)`.
fn draw_qr(canvas: &mut RgbaImage, payload: &str, left: u32, top: u32) {
    let code = qrcode::QrCode::new(payload.as_bytes()).unwrap();
    let width = code.width();
    let colors = code.to_colors();
    for y in 0..width {
        for x in 0..width {
            if colors[y * width + x] == qrcode::Color::Dark {
                for dy in 0..MODULE {
                    for dx in 0..MODULE {
                        let px = left + (x as u32 + QUIET) * MODULE + dx;
                        let py = top + (y as u32 + QUIET) * MODULE + dy;
                        canvas.put_pixel(px, py, Rgba([0, 0, 0, 255]));
                    }
                }
            }
        }
    }
}

fn qr_side(payload: &str) -> u32 {
    let code = qrcode::QrCode::new(payload.as_bytes()).unwrap();
    (code.width() as u32 + 2 * QUIET) * MODULE
}

fn qr_image(payload: &str) -> RgbaImage {
    let side = qr_side(payload);
    let mut canvas = RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 255]));
    draw_qr(&mut canvas, payload, 0, 0);
    canvas
}

#[test]
fn blank_image_yields_no_symbols() {
    let decoder = default_decoder();
    let blank = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
    let symbols = decoder.decode(&blank);
    assert!(symbols.is_empty());
    assert_eq!(format_results(&symbols), NO_SYMBOL_TEXT);
    assert!(first_payload(&symbols).is_none());
}

#[test]
fn decodes_a_generated_qr() {
    let decoder = default_decoder();
    let symbols = decoder.decode(&qr_image("HELLO"));
    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].kind, "QRCODE");
    assert_eq!(symbols[0].data, "HELLO");
}

#[test]
fn upload_flow_decodes_a_saved_file() {
    // The upload path goes through an image file on disk; make sure the
    // decode survives the PNG round trip.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.png");
    qr_image("HELLO").save(&path).unwrap();

    let opened = image::open(&path).unwrap().to_rgba8();
    let symbols = default_decoder().decode(&opened);

    assert_eq!(first_payload(&symbols).as_deref(), Some("HELLO"));
    let panel = format_results(&symbols);
    assert!(panel.contains("HELLO"));
    assert!(panel.contains("QRCODE"));
}

#[test]
fn finds_every_symbol_in_the_frame() {
    let left = qr_side("FIRST");
    let right = qr_side("SECOND");
    let gap = 4 * MODULE;
    let mut canvas = RgbaImage::from_pixel(
        left + gap + right,
        left.max(right),
        Rgba([255, 255, 255, 255]),
    );
    draw_qr(&mut canvas, "FIRST", 0, 0);
    draw_qr(&mut canvas, "SECOND", left + gap, 0);

    let mut payloads: Vec<String> = default_decoder()
        .decode(&canvas)
        .into_iter()
        .map(|s| s.data)
        .collect();
    payloads.sort();
    assert_eq!(payloads, vec!["FIRST".to_string(), "SECOND".to_string()]);
}

#[test]
fn panel_lists_every_pair_and_payload_drives_copy() {
    use omniscan::decode::Symbol;
    let symbols = vec![
        Symbol {
            kind: "QRCODE".into(),
            data: "one".into(),
        },
        Symbol {
            kind: "QRCODE".into(),
            data: "two".into(),
        },
    ];
    let panel = format_results(&symbols);
    assert!(panel.contains("Type: QRCODE\nData: one"));
    assert!(panel.contains("Type: QRCODE\nData: two"));
    assert_eq!(first_payload(&symbols).as_deref(), Some("one"));
}
