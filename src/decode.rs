use image::RgbaImage;

/// A decoded QR/barcode instance found in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Symbology name, e.g. "QRCODE".
    pub kind: String,
    /// Decoded payload as text.
    pub data: String,
}

/// Decoder seam: one call, all backends swappable behind it. Implementations
/// must not panic or error past this boundary — any internal failure maps to
/// an empty result ("no symbol found").
pub trait SymbolDecoder: Send {
    fn decode(&self, image: &RgbaImage) -> Vec<Symbol>;
}

/// rqrr-backed QR decoder. Pure Rust, available on every target, so a single
/// backend serves all platforms. Returns every grid found in the frame, in
/// detection order.
pub struct QrDecoder;

impl SymbolDecoder for QrDecoder {
    fn decode(&self, image: &RgbaImage) -> Vec<Symbol> {
        let gray = image::DynamicImage::ImageRgba8(image.clone()).to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare(gray);
        let grids = prepared.detect_grids();

        let mut symbols = Vec::new();
        for grid in grids {
            match grid.decode() {
                Ok((_, content)) => symbols.push(Symbol {
                    kind: "QRCODE".into(),
                    data: content,
                }),
                // Grids that fail to decode (damaged, partially covered)
                // are simply not symbols.
                Err(e) => tracing::debug!("grid decode failed: {e}"),
            }
        }
        symbols
    }
}

/// The backend used by the application. Single construction point: a
/// platform-specific decoder would be selected here without touching any
/// call site.
pub fn default_decoder() -> Box<dyn SymbolDecoder> {
    Box::new(QrDecoder)
}

pub const NO_SYMBOL_TEXT: &str = "No symbol found.";

/// Result-panel text for one frame's decode results.
pub fn format_results(symbols: &[Symbol]) -> String {
    if symbols.is_empty() {
        return NO_SYMBOL_TEXT.to_string();
    }
    let mut out = String::new();
    for s in symbols {
        out.push_str(&format!("Type: {}\nData: {}\n\n", s.kind, s.data));
    }
    out
}

/// The payload the copy action places on the clipboard. The copy action is
/// enabled exactly when this is `Some`.
pub fn first_payload(symbols: &[Symbol]) -> Option<String> {
    symbols.first().map(|s| s.data.clone())
}
