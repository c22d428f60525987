use anyhow::Result;

/// Copy `text` to the system clipboard. Write-only: OmniScan never reads
/// the clipboard back.
pub fn copy_text(text: &str) -> Result<()> {
    let mut cb = arboard::Clipboard::new()?;
    cb.set_text(text.to_string())?;
    Ok(())
}
