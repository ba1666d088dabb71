use arboard::Clipboard;

/// Places `text` on the system clipboard.
pub fn copy_text(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)
}
