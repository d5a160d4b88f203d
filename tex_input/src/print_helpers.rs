use std::fmt;

/// Writes the value with a `|` where the caret is, like "a|b".
pub fn write_with_caret(value: &str, caret: usize, f: &mut impl fmt::Write) -> fmt::Result {
    let mut caret_written = false;
    for (offset, c) in value.chars().enumerate() {
        if offset == caret {
            f.write_char('|')?;
            caret_written = true;
        }
        f.write_char(c)?;
    }
    if !caret_written {
        f.write_char('|')?;
    }
    Ok(())
}

pub fn with_caret(value: &str, caret: usize) -> String {
    let mut result = String::with_capacity(value.len() + 1);
    // Writing into a String cannot fail
    let _ = write_with_caret(value, caret, &mut result);
    result
}
