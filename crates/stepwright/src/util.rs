/// Backslash-escape free text before embedding it in a tag value.
///
/// Escapes the tag terminator, the field separator, the escape character
/// itself, and both slashes of any `//` pair so a value can never open a
/// comment.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' | ':' | ';' => {
                out.push('\\');
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                out.push_str("\\/\\/");
            }
            _ => out.push(c),
        }
    }
    out
}

/// Replace characters that are invalid in filenames on common filesystems.
pub fn make_valid_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
