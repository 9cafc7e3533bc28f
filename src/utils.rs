const SIZE_UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Human-readable size: `3.0KB`, `512.0bytes`, `1.5MB`.
pub fn size_format(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{:3.1}{}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:3.1}{}", value, SIZE_UNITS[SIZE_UNITS.len() - 1])
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(size_format(0), "0.0bytes");
        assert_eq!(size_format(512), "512.0bytes");
        assert_eq!(size_format(3 * 1024), "3.0KB");
        assert_eq!(size_format(1536 * 1024), "1.5MB");
        assert_eq!(size_format(2048 * 1024 * 1024 * 1024 * 1024), "2048.0TB");
    }

    #[test]
    fn escapes() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("MRL"), "MRL");
    }
}
