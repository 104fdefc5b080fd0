use crate::timing::row_to_beat;

/// Builds one `#TAG:entry,entry,...;` block, one entry per line.
///
/// `begin` arms the `#TAG:` prefix; the first `put` consumes it and every
/// later entry is prefixed with the comma separator instead. `end` closes the
/// tag, emitting `#TAG:;` when no entry was written.
pub struct TagWriter<'a> {
    lines: &'a mut Vec<String>,
    next: String,
}

impl<'a> TagWriter<'a> {
    pub fn new(lines: &'a mut Vec<String>) -> Self {
        Self {
            lines,
            next: String::new(),
        }
    }

    pub fn begin(&mut self, tag: &str) {
        self.next = format!("#{tag}:");
    }

    /// Emit one entry: the row's beat position to three decimals, `=`, then
    /// the already-formatted value.
    pub fn put(&mut self, row: i32, value: &str) {
        self.lines
            .push(format!("{}{:.3}={}", self.next, row_to_beat(row), value));
        self.next = ",".to_string();
    }

    pub fn put_f32(&mut self, row: i32, value: f32) {
        self.put(row, &format!("{value:.3}"));
    }

    pub fn put_i32(&mut self, row: i32, value: i32) {
        self.put(row, &value.to_string());
    }

    pub fn put_int_pair(&mut self, row: i32, a: i32, b: i32) {
        self.put(row, &format!("{a}={b}"));
    }

    pub fn put_float_pair(&mut self, row: i32, a: f32, b: f32) {
        self.put(row, &format!("{a:.3}={b:.3}"));
    }

    pub fn put_float_pair_unit(&mut self, row: i32, a: f32, b: f32, unit: u16) {
        self.put(row, &format!("{a:.3}={b:.3}={unit}"));
    }

    pub fn end(&mut self) {
        let line = if self.next == "," {
            ";".to_string()
        } else {
            format!("{};", self.next)
        };
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag() {
        let mut lines = Vec::new();
        let mut w = TagWriter::new(&mut lines);
        w.begin("LABELS");
        w.end();
        assert_eq!(lines, vec!["#LABELS:;"]);
    }

    #[test]
    fn test_single_entry() {
        let mut lines = Vec::new();
        let mut w = TagWriter::new(&mut lines);
        w.begin("BPMS");
        w.put_f32(0, 120.0);
        w.end();
        assert_eq!(lines, vec!["#BPMS:0.000=120.000", ";"]);
    }

    #[test]
    fn test_comma_chaining() {
        let mut lines = Vec::new();
        let mut w = TagWriter::new(&mut lines);
        w.begin("BPMS");
        w.put_f32(0, 120.0);
        w.put_f32(96, 150.5);
        w.end();
        assert_eq!(lines, vec!["#BPMS:0.000=120.000", ",2.000=150.500", ";"]);
    }

    #[test]
    fn test_payload_shapes() {
        let mut lines = Vec::new();
        let mut w = TagWriter::new(&mut lines);
        w.begin("TIMESIGNATURES");
        w.put_int_pair(0, 7, 8);
        w.end();
        w.begin("SPEEDS");
        w.put_float_pair_unit(48, 2.0, 1.5, 1);
        w.end();
        w.begin("SCROLLS");
        w.put_float_pair(0, 1.0, 0.5);
        w.end();
        assert_eq!(
            lines,
            vec![
                "#TIMESIGNATURES:0.000=7=8",
                ";",
                "#SPEEDS:1.000=2.000=1.500=1",
                ";",
                "#SCROLLS:0.000=1.000=0.500",
                ";",
            ]
        );
    }

    #[test]
    fn test_successive_tags_reset_state() {
        let mut lines = Vec::new();
        let mut w = TagWriter::new(&mut lines);
        w.begin("STOPS");
        w.put_f32(48, 0.5);
        w.end();
        w.begin("DELAYS");
        w.end();
        assert_eq!(lines, vec!["#STOPS:1.000=0.500", ";", "#DELAYS:;"]);
    }
}
