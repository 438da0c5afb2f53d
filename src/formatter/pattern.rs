//! Angular-style date pattern rendering
//!
//! Patterns are runs of field letters (`dd`, `MMM`, `yyyy`, ...) mixed with
//! literal text. Text inside single quotes is always literal and `''` stands
//! for one quote. Letters without a field meaning are copied through.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// Piece of a tokenized pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Field { symbol: char, width: usize },
}

/// Maximum run length for each supported field letter
fn max_width(symbol: char) -> Option<usize> {
    match symbol {
        'G' | 'M' | 'L' | 'a' | 'Z' => Some(5),
        'y' | 'z' => Some(4),
        'E' => Some(6),
        'd' | 'h' | 'H' | 'm' | 's' => Some(2),
        'S' => Some(3),
        _ => None,
    }
}

/// Resolve the named formats (`short`, `mediumDate`, ...) to their patterns.
/// Anything else is returned unchanged.
pub fn expand_named(pattern: &str) -> &str {
    match pattern {
        "short" => "M/d/yy, h:mm a",
        "medium" => "MMM d, y, h:mm:ss a",
        "long" => "MMMM d, y, h:mm:ss a z",
        "full" => "EEEE, MMMM d, y, h:mm:ss a zzzz",
        "shortDate" => "M/d/yy",
        "mediumDate" => "MMM d, y",
        "longDate" => "MMMM d, y",
        "fullDate" => "EEEE, MMMM d, y",
        "shortTime" => "h:mm a",
        "mediumTime" => "h:mm:ss a",
        "longTime" => "h:mm:ss a z",
        "fullTime" => "h:mm:ss a zzzz",
        other => other,
    }
}

/// Split a pattern into literal and field tokens
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            // '' outside a quoted section is an escaped quote
            if chars.get(i + 1) == Some(&'\'') {
                literal.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            while i < chars.len() {
                if chars[i] == '\'' {
                    if chars.get(i + 1) == Some(&'\'') {
                        literal.push('\'');
                        i += 2;
                        continue;
                    }
                    i += 1;
                    break;
                }
                literal.push(chars[i]);
                i += 1;
            }
            continue;
        }

        match max_width(c) {
            Some(max) => {
                let mut width = 1;
                while width < max && chars.get(i + width) == Some(&c) {
                    width += 1;
                }
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Field { symbol: c, width });
                i += width;
            }
            None => {
                literal.push(c);
                i += 1;
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Render `dt` according to `pattern`
pub fn render(dt: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::new();
    for token in tokenize(expand_named(pattern)) {
        match token {
            Token::Literal(text) => out.push_str(&text),
            Token::Field { symbol, width } => out.push_str(&render_field(dt, symbol, width)),
        }
    }
    out
}

fn render_field(dt: &DateTime<FixedOffset>, symbol: char, width: usize) -> String {
    match symbol {
        'G' => {
            let ad = dt.year() > 0;
            match (width, ad) {
                (1..=3, true) => "AD".to_string(),
                (1..=3, false) => "BC".to_string(),
                (4, true) => "Anno Domini".to_string(),
                (4, false) => "Before Christ".to_string(),
                (_, true) => "A".to_string(),
                (_, false) => "B".to_string(),
            }
        }
        'y' => match width {
            1 => dt.year().to_string(),
            2 => format!("{:02}", dt.year().rem_euclid(100)),
            _ => pad(i64::from(dt.year()), width),
        },
        'M' | 'L' => match width {
            1 | 2 => pad(i64::from(dt.month()), width),
            3 => dt.format("%b").to_string(),
            4 => dt.format("%B").to_string(),
            _ => initial(&dt.format("%B").to_string()),
        },
        'd' => pad(i64::from(dt.day()), width),
        'E' => match width {
            1..=3 => dt.format("%a").to_string(),
            4 => dt.format("%A").to_string(),
            5 => initial(&dt.format("%A").to_string()),
            _ => dt.format("%A").to_string().chars().take(2).collect(),
        },
        'a' if width == 5 => dt.format("%P").to_string().chars().take(1).collect(),
        'a' => dt.format("%p").to_string(),
        'h' => {
            let hour = match dt.hour() % 12 {
                0 => 12,
                h => h,
            };
            pad(i64::from(hour), width)
        }
        'H' => pad(i64::from(dt.hour()), width),
        'm' => pad(i64::from(dt.minute()), width),
        's' => pad(i64::from(dt.second()), width),
        'S' => {
            let millis = dt.timestamp_subsec_millis().min(999);
            match width {
                1 => (millis / 100).to_string(),
                2 => format!("{:02}", millis / 10),
                _ => format!("{:03}", millis),
            }
        }
        'Z' => render_offset(dt.offset().local_minus_utc(), width),
        'z' => render_gmt(dt.offset().local_minus_utc(), width),
        other => other.to_string().repeat(width),
    }
}

/// Zero-pad to `width` digits, keeping the sign in front
fn pad(value: i64, width: usize) -> String {
    if value < 0 {
        format!("-{:0width$}", value.unsigned_abs(), width = width)
    } else {
        format!("{:0width$}", value, width = width)
    }
}

fn initial(name: &str) -> String {
    name.chars().take(1).collect()
}

fn split_offset(seconds: i32) -> (char, u32, u32) {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    (sign, minutes / 60, minutes % 60)
}

/// `Z`-`ZZZ` give `+0100`, `ZZZZ` gives `GMT+01:00`, `ZZZZZ` gives `+01:00` or `Z`
fn render_offset(seconds: i32, width: usize) -> String {
    let (sign, hours, minutes) = split_offset(seconds);
    match width {
        1..=3 => format!("{}{:02}{:02}", sign, hours, minutes),
        4 => format!("GMT{}{:02}:{:02}", sign, hours, minutes),
        _ if seconds == 0 => "Z".to_string(),
        _ => format!("{}{:02}:{:02}", sign, hours, minutes),
    }
}

/// `z`-`zzz` give `GMT+1`, `zzzz` gives `GMT+01:00`
fn render_gmt(seconds: i32, width: usize) -> String {
    let (sign, hours, minutes) = split_offset(seconds);
    if width == 4 {
        format!("GMT{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("GMT{}{}", sign, hours)
    }
}
