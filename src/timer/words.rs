//! Remaining-station labels

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 3] = [
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spell out a cardinal number in lowercase English ("twenty-one").
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut parts = Vec::new();
    let mut rest = n;
    for (scale, name) in SCALES {
        if rest >= scale {
            parts.push(format!("{} {}", below_thousand(rest / scale), name));
            rest %= scale;
        }
    }
    if rest > 0 {
        parts.push(below_thousand(rest));
    }
    parts.join(" ")
}

// Spells 1..=999. Groups of a thousand billion or more recurse.
fn below_thousand(n: u64) -> String {
    if n >= 1000 {
        return cardinal(n);
    }

    let hundreds = n / 100;
    let rest = n % 100;
    let tail = match rest {
        0 => None,
        1..=19 => Some(ONES[rest as usize].to_string()),
        _ if rest % 10 == 0 => Some(TENS[(rest / 10) as usize].to_string()),
        _ => Some(format!(
            "{}-{}",
            TENS[(rest / 10) as usize],
            ONES[(rest % 10) as usize]
        )),
    };

    match (hundreds, tail) {
        (0, Some(tail)) => tail,
        (h, None) => format!("{} hundred", ONES[h as usize]),
        (h, Some(tail)) => format!("{} hundred {}", ONES[h as usize], tail),
    }
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label for the number of stations still to run.
pub fn stations_label(remaining: u32) -> String {
    match remaining {
        0 => "No more stations".to_string(),
        1 => "Last station".to_string(),
        n => format!("{} stations remaining", sentence_case(&cardinal(u64::from(n)))),
    }
}
