use crate::{groups, Lexicon};

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

pub(crate) struct English;

impl Lexicon for English {
    fn minus(&self) -> &'static str {
        "minus"
    }

    fn point(&self) -> &'static str {
        "point"
    }

    /// British-style cardinals: "and" after hundreds, commas between groups,
    /// and "and" before a trailing group below one hundred.
    fn integer(&self, n: u128) -> String {
        if n == 0 {
            return ONES[0].to_string();
        }

        let groups = groups(n);
        let last = groups.len() - 1;
        let mut out = String::new();
        for (i, &(scale, value)) in groups.iter().enumerate() {
            if i > 0 {
                let trailing_small = i == last && scale == 0 && value < 100;
                out.push_str(if trailing_small { " and " } else { ", " });
            }
            out.push_str(&below_thousand(value));
            if scale > 0 {
                out.push(' ');
                out.push_str(SCALES[scale]);
            }
        }
        out
    }
}

fn below_thousand(n: u32) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, _) => below_hundred(rest),
        (_, 0) => format!("{} hundred", ONES[hundreds as usize]),
        _ => format!(
            "{} hundred and {}",
            ONES[hundreds as usize],
            below_hundred(rest)
        ),
    }
}

fn below_hundred(n: u32) -> String {
    let n = n as usize;
    match (n / 10, n % 10) {
        _ if n < 20 => ONES[n].to_string(),
        (tens, 0) => TENS[tens].to_string(),
        (tens, ones) => format!("{}-{}", TENS[tens], ONES[ones]),
    }
}
