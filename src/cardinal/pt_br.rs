use crate::{groups, Lexicon};

const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Singular and plural forms; index 1 ("mil") is invariable.
const SCALES: [(&str, &str); 12] = [
    ("", ""),
    ("mil", "mil"),
    ("milhão", "milhões"),
    ("bilhão", "bilhões"),
    ("trilhão", "trilhões"),
    ("quatrilhão", "quatrilhões"),
    ("quintilhão", "quintilhões"),
    ("sextilhão", "sextilhões"),
    ("septilhão", "septilhões"),
    ("octilhão", "octilhões"),
    ("nonilhão", "nonilhões"),
    ("decilhão", "decilhões"),
];

pub(crate) struct BrazilianPortuguese;

impl Lexicon for BrazilianPortuguese {
    fn minus(&self) -> &'static str {
        "menos"
    }

    fn point(&self) -> &'static str {
        "vírgula"
    }

    /// Groups are separated by commas, except that the last group takes "e"
    /// when it is below one hundred or a round hundred ("mil e duzentos",
    /// but "mil, duzentos e trinta").
    fn integer(&self, n: u128) -> String {
        if n == 0 {
            return UNITS[0].to_string();
        }

        let groups = groups(n);
        let last = groups.len() - 1;
        let mut out = String::new();
        for (i, &(scale, value)) in groups.iter().enumerate() {
            if i > 0 {
                let joins_with_e = i == last && (value < 100 || value % 100 == 0);
                out.push_str(if joins_with_e { " e " } else { ", " });
            }
            out.push_str(&group(scale, value));
        }
        out
    }
}

fn group(scale: usize, value: u32) -> String {
    match scale {
        0 => below_thousand(value),
        1 if value == 1 => SCALES[1].0.to_string(),
        _ => {
            let (singular, plural) = SCALES[scale];
            let name = if value == 1 { singular } else { plural };
            format!("{} {}", below_thousand(value), name)
        }
    }
}

fn below_thousand(n: u32) -> String {
    if n == 100 {
        return "cem".to_string();
    }

    let n = n as usize;
    let mut parts = Vec::with_capacity(3);
    if n >= 100 {
        parts.push(HUNDREDS[n / 100]);
    }
    let rest = n % 100;
    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            parts.push(UNITS[rest % 10]);
        }
    } else if rest > 0 {
        parts.push(UNITS[rest]);
    }
    parts.join(" e ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(n: u128) -> String {
        BrazilianPortuguese.integer(n)
    }

    #[test]
    fn small_numbers() {
        assert_eq!(spell(0), "zero");
        assert_eq!(spell(14), "catorze");
        assert_eq!(spell(16), "dezesseis");
        assert_eq!(spell(20), "vinte");
        assert_eq!(spell(42), "quarenta e dois");
    }

    #[test]
    fn hundreds() {
        assert_eq!(spell(100), "cem");
        assert_eq!(spell(101), "cento e um");
        assert_eq!(spell(200), "duzentos");
        assert_eq!(spell(555), "quinhentos e cinquenta e cinco");
    }

    #[test]
    fn thousands_drop_um() {
        assert_eq!(spell(1000), "mil");
        assert_eq!(spell(1001), "mil e um");
        assert_eq!(spell(2000), "dois mil");
        assert_eq!(spell(100_000), "cem mil");
    }

    #[test]
    fn last_group_separator() {
        assert_eq!(spell(1100), "mil e cem");
        assert_eq!(spell(1200), "mil e duzentos");
        assert_eq!(spell(1234), "mil, duzentos e trinta e quatro");
        assert_eq!(spell(1_200_000), "um milhão e duzentos mil");
        assert_eq!(spell(1_000_101), "um milhão, cento e um");
    }

    #[test]
    fn scale_plurals() {
        assert_eq!(spell(1_000_000), "um milhão");
        assert_eq!(spell(2_000_000), "dois milhões");
        assert_eq!(spell(1_000_000_000), "um bilhão");
        assert_eq!(spell(5_000_000_000_000), "cinco trilhões");
    }
}
